//! Sale Repository

use super::RepoResult;
use shared::models::{Sale, SaleCreate};
use sqlx::{Any, Executor};

/// Units sold and number of sales for one product
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct SalesTotals {
    pub product_id: i64,
    pub total_sold: i64,
    pub sale_count: i64,
}

/// All sales, newest first
pub async fn find_all<'e, E>(executor: E) -> RepoResult<Vec<Sale>>
where
    E: Executor<'e, Database = Any>,
{
    let rows = sqlx::query_as::<_, Sale>(
        "SELECT id, product_id, quantity, total_price, timestamp FROM sales ORDER BY timestamp DESC, id DESC",
    )
    .fetch_all(executor)
    .await?;
    Ok(rows)
}

/// The `limit` most recent sales
pub async fn find_recent<'e, E>(executor: E, limit: i64) -> RepoResult<Vec<Sale>>
where
    E: Executor<'e, Database = Any>,
{
    let rows = sqlx::query_as::<_, Sale>(
        "SELECT id, product_id, quantity, total_price, timestamp FROM sales ORDER BY timestamp DESC, id DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(executor)
    .await?;
    Ok(rows)
}

/// Per-product totals for every product with at least one sale
pub async fn totals_by_product<'e, E>(executor: E) -> RepoResult<Vec<SalesTotals>>
where
    E: Executor<'e, Database = Any>,
{
    // SUM over BIGINT is NUMERIC on Postgres, which the Any driver cannot decode
    let rows = sqlx::query_as::<_, SalesTotals>(
        "SELECT product_id, CAST(SUM(quantity) AS BIGINT) AS total_sold, COUNT(*) AS sale_count FROM sales GROUP BY product_id",
    )
    .fetch_all(executor)
    .await?;
    Ok(rows)
}

/// Totals for one product; zero when it has no sales
pub async fn totals_for_product<'e, E>(executor: E, product_id: i64) -> RepoResult<SalesTotals>
where
    E: Executor<'e, Database = Any>,
{
    let (total_sold, sale_count): (i64, i64) = sqlx::query_as(
        "SELECT CAST(COALESCE(SUM(quantity), 0) AS BIGINT), COUNT(*) FROM sales WHERE product_id = $1",
    )
    .bind(product_id)
    .fetch_one(executor)
    .await?;
    Ok(SalesTotals {
        product_id,
        total_sold,
        sale_count,
    })
}

pub async fn create<'e, E>(executor: E, data: &SaleCreate, timestamp: i64) -> RepoResult<Sale>
where
    E: Executor<'e, Database = Any>,
{
    let row = sqlx::query_as::<_, Sale>(
        "INSERT INTO sales (product_id, quantity, total_price, timestamp) VALUES ($1, $2, $3, $4) RETURNING id, product_id, quantity, total_price, timestamp",
    )
    .bind(data.product_id)
    .bind(data.quantity)
    .bind(data.total_price)
    .bind(timestamp)
    .fetch_one(executor)
    .await?;
    Ok(row)
}
