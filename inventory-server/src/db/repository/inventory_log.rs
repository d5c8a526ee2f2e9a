//! Inventory Log Repository
//!
//! Append-only: there is no update or delete.

use super::RepoResult;
use shared::models::{EntityType, InventoryLog, LogAction};
use sqlx::{Any, Executor};

/// New log entry; the timestamp is assigned on insert
#[derive(Debug, Clone)]
pub struct NewLog<'a> {
    pub action: LogAction,
    pub entity_type: EntityType,
    pub entity_id: i64,
    pub change_amount: f64,
    pub description: Option<&'a str>,
}

/// All log entries, newest first
pub async fn find_all<'e, E>(executor: E) -> RepoResult<Vec<InventoryLog>>
where
    E: Executor<'e, Database = Any>,
{
    let rows = sqlx::query_as::<_, InventoryLog>(
        "SELECT id, timestamp, action, entity_type, entity_id, change_amount, description FROM inventory_logs ORDER BY timestamp DESC, id DESC",
    )
    .fetch_all(executor)
    .await?;
    Ok(rows)
}

/// Log entries for one entity, newest first
#[cfg(test)]
pub async fn find_by_entity<'e, E>(
    executor: E,
    entity_type: EntityType,
    entity_id: i64,
) -> RepoResult<Vec<InventoryLog>>
where
    E: Executor<'e, Database = Any>,
{
    let rows = sqlx::query_as::<_, InventoryLog>(
        "SELECT id, timestamp, action, entity_type, entity_id, change_amount, description FROM inventory_logs WHERE entity_type = $1 AND entity_id = $2 ORDER BY timestamp DESC, id DESC",
    )
    .bind(entity_type.as_str())
    .bind(entity_id)
    .fetch_all(executor)
    .await?;
    Ok(rows)
}

/// Append one entry with a server timestamp
pub async fn append<'e, E>(executor: E, log: NewLog<'_>) -> RepoResult<InventoryLog>
where
    E: Executor<'e, Database = Any>,
{
    let now = shared::util::now_millis();
    let row = sqlx::query_as::<_, InventoryLog>(
        "INSERT INTO inventory_logs (timestamp, action, entity_type, entity_id, change_amount, description) VALUES ($1, $2, $3, $4, $5, $6) RETURNING id, timestamp, action, entity_type, entity_id, change_amount, description",
    )
    .bind(now)
    .bind(log.action.as_str())
    .bind(log.entity_type.as_str())
    .bind(log.entity_id)
    .bind(log.change_amount)
    .bind(log.description)
    .fetch_one(executor)
    .await?;
    Ok(row)
}
