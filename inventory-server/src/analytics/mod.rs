//! Demand analytics
//!
//! Loads products and sales totals, then hands them to the pure calculator
//! in [`forecast`].

pub mod forecast;

pub use forecast::{
    DEFAULT_FORECAST_DAYS, DailyPrediction, MAX_FORECAST_DAYS, ProductForecast, ReorderSuggestion,
};

use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use sqlx::AnyPool;

use crate::db::repository::{self, sale::SalesTotals};
use crate::utils::{AppError, AppResult, ErrorCode};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Forecast every product over `days` days, in product list order
pub async fn forecast_all(pool: &AnyPool, days: u32) -> AppResult<Vec<ProductForecast>> {
    let products = repository::product::find_all(pool).await?;
    let totals: HashMap<i64, SalesTotals> = repository::sale::totals_by_product(pool)
        .await?
        .into_iter()
        .map(|t| (t.product_id, t))
        .collect();

    let today = today();
    let forecasts = products
        .iter()
        .map(|product| {
            let product_totals = totals.get(&product.id).copied().unwrap_or(SalesTotals {
                product_id: product.id,
                ..Default::default()
            });
            forecast::project(product, &product_totals, days, today)
        })
        .collect();
    Ok(forecasts)
}

/// Forecast one product; `days` must be within `1..=MAX_FORECAST_DAYS`
pub async fn forecast_one(pool: &AnyPool, product_id: i64, days: u32) -> AppResult<ProductForecast> {
    if !(1..=MAX_FORECAST_DAYS).contains(&days) {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("days must be between 1 and {MAX_FORECAST_DAYS}"),
        )
        .with_detail("field", "days"));
    }

    let product = repository::product::find_by_id(pool, product_id)
        .await?
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::ProductNotFound,
                format!("Product {product_id} not found"),
            )
        })?;
    let totals = repository::sale::totals_for_product(pool, product_id).await?;

    Ok(forecast::project(&product, &totals, days, today()))
}

/// Products whose seven-day projection falls below the reorder threshold
pub async fn reorder_suggestions(pool: &AnyPool) -> AppResult<Vec<ReorderSuggestion>> {
    let forecasts = forecast_all(pool, DEFAULT_FORECAST_DAYS).await?;
    let suggestions: Vec<ReorderSuggestion> =
        forecasts.iter().filter_map(forecast::suggest_reorder).collect();
    tracing::debug!(count = suggestions.len(), "Reorder suggestions computed");
    Ok(suggestions)
}
