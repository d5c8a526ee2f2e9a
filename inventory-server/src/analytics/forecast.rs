//! Demand Forecast Calculator
//!
//! Pure functions: a product, its sales totals and a start date in, a
//! projection out. Nothing here is persisted.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use shared::models::Product;

use crate::db::repository::sale::SalesTotals;

/// Default projection horizon in days
pub const DEFAULT_FORECAST_DAYS: u32 = 7;

/// Longest projection accepted by the single-product endpoint
pub const MAX_FORECAST_DAYS: u32 = 90;

/// Projected stock below this level means the product needs a reorder
pub const REORDER_THRESHOLD: i64 = 5;

/// Smallest quantity a reorder suggestion proposes
pub const MIN_SUGGESTED_REORDER: i64 = 10;

/// The average is never taken over fewer than this many days
const MIN_AVERAGING_WINDOW: i64 = 7;

// ============================================================================
// Output Types
// ============================================================================

/// One projected day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPrediction {
    /// 1-based day offset from today
    pub day: u32,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    pub predicted_demand: i64,
    pub predicted_stock: i64,
}

/// Stock projection for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductForecast {
    pub product_id: i64,
    pub product_name: String,
    pub sku: String,
    pub current_stock: i64,
    pub predictions: Vec<DailyPrediction>,
    pub total_predicted_demand: i64,
    pub needs_reorder: bool,
}

/// Reorder proposal for a product whose projection falls below the threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderSuggestion {
    pub product_id: i64,
    pub product_name: String,
    pub sku: String,
    pub current_stock: i64,
    pub predicted_demand_7d: i64,
    pub predicted_stock_7d: i64,
    pub suggested_reorder_quantity: i64,
}

// ============================================================================
// Calculation
// ============================================================================

/// Average units sold per day
///
/// Total sold divided by the larger of seven and the number of sales. A
/// product without sales is assumed to sell one unit a week.
pub fn average_daily_sales(totals: &SalesTotals) -> f64 {
    if totals.sale_count == 0 {
        return 1.0 / MIN_AVERAGING_WINDOW as f64;
    }
    totals.total_sold as f64 / totals.sale_count.max(MIN_AVERAGING_WINDOW) as f64
}

/// Project `days` days of demand starting the day after `today`
///
/// Daily demand is the rounded-up average and stays constant; projected stock
/// never drops below zero even when current stock already has.
pub fn project(product: &Product, totals: &SalesTotals, days: u32, today: NaiveDate) -> ProductForecast {
    let daily_demand = average_daily_sales(totals).ceil() as i64;

    let mut stock = product.quantity;
    let predictions: Vec<DailyPrediction> = (1..=days)
        .map(|day| {
            stock = stock.saturating_sub(daily_demand).max(0);
            let date = today
                .checked_add_days(Days::new(u64::from(day)))
                .unwrap_or(today);
            DailyPrediction {
                day,
                date: date.format("%Y-%m-%d").to_string(),
                predicted_demand: daily_demand,
                predicted_stock: stock,
            }
        })
        .collect();

    let total_predicted_demand = predictions
        .iter()
        .fold(0_i64, |acc, p| acc.saturating_add(p.predicted_demand));
    let needs_reorder = predictions
        .last()
        .is_some_and(|p| p.predicted_stock < REORDER_THRESHOLD);

    ProductForecast {
        product_id: product.id,
        product_name: product.name.clone(),
        sku: product.sku.clone(),
        current_stock: product.quantity,
        predictions,
        total_predicted_demand,
        needs_reorder,
    }
}

/// Build a reorder suggestion from a forecast, `None` when stock holds up
pub fn suggest_reorder(forecast: &ProductForecast) -> Option<ReorderSuggestion> {
    if !forecast.needs_reorder {
        return None;
    }
    let predicted_stock = forecast
        .predictions
        .last()
        .map_or(forecast.current_stock, |p| p.predicted_stock);

    Some(ReorderSuggestion {
        product_id: forecast.product_id,
        product_name: forecast.product_name.clone(),
        sku: forecast.sku.clone(),
        current_stock: forecast.current_stock,
        predicted_demand_7d: forecast.total_predicted_demand,
        predicted_stock_7d: predicted_stock,
        suggested_reorder_quantity: forecast
            .total_predicted_demand
            .saturating_mul(2)
            .max(MIN_SUGGESTED_REORDER),
    })
}
