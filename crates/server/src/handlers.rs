use axum::{extract::Query, Json};
use chrono::Local;
use serde::Deserialize;

use models::{HealthStatus, HistoryResponse, KpiSummary, TransactionsResponse};

use crate::{error::ApiError, services, Result};

const VERSION: &str = "1.0.0";

/// GET /api/status
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
        version: VERSION.to_string(),
    })
}

/// GET /api/kpi/summary
pub async fn get_kpi_summary() -> Json<KpiSummary> {
    Json(services::generate_kpi_summary())
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    #[serde(default = "default_range")]
    pub range: String,
    #[serde(default = "default_metric")]
    pub metric: String,
}

fn default_range() -> String {
    "30d".to_string()
}

fn default_metric() -> String {
    "revenue".to_string()
}

/// GET /api/kpi/history?range=30d&metric=revenue
pub async fn get_kpi_history(Query(params): Query<HistoryParams>) -> Result<Json<HistoryResponse>> {
    let range_days = parse_range(&params.range)?;
    Ok(Json(services::generate_history(range_days, &params.metric)))
}

/// Parses a range descriptor like `7d` or `30d` into a day count.
fn parse_range(raw: &str) -> Result<u32> {
    raw.strip_suffix('d')
        .filter(|days| !days.is_empty() && days.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|days| days.parse::<u32>().ok())
        .ok_or_else(|| ApiError::InvalidRange(raw.to_string()))
}

#[derive(Debug, Deserialize)]
pub struct TransactionsParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    5
}

/// GET /api/transactions?limit=5
pub async fn get_transactions(
    Query(params): Query<TransactionsParams>,
) -> Result<Json<TransactionsResponse>> {
    if !(1..=20).contains(&params.limit) {
        return Err(ApiError::InvalidLimit(params.limit));
    }

    Ok(Json(services::generate_transactions(params.limit as usize)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_descriptors_parse_to_day_counts() {
        assert_eq!(parse_range("7d").unwrap(), 7);
        assert_eq!(parse_range("30d").unwrap(), 30);
        assert_eq!(parse_range("365d").unwrap(), 365);
    }

    #[test]
    fn malformed_range_descriptors_are_rejected() {
        for raw in ["", "d", "7", "abc", "7D", "+7d", "7.5d", "7dd"] {
            assert!(parse_range(raw).is_err(), "{raw:?} should be rejected");
        }
    }
}
