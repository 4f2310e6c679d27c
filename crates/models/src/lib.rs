
use serde::{Deserialize, Serialize};

// API response models. Field names match the backend wire format exactly;
// the client decodes these as-is and never mutates them.

/// Snapshot of the current business metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
	pub mrr: f64,
	pub active_users: u64,
	pub churn_rate: f64,
	pub new_customers: u64,
	pub mrr_growth: f64,
}

/// One sample of a time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
	pub date: String,
	pub value: f64,
}

/// A named metric's trend over a window, oldest sample first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
	pub metric: String,
	pub range_days: u32,
	pub data: Vec<DataPoint>,
}

/// One billing event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
	pub id: String,
	pub customer_name: String,
	pub email: String,
	pub amount: f64,
	pub plan: String,
	pub date: String,
	pub status: String,
}

/// A page of transactions, most recent first, plus the returned count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsResponse {
	pub transactions: Vec<Transaction>,
	pub total: u64,
}

/// Service liveness descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
	pub status: String,
	pub timestamp: String,
	pub version: String,
}
