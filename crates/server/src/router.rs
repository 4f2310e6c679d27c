use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers;

/// Create the application router with all API endpoints
pub fn create_router() -> Router {
    // The dashboard frontend is served from another origin during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/api/status", get(handlers::health_check))
        // KPI endpoints
        .route("/api/kpi/summary", get(handlers::get_kpi_summary))
        .route("/api/kpi/history", get(handlers::get_kpi_history))
        // Transactions endpoint
        .route("/api/transactions", get(handlers::get_transactions))
        // Add middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
