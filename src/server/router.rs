//! Router for the receipt routes

use crate::receipts::handlers::{AppState, get_points, process_receipt};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Build the receipt routes
///
/// - POST /receipt/process - Validate, score and store a receipt
/// - GET /receipt/{id}/points - Points awarded to a stored receipt
pub fn build_receipt_routes(state: AppState) -> Router {
    Router::new()
        .route("/receipt/process", post(process_receipt))
        .route("/receipt/{id}/points", get(get_points))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
