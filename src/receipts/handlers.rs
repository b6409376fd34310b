//! HTTP handlers for receipt submission and points lookup

use axum::{
    Json,
    extract::{FromRef, Path, State},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::ValidationConfig;
use crate::core::error::{ReceiptError, ReceiptsResult};
use crate::core::points;
use crate::core::receipt::{PointsResponse, ProcessReceiptResponse};
use crate::core::validation::ValidatedReceipt;
use crate::core::ReceiptStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReceiptStore>,
    pub validation: ValidationConfig,
}

impl FromRef<AppState> for ValidationConfig {
    fn from_ref(state: &AppState) -> Self {
        state.validation
    }
}

/// Score a submitted receipt and store it
///
/// POST /receipt/process
pub async fn process_receipt(
    State(state): State<AppState>,
    ValidatedReceipt(draft): ValidatedReceipt,
) -> ReceiptsResult<Json<ProcessReceiptResponse>> {
    let breakdown = points::breakdown(&draft);
    let points = breakdown.total();
    tracing::debug!(?breakdown, "scored receipt");

    let receipt = draft.into_receipt(Uuid::new_v4(), points);
    let id = receipt.id;
    state.store.insert(receipt).await?;

    tracing::info!(%id, points, "receipt processed");
    Ok(Json(ProcessReceiptResponse { id }))
}

/// Points awarded to a stored receipt
///
/// GET /receipt/{id}/points
///
/// Identifiers that are not UUIDs cannot have been issued, so they are
/// reported as not found rather than as a malformed request.
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ReceiptsResult<Json<PointsResponse>> {
    let not_found = || ReceiptError::NotFound { id: id.clone() };

    let uuid = Uuid::parse_str(&id).map_err(|_| not_found())?;
    let receipt = state.store.find_by_id(&uuid).await?.ok_or_else(|| {
        tracing::debug!(%id, "points requested for unknown receipt");
        not_found()
    })?;

    Ok(Json(PointsResponse {
        points: receipt.points,
    }))
}
