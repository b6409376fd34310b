//! Axum extractor for validated receipt submissions
//!
//! `ValidatedReceipt` reads the JSON body, applies the configured field
//! rules and hands the handler a [`ReceiptDraft`] that is ready to score.

use super::validate_submission;
use crate::config::ValidationConfig;
use crate::core::error::{ReceiptsError, ValidationError};
use crate::core::receipt::{ReceiptDraft, ReceiptSubmission};
use axum::{
    Json,
    extract::{FromRef, FromRequest, Request},
};

/// Axum extractor that validates a receipt submission
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn process_receipt(
///     State(state): State<AppState>,
///     ValidatedReceipt(draft): ValidatedReceipt,
/// ) -> ReceiptsResult<Json<ProcessReceiptResponse>> {
///     // draft has passed every field rule
/// }
/// ```
#[derive(Debug)]
pub struct ValidatedReceipt(pub ReceiptDraft);

impl<S> FromRequest<S> for ValidatedReceipt
where
    S: Send + Sync,
    ValidationConfig: FromRef<S>,
{
    type Rejection = ReceiptsError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(submission): Json<ReceiptSubmission> = Json::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::warn!(error = %rejection.body_text(), "unreadable receipt submission");
                ValidationError::InvalidJson {
                    message: rejection.body_text(),
                }
            })?;

        let config = ValidationConfig::from_ref(state);
        let draft = validate_submission(submission, &config).inspect_err(|err| {
            tracing::warn!(error = %err, "receipt submission rejected");
        })?;

        Ok(ValidatedReceipt(draft))
    }
}
