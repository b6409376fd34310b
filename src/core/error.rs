//! Typed error handling for the receipt service
//!
//! Every failure that can reach a client is expressed as a [`ReceiptsError`],
//! which knows its HTTP status code and a stable error code for programmatic
//! handling.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: malformed or missing submission fields, bad JSON
//! - [`ReceiptError`]: lookups for receipts that do not exist
//! - [`StorageError`]: failures inside a store backend
//! - [`ConfigError`]: configuration loading problems (startup only)
//!
//! # Example
//!
//! ```rust,ignore
//! use receipts::prelude::*;
//!
//! async fn points_for(store: &dyn ReceiptStore, id: Uuid) -> ReceiptsResult<u64> {
//!     let receipt = store
//!         .find_by_id(&id)
//!         .await?
//!         .ok_or(ReceiptError::NotFound { id: id.to_string() })?;
//!     Ok(receipt.points)
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for the receipt service
#[derive(Debug)]
pub enum ReceiptsError {
    /// Submission validation errors
    Validation(ValidationError),

    /// Receipt lookup errors
    Receipt(ReceiptError),

    /// Storage backend errors
    Storage(StorageError),

    /// Configuration errors
    Config(ConfigError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for ReceiptsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReceiptsError::Validation(e) => write!(f, "{}", e),
            ReceiptsError::Receipt(e) => write!(f, "{}", e),
            ReceiptsError::Storage(e) => write!(f, "{}", e),
            ReceiptsError::Config(e) => write!(f, "{}", e),
            ReceiptsError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ReceiptsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReceiptsError::Validation(e) => Some(e),
            ReceiptsError::Receipt(e) => Some(e),
            ReceiptsError::Storage(e) => Some(e),
            ReceiptsError::Config(e) => Some(e),
            ReceiptsError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ReceiptsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReceiptsError::Validation(_) => StatusCode::BAD_REQUEST,
            ReceiptsError::Receipt(e) => e.status_code(),
            ReceiptsError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ReceiptsError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ReceiptsError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ReceiptsError::Validation(_) => "VALIDATION_ERROR",
            ReceiptsError::Receipt(e) => e.error_code(),
            ReceiptsError::Storage(_) => "STORAGE_ERROR",
            ReceiptsError::Config(_) => "CONFIG_ERROR",
            ReceiptsError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ReceiptsError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            ReceiptsError::Receipt(ReceiptError::NotFound { id }) => {
                Some(serde_json::json!({ "id": id }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for ReceiptsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), "{}", self);
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Receipt Errors
// =============================================================================

/// Errors related to receipt lookups
#[derive(Debug)]
pub enum ReceiptError {
    /// No stored receipt carries this identifier
    NotFound { id: String },
}

impl fmt::Display for ReceiptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReceiptError::NotFound { .. } => write!(f, "No receipt found for that id"),
        }
    }
}

impl std::error::Error for ReceiptError {}

impl ReceiptError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReceiptError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ReceiptError::NotFound { .. } => "RECEIPT_NOT_FOUND",
        }
    }
}

impl From<ReceiptError> for ReceiptsError {
    fn from(err: ReceiptError) -> Self {
        ReceiptsError::Receipt(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to submission validation
#[derive(Debug)]
pub enum ValidationError {
    /// One or more fields failed validation
    FieldErrors(Vec<FieldValidationError>),

    /// Request body is not valid JSON for a receipt
    InvalidJson { message: String },
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
            ValidationError::InvalidJson { message } => {
                write!(f, "Invalid JSON: {}", message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for ReceiptsError {
    fn from(err: ValidationError) -> Self {
        ReceiptsError::Validation(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug)]
pub enum StorageError {
    /// A lock guarding shared state was poisoned by a panicking writer
    LockPoisoned { backend: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::LockPoisoned { backend } => {
                write!(f, "Storage backend '{}' lock is poisoned", backend)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for ReceiptsError {
    fn from(err: StorageError) -> Self {
        ReceiptsError::Storage(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse config from {origin}: {message}")]
    ParseError { origin: String, message: String },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file could not be read
    #[error("Failed to read configuration file '{path}': {message}")]
    Unreadable { path: String, message: String },
}

impl From<ConfigError> for ReceiptsError {
    fn from(err: ConfigError) -> Self {
        ReceiptsError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

/// Store traits report failures through `anyhow`; typed errors survive the trip.
impl From<anyhow::Error> for ReceiptsError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<StorageError>() {
            Ok(storage) => ReceiptsError::Storage(storage),
            Err(err) => ReceiptsError::Internal(err.to_string()),
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for receipt service operations
pub type ReceiptsResult<T> = Result<T, ReceiptsError>;
