//! # receipt-points
//!
//! An HTTP service that scores purchase receipts with loyalty points.
//!
//! ## Features
//!
//! - **Submission validation**: every field checked, all violations reported at once
//! - **Deterministic scoring**: additive rules over exact decimal amounts
//! - **Pluggable storage**: `ReceiptStore` trait with an in-memory backend
//! - **YAML configuration**: listener address, log filter, description rule
//!
//! ## Routes
//!
//! - `POST /receipt/process` → `{ "id": "<uuid>" }`
//! - `GET /receipt/{id}/points` → `{ "points": "<integer>" }`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use receipts::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     ServerBuilder::new()
//!         .with_store(InMemoryReceiptStore::new())
//!         .with_config(ServiceConfig::load()?)
//!         .serve()
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod receipts;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    pub use crate::config::{ItemDescriptionRule, ServiceConfig, ValidationConfig};

    pub use crate::core::{
        Item, ParseFallback, PointsBreakdown, Receipt, ReceiptDraft, ReceiptStore,
        ReceiptSubmission,
        error::{
            ConfigError, ErrorResponse, FieldValidationError, ReceiptError, ReceiptsError,
            ReceiptsResult, StorageError, ValidationError,
        },
        points::{breakdown, calculate},
        receipt::{PointsResponse, ProcessReceiptResponse},
        validation::{ValidatedReceipt, validate_submission},
    };

    pub use crate::receipts::AppState;
    pub use crate::server::ServerBuilder;
    pub use crate::storage::InMemoryReceiptStore;

    pub use uuid::Uuid;
}
