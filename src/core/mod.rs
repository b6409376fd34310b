//! Core module containing the receipt model, scoring and validation

pub mod error;
pub mod points;
pub mod receipt;
pub mod service;
pub mod validation;

pub use error::{ReceiptsError, ReceiptsResult};
pub use points::{ParseFallback, PointsBreakdown};
pub use receipt::{Item, Receipt, ReceiptDraft, ReceiptSubmission};
pub use service::ReceiptStore;
