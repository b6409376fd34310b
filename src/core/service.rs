//! Service trait for receipt storage

use crate::core::receipt::Receipt;
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Storage for scored receipts
///
/// Receipts are append-only: there is no update or delete. Implementations
/// must be safe to share across concurrently running request handlers.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Append a receipt
    async fn insert(&self, receipt: Receipt) -> Result<()>;

    /// Get a receipt by ID
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Receipt>>;

    /// Number of stored receipts
    async fn len(&self) -> Result<usize>;

    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}
