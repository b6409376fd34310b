//! In-memory implementation of ReceiptStore

use crate::core::error::StorageError;
use crate::core::{Receipt, ReceiptStore};
use anyhow::Result;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

const BACKEND: &str = "in-memory";

/// In-memory receipt store
///
/// Keeps receipts in insertion order and lives for the lifetime of the
/// process. Uses RwLock for thread-safe access; clones share the same data.
#[derive(Clone)]
pub struct InMemoryReceiptStore {
    receipts: Arc<RwLock<IndexMap<Uuid, Receipt>>>,
}

impl InMemoryReceiptStore {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self {
            receipts: Arc::new(RwLock::new(IndexMap::new())),
        }
    }
}

impl Default for InMemoryReceiptStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> StorageError {
    StorageError::LockPoisoned {
        backend: BACKEND.to_string(),
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn insert(&self, receipt: Receipt) -> Result<()> {
        let mut receipts = self.receipts.write().map_err(|_| poisoned())?;

        tracing::debug!(id = %receipt.id, points = receipt.points, "storing receipt");
        receipts.insert(receipt.id, receipt);

        Ok(())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Receipt>> {
        let receipts = self.receipts.read().map_err(|_| poisoned())?;

        Ok(receipts.get(id).cloned())
    }

    async fn len(&self) -> Result<usize> {
        let receipts = self.receipts.read().map_err(|_| poisoned())?;

        Ok(receipts.len())
    }
}
