//! In-memory receipt store
//!
//! Receipts live in a `HashMap` behind a tokio `RwLock` for the lifetime of
//! the process. Nothing is persisted.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::Receipt;
use crate::store::repository::{ReceiptRepository, StoreResult, StoredReceipt};

/// Process-lifetime receipt store
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReceiptStore {
    receipts: Arc<RwLock<HashMap<String, StoredReceipt>>>,
}

impl InMemoryReceiptStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReceiptRepository for InMemoryReceiptStore {
    async fn put(&self, receipt: Receipt) -> StoreResult<String> {
        let mut receipts = self.receipts.write().await;

        // Identifier generation and insert happen under one write lock
        loop {
            let id = Uuid::new_v4().to_string();
            if let Entry::Vacant(slot) = receipts.entry(id.clone()) {
                slot.insert(StoredReceipt {
                    id: id.clone(),
                    receipt,
                    received_at: Utc::now(),
                });
                return Ok(id);
            }
            tracing::warn!(receipt_id = %id, "Generated receipt id collided, retrying");
        }
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<StoredReceipt>> {
        let receipts = self.receipts.read().await;
        Ok(receipts.get(id).cloned())
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.receipts.read().await.len())
    }
}
