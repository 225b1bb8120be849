//! Repository abstraction for stored receipts
//!
//! The receipt store only ever inserts and reads: there is no update or
//! delete in this contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::Receipt;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Message returned to clients querying an unknown identifier
pub const NOT_FOUND_MESSAGE: &str = "No receipt found for that ID";

/// Store error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No receipt was stored under the identifier
    #[error("Receipt not found: {0}")]
    NotFound(String),
}

impl StoreError {
    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Convert store errors to application errors
impl From<StoreError> for crate::error::Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => {
                tracing::debug!(receipt_id = %id, "Receipt lookup missed");
                crate::error::Error::NotFound(NOT_FOUND_MESSAGE.to_string())
            },
        }
    }
}

/// An accepted receipt together with its server-assigned identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredReceipt {
    /// Opaque identifier handed back to the submitter
    pub id: String,
    /// The validated receipt
    pub receipt: Receipt,
    /// When the receipt was accepted
    pub received_at: DateTime<Utc>,
}

/// Receipt repository trait
#[async_trait]
pub trait ReceiptRepository: Send + Sync {
    /// Store a receipt under a freshly generated identifier and return it
    async fn put(&self, receipt: Receipt) -> StoreResult<String>;

    /// Fetch the receipt stored under `id`
    async fn get(&self, id: &str) -> StoreResult<Receipt> {
        self.find_by_id(id)
            .await?
            .map(|stored| stored.receipt)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Find the stored entry for `id`, if any
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<StoredReceipt>>;

    /// Number of stored receipts
    async fn count(&self) -> StoreResult<usize>;
}
