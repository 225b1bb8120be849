//! Receipt storage
//!
//! This module provides the repository abstraction for accepted receipts and
//! the in-memory implementation the service runs with.

pub mod memory;
pub mod repository;

// Re-export commonly used types
pub use memory::InMemoryReceiptStore;
pub use repository::{ReceiptRepository, StoreError, StoreResult, StoredReceipt, NOT_FOUND_MESSAGE};
