//! Receipt Processor Library
//!
//! This library exposes the core modules of the receipt processor for use in
//! integration tests and by the server binary.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod points;
pub mod store;

// Re-export commonly used types at the crate root
pub use config::Config;
pub use error::{Error, Result};

// Re-export model types
pub use models::{
    Item, RawItem, RawReceipt, Receipt, ValidationError, ValidationErrorKind, ValidationErrors,
};

// Re-export scoring
pub use points::{score, Points, PointsBreakdown};

// Re-export storage types
pub use store::{InMemoryReceiptStore, ReceiptRepository, StoreError, StoredReceipt};

// Re-export API server functions
pub use api::server::{create_router, create_server, shutdown_signal};
pub use api::{AppState, PointsResponse, ProcessResponse};
