//! API module for the receipt processor
//!
//! This module contains the HTTP endpoints for submitting receipts and
//! querying their points, plus the server setup around them.

pub mod receipts;
pub mod server;

use std::sync::Arc;

use crate::{points::Points, store::ReceiptRepository};

pub use receipts::{get_points, process_receipt};
pub use server::{create_router, create_server, shutdown_signal};

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    /// Where accepted receipts are kept
    pub receipts: Arc<dyn ReceiptRepository>,
}

impl AppState {
    /// Create state around a receipt store
    pub fn new(receipts: Arc<dyn ReceiptRepository>) -> Self {
        Self { receipts }
    }
}

/// Response to a successful receipt submission
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProcessResponse {
    /// Identifier to query points with
    pub id: String,
}

/// Response to a points query
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PointsResponse {
    /// Points earned by the receipt
    pub points: Points,
}
