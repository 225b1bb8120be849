//! Receipt Processor - scores purchase receipts with loyalty points
//!
//! Receipts are submitted over HTTP, validated, kept in memory for the
//! lifetime of the process, and scored on request.

use std::sync::Arc;

use receipt_processor::{config::Config, logging, InMemoryReceiptStore, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Arc::new(Config::from_env()?);

    config.validate()?;

    logging::init_tracing(&config.server)?;

    config.log_config();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting receipt processor");

    // One store for the whole process; receipts are lost on restart
    let store = Arc::new(InMemoryReceiptStore::new());

    receipt_processor::create_server(config, store).await?;

    tracing::info!("Receipt processor shutdown complete");
    Ok(())
}
