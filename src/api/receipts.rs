//! Receipt endpoints
//!
//! `POST /receipts/process` validates and stores a receipt;
//! `GET /receipts/:id/points` scores a stored one.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::{
    api::{AppState, PointsResponse, ProcessResponse},
    error::Result,
    models::{RawReceipt, Receipt},
    points::PointsBreakdown,
};

/// Accept a receipt submission
///
/// Invalid receipts are rejected with `400` and never stored.
pub async fn process_receipt(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RawReceipt>, JsonRejection>,
) -> Result<Json<ProcessResponse>> {
    let Json(raw) = payload?;
    let receipt = Receipt::try_from(raw)?;
    let item_count = receipt.item_count();

    let id = state.receipts.put(receipt).await?;
    tracing::info!(receipt_id = %id, item_count, "Receipt accepted");

    Ok(Json(ProcessResponse { id }))
}

/// Return the points earned by a stored receipt
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>> {
    let receipt = state.receipts.get(&id).await?;
    let breakdown = PointsBreakdown::for_receipt(&receipt);
    let points = breakdown.total();

    tracing::debug!(receipt_id = %id, points = %points, ?breakdown, "Points computed");

    Ok(Json(PointsResponse { points }))
}
