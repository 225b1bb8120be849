//! HTTP server implementation for the receipt processor
//!
//! This module sets up the Axum web server with all routes, middleware,
//! and graceful shutdown handling.

use axum::{
    extract::{DefaultBodyLimit, MatchedPath},
    http::{header, HeaderName, Method, Request},
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use uuid::Uuid;

use crate::{
    api::{
        receipts::{get_points, process_receipt},
        AppState,
    },
    config::Config,
    error::{Error, Result},
    store::ReceiptRepository,
};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID generator
#[derive(Clone, Default)]
struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(id.parse().ok()?))
    }
}

/// Create the main application router
pub fn create_router(config: Arc<Config>, receipts: Arc<dyn ReceiptRepository>) -> Router {
    let state = AppState::new(receipts);
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    let receipt_routes = Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .with_state(state);

    // Layers wrap outward: the request id is set before tracing sees the request
    receipt_routes
        .layer(DefaultBodyLimit::max(config.server.max_body_bytes))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let matched_path =
                        request.extensions().get::<MatchedPath>().map(MatchedPath::as_str);
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");

                    tracing::info_span!(
                        "http_request",
                        method = ?request.method(),
                        matched_path,
                        request_id,
                        latency = tracing::field::Empty,
                        status = tracing::field::Empty,
                    )
                })
                .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(tracing::Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
}

/// Create and start the HTTP server
pub async fn create_server(config: Arc<Config>, receipts: Arc<dyn ReceiptRepository>) -> Result<()> {
    let app = create_router(config.clone(), receipts);
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| Error::config(format!("Invalid server address: {}", e)))?;

    tracing::info!(
        address = %addr,
        environment = %config.server.environment,
        "Starting HTTP server"
    );

    let listener = TcpListener::bind(addr).await?;

    tracing::info!(address = %addr, "HTTP server listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

/// Shutdown signal handler
///
/// Waits for CTRL+C or SIGTERM signals to gracefully shutdown the server.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received CTRL+C, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
