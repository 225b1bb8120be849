//! Error handling module for the receipt processor
//!
//! This module defines the application error type, providing a unified error
//! handling strategy with HTTP response mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for receipt processor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the receipt processor
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Submitted receipt failed validation
    #[error("The receipt is invalid: {0}")]
    Validation(String),

    /// Request body could not be read as a receipt
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// Request body exceeded the configured limit
    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),

    /// Not found errors; the message is returned to the client verbatim
    #[error("{0}")]
    NotFound(String),
}

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Error::Validation(msg.into())
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Error::Internal(msg.into())
    }

    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Error::Config(_) | Error::Io(_) | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the caller caused this error
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

/// Implement IntoResponse for automatic error responses in Axum
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = Json(json!({
            "error": {
                "message": self.to_string(),
                "type": error_type(&self),
                "status": status.as_u16(),
            }
        }));

        if self.is_client_error() {
            tracing::warn!(error = %self, "Client error");
        } else {
            tracing::error!(error = ?self, "Internal server error");
        }

        (status, body).into_response()
    }
}

/// Get a string representation of the error type
fn error_type(error: &Error) -> &'static str {
    match error {
        Error::Config(_) => "configuration_error",
        Error::Validation(_) => "validation_error",
        Error::MalformedBody(_) => "malformed_body",
        Error::PayloadTooLarge(_) => "payload_too_large",
        Error::Io(_) => "io_error",
        Error::Internal(_) => "internal_error",
        Error::NotFound(_) => "not_found",
    }
}

/// Convert from axum's JSON extractor rejection to our Error type
impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Error::PayloadTooLarge(rejection.body_text())
        } else {
            Error::MalformedBody(rejection.body_text())
        }
    }
}

/// Convert from envconfig::Error to our Error type
impl From<envconfig::Error> for Error {
    fn from(err: envconfig::Error) -> Self {
        Error::Config(err.to_string())
    }
}
