use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::BytesRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Application-specific error types.
///
/// Malformed or missing form fields are never errors here; they are normalized
/// before a lead is built. Only failures below the form layer show up.
#[derive(Debug, Clone)]
pub enum AppError {
    /// The request body could not be read (aborted stream, size limit, ...).
    Transport {
        /// Status reported by the transport layer.
        status: StatusCode,
        /// Description of the read failure.
        message: String,
    },
    /// The observability sink refused a record.
    Sink(String),
}

impl fmt::Display for AppError {
    /// Formats the error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Transport { status, message } => {
                write!(f, "Transport error ({}): {}", status.as_u16(), message)
            }
            AppError::Sink(msg) => write!(f, "Sink error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Maps each error variant to an appropriate HTTP status code and JSON body.
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Transport { status, message } => {
                tracing::warn!("Failed to read request body: {}", message);
                (*status, "Could not read request".to_string())
            }
            AppError::Sink(msg) => {
                tracing::error!("Sink error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<BytesRejection> for AppError {
    /// Converts a body read rejection into a transport error, keeping its status.
    fn from(rejection: BytesRejection) -> Self {
        AppError::Transport {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<MultipartRejection> for AppError {
    /// A multipart body whose headers cannot be parsed (e.g. no boundary).
    fn from(rejection: MultipartRejection) -> Self {
        AppError::Transport {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<MultipartError> for AppError {
    /// A multipart stream that broke off or exceeded the body limit mid-read.
    fn from(err: MultipartError) -> Self {
        AppError::Transport {
            status: err.status(),
            message: err.body_text(),
        }
    }
}
