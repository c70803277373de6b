//! Ingress errors and their HTTP mapping.
//!
//! # Design Decisions
//! - Error bodies are plain text, never JSON
//! - 4xx for caller mistakes, 500 for anything downstream

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::upstream::UpstreamError;

/// Failure handling `POST /send`.
#[derive(Debug, Error)]
pub enum IngressError {
    /// Body is not a JSON payment notice.
    #[error("Invalid request payload")]
    BadRequest { cause: String },

    /// Any method other than POST.
    #[error("Only POST method is allowed")]
    MethodNotAllowed,

    /// The relay could not be reached.
    #[error("Failed to connect to relay service: {0}")]
    UpstreamUnavailable(String),

    /// The relay was reached but the call failed or timed out.
    #[error("Error calling relay service: {0}")]
    UpstreamCall(String),
}

impl IngressError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            IngressError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            IngressError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            IngressError::UpstreamUnavailable(_) | IngressError::UpstreamCall(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<UpstreamError> for IngressError {
    fn from(err: UpstreamError) -> Self {
        if err.is_unavailable() {
            IngressError::UpstreamUnavailable(err.to_string())
        } else {
            IngressError::UpstreamCall(err.to_string())
        }
    }
}

impl IntoResponse for IngressError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = self.to_string();
        match self {
            IngressError::MethodNotAllowed => {
                (status, [(header::ALLOW, "POST")], body).into_response()
            }
            _ => (status, body).into_response(),
        }
    }
}
