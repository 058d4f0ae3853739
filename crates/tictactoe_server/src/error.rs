//! HTTP error responses.

use crate::handle::SessionError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// JSON body of every non-success response.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display, derive_new::new,
)]
#[display("{}: {}", error, message)]
pub struct ErrorBody {
    /// Machine-readable error code, e.g. `cell_occupied`.
    pub error: String,
    /// Human-readable explanation.
    pub message: String,
}

/// Errors a handler can return.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ApiError {
    /// The session rejected or could not run the operation.
    #[display("{}", _0)]
    #[from]
    Session(SessionError),

    /// The request body could not be read as a move.
    #[display("Malformed request: {}", message)]
    MalformedRequest {
        /// What was wrong with the request.
        message: String,
    },
}

impl ApiError {
    /// HTTP status for this error. Invalid moves and malformed requests are
    /// the client's fault; an unavailable session is ours.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Session(SessionError::InvalidMove(_)) => StatusCode::BAD_REQUEST,
            ApiError::MalformedRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Session(SessionError::Unavailable) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable code for the response body.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Session(SessionError::InvalidMove(err)) => err.code(),
            ApiError::Session(SessionError::Unavailable) => "session_unavailable",
            ApiError::MalformedRequest { .. } => "malformed_request",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedRequest {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = %status, error = %self, "Request failed");
        let body = ErrorBody::new(self.code().to_string(), self.to_string());
        (status, Json(body)).into_response()
    }
}
