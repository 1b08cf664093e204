//! Application-level errors for the lookup endpoint.
//!
//! Responses are plain text, not JSON: clients surface the 400 body verbatim
//! as the user-facing message, and the 500 body deliberately carries no
//! backend detail (that goes to the server log instead).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors a handler can return.
#[derive(Debug)]
pub enum ApiError {
    /// One of the submission fields is absent or empty.
    MissingFields,
    /// Malformed request body or a lookup backend failure. The detail is
    /// logged server-side only.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingFields => {
                (StatusCode::BAD_REQUEST, "Missing required fields.").into_response()
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "result endpoint error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error.").into_response()
            }
        }
    }
}

impl From<crate::server::lookup::LookupError> for ApiError {
    fn from(err: crate::server::lookup::LookupError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
