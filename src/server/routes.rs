//! Router and handlers for the lookup endpoint.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use super::error::ApiError;
use super::lookup::CidLookup;
use crate::submission::{LookupResult, Submission};

/// Shared handler state: the lookup backend behind its trait seam.
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<dyn CidLookup>,
}

impl AppState {
    /// Creates state around the given lookup backend.
    pub fn new(lookup: Arc<dyn CidLookup>) -> Self {
        Self { lookup }
    }
}

/// Builds the application router.
///
/// CORS is permissive on origin so a separately hosted front end can call
/// the API; only the methods and headers the flow needs are allowed.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        .route("/api/result", post(result_lookup))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// `POST /api/result`: resolve a submission to its result CID.
///
/// The body is taken as raw bytes rather than an extractor-parsed JSON value
/// so the status split matches the contract: an unparseable body is a 500,
/// while any parseable body that does not carry all three fields is a 400.
/// Non-object JSON (`null`, numbers, strings, arrays) is treated the same as
/// an object with missing keys.
async fn result_lookup(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let value: serde_json::Value =
        serde_json::from_slice(&body).map_err(|e| ApiError::Internal(e.to_string()))?;
    let submission: Submission = serde_json::from_value(value).unwrap_or_default();

    if !submission.is_complete() {
        return Err(ApiError::MissingFields);
    }

    let cid = state.lookup.lookup(&submission).await?;

    // Audit trail for the request; no record of it is persisted.
    info!(
        exam = %submission.exam,
        roll_no = %submission.roll_no,
        cid = %cid,
        "result requested"
    );

    Ok((
        StatusCode::OK,
        [(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        )],
        Json(LookupResult { cid }),
    )
        .into_response())
}

/// `GET /healthz`: liveness probe for hosting.
async fn healthz() -> &'static str {
    "ok"
}
