//! The result lookup endpoint.
//!
//! A stateless axum service exposing `POST /api/result`: validates field
//! presence, asks the configured [`CidLookup`] for the matching CID, and
//! returns it as JSON with `Cache-Control: no-store`. Error responses are
//! plain text, matching the endpoint contract:
//! - `400 Missing required fields.` when any field is absent or empty
//! - `500 Server error.` on malformed bodies or lookup failures
//!
//! No state crosses requests; each call is independent.

mod error;
mod lookup;
mod routes;

pub use error::ApiError;
pub use lookup::{CidLookup, FixedCidLookup, LookupError, PLACEHOLDER_CID};
pub use routes::{AppState, build_router};
