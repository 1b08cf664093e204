//! Result Portal Core Library
//!
//! This library implements a small exam-result delivery system: a stateless
//! lookup endpoint that resolves a submission (exam, roll number, date of
//! birth) to a content identifier (CID), and a client that retrieves the
//! result file from a public content-addressed storage gateway using that CID.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`client`] - HTTP clients for the lookup endpoint and the IPFS gateway
//! - [`form`] - Explicit form state machine driving submit/download flows
//! - [`server`] - Axum lookup endpoint and the `CidLookup` seam
//! - [`submission`] - Wire types shared by server and client

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod form;
pub mod server;
pub mod submission;

// Re-export commonly used types
pub use client::{
    ApiClient, ClientError, DEFAULT_GATEWAY, GatewayClient, result_filename, sanitize_exam,
    sanitize_roll,
};
pub use form::{FormError, FormState, Phase};
pub use server::{AppState, CidLookup, FixedCidLookup, PLACEHOLDER_CID, build_router};
pub use submission::{Exam, LookupResult, MIN_ROLL_NO_LEN, Submission};
