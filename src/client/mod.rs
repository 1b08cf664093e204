//! HTTP clients for the result flow.
//!
//! Two hops, each a single in-flight request:
//! - [`ApiClient`] posts a submission to the lookup endpoint and returns the
//!   CID from its JSON response.
//! - [`GatewayClient`] fetches `<gateway-base>/<cid>` from a public
//!   content-addressed storage gateway and streams the body to a local file,
//!   with the partial file removed on any failure.
//!
//! # Example
//!
//! ```no_run
//! use result_portal::client::{ApiClient, GatewayClient, result_filename};
//! use result_portal::submission::Submission;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = ApiClient::new("http://127.0.0.1:3000")?;
//! let submission = Submission::new("NEET-UG", "12345", "2005-01-01");
//! let cid = api.fetch_cid(&submission).await?;
//!
//! let gateway = GatewayClient::new("https://w3s.link/ipfs")?;
//! let name = result_filename(&submission.exam, &submission.roll_no);
//! let path = gateway.download_result(&cid, Path::new("."), &name).await?;
//! println!("Saved: {}", path.display());
//! # Ok(())
//! # }
//! ```

mod api;
mod error;
mod filename;
mod gateway;

pub use api::ApiClient;
pub use error::ClientError;
pub use filename::{result_filename, sanitize_exam, sanitize_roll};
pub use gateway::{DEFAULT_GATEWAY, GatewayClient};

use std::time::Duration;

/// Connection establishment timeout for both hops.
pub(crate) const CONNECT_TIMEOUT_SECS: u64 = 30;
/// Total request timeout, generous because gateway result files can be large.
pub(crate) const REQUEST_TIMEOUT_SECS: u64 = 300;

/// User-Agent sent on both hops.
const USER_AGENT: &str = concat!("result-portal/", env!("CARGO_PKG_VERSION"));

/// Builds the shared reqwest client configuration.
///
/// # Panics
///
/// Panics if the HTTP client builder fails to build with the static
/// configuration. This should never happen in practice.
#[allow(clippy::expect_used)]
pub(crate) fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .gzip(true)
        .user_agent(USER_AGENT)
        .build()
        .expect("failed to build HTTP client with static configuration")
}
