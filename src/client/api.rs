//! Client for the result lookup endpoint.

use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use super::build_http_client;
use super::error::ClientError;
use crate::submission::{LookupResult, Submission};

/// Fallback message when the endpoint rejects a request with an empty body.
const FALLBACK_LOOKUP_ERROR: &str = "Failed to fetch result CID.";

/// Client for `POST /api/result`.
///
/// Reusable across submissions; holds one pooled connection to the endpoint.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: Url,
}

impl ApiClient {
    /// Creates a client for the endpoint hosted at `base_url`
    /// (e.g. `http://127.0.0.1:3000`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] when the base URL does not parse.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base = base_url.trim_end_matches('/');
        let endpoint = Url::parse(&format!("{base}/api/result"))
            .map_err(|_| ClientError::invalid_url(base_url))?;
        Ok(Self {
            client: build_http_client(),
            endpoint,
        })
    }

    /// Sends the submission and returns the CID from the response.
    ///
    /// A non-success status surfaces the response body verbatim as the error
    /// message; a success response without a CID is its own error.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] for non-success statuses,
    /// [`ClientError::MissingCid`] when the response carries no CID, and
    /// transport variants for network failures.
    #[instrument(skip(self, submission), fields(exam = %submission.exam, roll_no = %submission.roll_no))]
    pub async fn fetch_cid(&self, submission: &Submission) -> Result<String, ClientError> {
        debug!("submitting result lookup");
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(submission)
            .send()
            .await
            .map_err(|e| ClientError::transport(self.endpoint.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                FALLBACK_LOOKUP_ERROR.to_string()
            } else {
                body
            };
            return Err(ClientError::api(status.as_u16(), message));
        }

        let result: LookupResult = response
            .json()
            .await
            .map_err(|e| ClientError::transport(self.endpoint.as_str(), e))?;
        if result.cid.is_empty() {
            return Err(ClientError::MissingCid);
        }
        debug!(cid = %result.cid, "CID received");
        Ok(result.cid)
    }

    /// The fully resolved endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}
