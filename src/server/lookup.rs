//! The CID lookup seam.
//!
//! Resolving a submission to a CID sits behind a trait so a real record
//! store can be slotted in without touching the handler. The shipped
//! implementation returns one fixed placeholder CID for every submission,
//! mirroring the reference system; no branching depends on the field values.

use async_trait::async_trait;
use thiserror::Error;

use crate::submission::Submission;

/// CID returned for every submission by the placeholder lookup.
pub const PLACEHOLDER_CID: &str = "bafybeigdyrzt3c7v4l4l2v6m4k6lo2o4u7s5l3f7kq5qzqzqzqzqzqzq";

/// A lookup backend failure, reported to clients as a generic server error.
#[derive(Debug, Error)]
#[error("result lookup failed: {detail}")]
pub struct LookupError {
    detail: String,
}

impl LookupError {
    /// Creates a lookup error with backend detail for the server log.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Resolves a validated submission to the CID of its result file.
#[async_trait]
pub trait CidLookup: Send + Sync {
    /// Returns the CID for the submission's result.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] when the backing store cannot answer.
    async fn lookup(&self, submission: &Submission) -> Result<String, LookupError>;
}

/// Lookup that answers every submission with the same CID.
#[derive(Debug, Clone)]
pub struct FixedCidLookup {
    cid: String,
}

impl FixedCidLookup {
    /// Creates a lookup returning the given CID.
    pub fn new(cid: impl Into<String>) -> Self {
        Self { cid: cid.into() }
    }

    /// Creates a lookup returning the demo placeholder CID.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_CID)
    }
}

#[async_trait]
impl CidLookup for FixedCidLookup {
    async fn lookup(&self, _submission: &Submission) -> Result<String, LookupError> {
        Ok(self.cid.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_lookup_ignores_submission_values() {
        let lookup = FixedCidLookup::new("bafy-fixed");
        let a = Submission::new("NEET-UG", "12345", "2005-01-01");
        let b = Submission::new("JEE-Main", "99999", "2004-12-31");
        assert_eq!(lookup.lookup(&a).await.unwrap(), "bafy-fixed");
        assert_eq!(lookup.lookup(&b).await.unwrap(), "bafy-fixed");
    }

    #[tokio::test]
    async fn test_placeholder_lookup_returns_demo_cid() {
        let lookup = FixedCidLookup::placeholder();
        let submission = Submission::new("NEET-UG", "12345", "2005-01-01");
        assert_eq!(lookup.lookup(&submission).await.unwrap(), PLACEHOLDER_CID);
    }
}
