//! Error types for the client module.
//!
//! Every failure is terminal for the current attempt but non-fatal for the
//! session: callers surface the message and may retry the failed step.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while calling the lookup endpoint or the gateway.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("network error calling {url}: {source}")]
    Network {
        /// The URL that failed.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("timeout calling {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// The lookup endpoint returned a non-success status. The message is the
    /// response body verbatim, surfaced to the user as-is.
    #[error("{message}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The plain-text response body (or a fallback when empty).
        message: String,
    },

    /// The lookup endpoint answered 200 but without a usable CID.
    #[error("Server did not return a CID.")]
    MissingCid,

    /// The gateway returned a non-success status for the CID fetch.
    #[error("Failed to fetch file from IPFS gateway (HTTP {status}): {url}")]
    Gateway {
        /// The gateway URL that failed.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// File system error while saving the result.
    #[error("IO error writing to {path}: {source}")]
    Io {
        /// The file path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The provided base URL is malformed.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        /// The invalid URL string.
        url: String,
    },
}

impl ClientError {
    /// Creates a network or timeout error from a reqwest error.
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        let url = url.into();
        if source.is_timeout() {
            Self::Timeout { url }
        } else {
            Self::Network { url, source }
        }
    }

    /// Creates an endpoint error carrying the response body verbatim.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Creates a gateway status error.
    pub fn gateway(url: impl Into<String>, status: u16) -> Self {
        Self::Gateway {
            url: url.into(),
            status,
        }
    }

    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }
}

// The variants carry context (url, path, status) that the source errors don't
// provide, so there are no blanket From impls; use the helper constructors.
