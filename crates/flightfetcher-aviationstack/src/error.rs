//! Error types for the aviationstack client.
//!
//! The variants follow the failure classes of a single fetch: the client
//! could not be built, the request never completed, the service rejected
//! it with a status code, or a 200 body failed to decode.

use thiserror::Error;

/// Errors produced while talking to the aviationstack service.
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {source}")]
    Client {
        /// The underlying error.
        #[source]
        source: reqwest::Error,
    },

    /// The request could not be completed at the transport level
    /// (connection refused, DNS failure, timeout).
    #[error("request to {url} failed: {source}")]
    Transport {
        /// The URL that was being fetched.
        url: String,
        /// The underlying error.
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a status code other than 200.
    ///
    /// The response body is not inspected for this class; only the numeric
    /// code is carried.
    #[error("Unable to fetch flights (Status Code: {code})")]
    Status {
        /// The numeric HTTP status code.
        code: u16,
    },

    /// The service answered 200 but the body was not the expected JSON.
    #[error("malformed flight data in response: {source}")]
    Decode {
        /// The underlying error.
        #[source]
        source: reqwest::Error,
    },
}

/// A specialized Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error reports a non-200 status answer.
    #[must_use]
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    /// The HTTP status code carried by a [`Error::Status`], if any.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code } => Some(*code),
            _ => None,
        }
    }
}
