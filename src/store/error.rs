//! Failures raised while talking to the JSON store.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by [`JsonStoreClient`](super::JsonStoreClient).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request could not be sent or the connection failed.
    #[error("request to {url} failed: {source}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The store answered with a non-success status code.
    #[error("{url} responded with status {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// Status code returned by the store.
        status: StatusCode,
    },

    /// The response body was not the expected JSON document.
    #[error("could not decode response from {url}: {source}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Underlying decoding error.
        #[source]
        source: reqwest::Error,
    },
}
