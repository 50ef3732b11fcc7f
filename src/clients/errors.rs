//! Transport-level error types.
//!
//! This module contains the errors the HTTP layer can produce before and
//! during a request. Everything that depends on interpreting a response body
//! lives in [`crate::rest::ResourceError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use simplemdm_api::clients::HttpError;
//!
//! match client.get("devices", &[]).await {
//!     Ok(response) => println!("HTTP {}", response.code),
//!     Err(HttpError::AuthNotConfigured) => println!("set an API key first"),
//!     Err(HttpError::UnexpectedContentType { content_type }) => {
//!         println!("server sent {:?} instead of JSON", content_type);
//!     }
//!     Err(HttpError::Network(e)) => println!("network error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error type for HTTP transport operations.
///
/// No variant here is retried internally; transient and permanent failures
/// are indistinguishable at this layer, so retry policy belongs to the
/// caller.
#[derive(Debug, Error)]
pub enum HttpError {
    /// No API key is configured.
    ///
    /// Detected before any network I/O: a client built from a config
    /// without a key short-circuits every request with this error.
    #[error("no API key configured; set one on SimpleMdmConfig before making requests")]
    AuthNotConfigured,

    /// The response carried a content type other than JSON.
    ///
    /// The body is never parsed when this is returned.
    #[error("unexpected response content type {content_type:?}, expected application/json")]
    UnexpectedContentType {
        /// The Content-Type header value, if any was present.
        content_type: Option<String>,
    },

    /// The request failed at the network level (no usable response).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
