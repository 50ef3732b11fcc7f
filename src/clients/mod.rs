//! HTTP transport layer for SimpleMDM API communication.
//!
//! This module provides the transport boundary the resource layer builds on:
//!
//! - [`HttpClient`]: the async HTTP client (one authenticated GET per call)
//! - [`HttpResponse`]: a raw status/content-type/bytes response
//! - [`HttpError`]: transport-level failures
//!
//! The transport applies no retries and owns no timeout policy; transient
//! and permanent failures are indistinguishable here, so both are left to
//! the caller. Interpreting response bodies is the job of [`crate::rest`].

mod errors;
mod http_client;
mod http_response;

pub use errors::HttpError;
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_response::HttpResponse;
