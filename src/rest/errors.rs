//! Semantic error types for resource fetch operations.
//!
//! This module contains the error type every fetch operation returns,
//! extending the transport-level [`HttpError`](crate::clients::HttpError)
//! with resource semantics: auth rejection, missing resources, pagination
//! contract violations, and decode failures.
//!
//! # Error Handling
//!
//! The SDK maps HTTP status codes to semantic error variants:
//!
//! - **401**: [`ResourceError::AuthRejected`] - the server refused the API key
//! - **404**: [`ResourceError::DoesNotExist`] - the resource does not exist
//! - **Other non-2xx**: [`ResourceError::Api`] with the first server-provided
//!   message, or [`ResourceError::UnknownApi`] when the body carries none
//!
//! Expected failures (auth, not-found, limits) are always representable
//! values; no operation panics on them. No variant is retried internally —
//! retry policy is a caller concern.
//!
//! # Example
//!
//! ```rust,ignore
//! use simplemdm_api::rest::ResourceError;
//!
//! match Device::find(&client, 42).await {
//!     Ok(device) => println!("found {}", device.name),
//!     Err(ResourceError::DoesNotExist { resource, .. }) => {
//!         println!("no such {}", resource);
//!     }
//!     Err(ResourceError::AuthRejected) => println!("check your API key"),
//!     Err(e) => println!("other error: {}", e),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for resource fetch operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A transport-level failure (missing credential, network error,
    /// unexpected content type).
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The server rejected the configured API key (HTTP 401).
    #[error("the server rejected the configured API key")]
    AuthRejected,

    /// The requested resource does not exist (HTTP 404).
    ///
    /// `id` is absent for collection or singleton endpoints.
    #[error("{resource} {} does not exist", id.as_deref().unwrap_or("resource"))]
    DoesNotExist {
        /// The type name of the resource (e.g., "device").
        resource: &'static str,
        /// The ID that was requested, if the operation had one.
        id: Option<String>,
    },

    /// The server returned a resource whose ID differs from the one
    /// requested.
    ///
    /// This is a cross-check against server and URL-construction bugs, not
    /// decode validation.
    #[error("requested {resource} {expected} but the server returned {actual}")]
    UnexpectedResourceId {
        /// The type name of the resource.
        resource: &'static str,
        /// The ID that was requested.
        expected: String,
        /// The ID the server returned.
        actual: String,
    },

    /// A page limit outside the documented bounds was requested.
    ///
    /// Raised before any network call is made.
    #[error("limit {0} is outside the allowed range 1..=100")]
    InvalidLimit(u32),

    /// The server claimed more data was available but returned an empty
    /// page.
    ///
    /// Without this check a paginated traversal would loop forever on a
    /// malformed server response.
    #[error("server reported more resources available but returned an empty page")]
    DoesNotExpectMoreResources,

    /// The payload's `"type"` discriminator does not match the requested
    /// resource type.
    #[error("expected resource of type \"{expected}\", got \"{actual}\"")]
    TypeMismatch {
        /// The type name that was expected.
        expected: &'static str,
        /// The type name the payload carried.
        actual: String,
    },

    /// A date-valued attribute matched neither accepted textual format.
    #[error("unrecognized date format: {0}")]
    DateFormat(String),

    /// The payload does not match the expected envelope or attribute shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server reported an error with a human-readable message.
    ///
    /// Only the first server-provided message is carried; additional
    /// simultaneous errors are dropped intentionally.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// The HTTP status code of the response.
        status: u16,
        /// The first `errors[].title` entry from the response body.
        message: String,
    },

    /// The server responded with an unclassified status and no
    /// machine-readable error message.
    #[error("unknown API error (HTTP {status})")]
    UnknownApi {
        /// The HTTP status code of the response.
        status: u16,
    },
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_does_not_exist_message_with_id() {
        let error = ResourceError::DoesNotExist {
            resource: "device",
            id: Some("0".to_string()),
        };
        let message = error.to_string();

        assert!(message.contains("device"));
        assert!(message.contains('0'));
        assert!(message.contains("does not exist"));
    }

    #[test]
    fn test_does_not_exist_message_without_id() {
        let error = ResourceError::DoesNotExist {
            resource: "account",
            id: None,
        };
        assert!(error.to_string().contains("does not exist"));
    }

    #[test]
    fn test_unexpected_resource_id_message() {
        let error = ResourceError::UnexpectedResourceId {
            resource: "device",
            expected: "42".to_string(),
            actual: "7".to_string(),
        };
        let message = error.to_string();

        assert!(message.contains("42"));
        assert!(message.contains('7'));
    }

    #[test]
    fn test_invalid_limit_message() {
        let error = ResourceError::InvalidLimit(101);
        let message = error.to_string();

        assert!(message.contains("101"));
        assert!(message.contains("1..=100"));
    }

    #[test]
    fn test_type_mismatch_message() {
        let error = ResourceError::TypeMismatch {
            expected: "device_group",
            actual: "device".to_string(),
        };
        let message = error.to_string();

        assert!(message.contains("device_group"));
        assert!(message.contains("\"device\""));
    }

    #[test]
    fn test_unknown_api_message_contains_status() {
        let error = ResourceError::UnknownApi { status: 500 };
        assert!(error.to_string().contains("500"));
    }

    #[test]
    fn test_api_error_carries_first_message() {
        let error = ResourceError::Api {
            status: 422,
            message: "name is required".to_string(),
        };
        let message = error.to_string();

        assert!(message.contains("422"));
        assert!(message.contains("name is required"));
    }

    #[test]
    fn test_from_http_error_conversion() {
        let error: ResourceError = HttpError::AuthNotConfigured.into();
        assert!(matches!(error, ResourceError::Http(_)));
    }

    #[test]
    fn test_all_error_variants_implement_std_error() {
        let error: &dyn std::error::Error = &ResourceError::AuthRejected;
        let _ = error;
    }
}
