//! Raw HTTP response type.
//!
//! The transport hands back status, content type, and bytes; interpreting
//! the body (envelope decoding, error classification) happens in the
//! [`crate::rest`] layer.

/// A raw response from the SimpleMDM API.
///
/// # Example
///
/// ```rust
/// use simplemdm_api::clients::HttpResponse;
///
/// let response = HttpResponse::new(
///     200,
///     Some("application/json".to_string()),
///     br#"{"data": []}"#.to_vec(),
/// );
/// assert!(response.is_ok());
/// assert!(response.is_json());
/// ```
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The Content-Type header value, if present (parameters stripped).
    pub content_type: Option<String>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new response from its parts.
    #[must_use]
    pub const fn new(code: u16, content_type: Option<String>, body: Vec<u8>) -> Self {
        Self {
            code,
            content_type,
            body,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Returns `true` if the response declared a JSON content type.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct == "application/json")
    }
}
