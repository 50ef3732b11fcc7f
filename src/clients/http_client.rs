//! HTTP client for SimpleMDM API communication.
//!
//! This module provides the [`HttpClient`] type, the transport boundary of
//! the SDK: one authenticated GET per call, raw status/content-type/bytes
//! back. It applies no retries and defines no timeout policy of its own.

use base64::prelude::*;

use crate::clients::errors::HttpError;
use crate::clients::http_response::HttpResponse;
use crate::config::SimpleMdmConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the SimpleMDM API.
///
/// The client handles:
/// - Base URL construction from the configured host (or the default endpoint)
/// - HTTP Basic authentication from the configured API key
/// - Default headers including User-Agent and Accept
///
/// A client built from a config without an API key is usable, but every
/// request fails with [`HttpError::AuthNotConfigured`] before any network
/// I/O.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and cheap to clone, making it safe to share
/// across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use simplemdm_api::{HttpClient, SimpleMdmConfig, ApiKey};
///
/// let config = SimpleMdmConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .build();
/// let client = HttpClient::new(&config);
///
/// let response = client.get("devices", &[]).await?;
/// println!("HTTP {}", response.code);
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL including the API path (e.g., `https://a.simplemdm.com/api/v1`).
    base_url: String,
    /// Precomputed `Authorization` header value, absent without an API key.
    auth_header: Option<String>,
    /// User-Agent header value.
    user_agent: String,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &SimpleMdmConfig) -> Self {
        let base_url = config.base_url();

        // The API authenticates with HTTP Basic, the key as the user and an
        // empty password.
        let auth_header = config
            .api_key()
            .map(|key| format!("Basic {}", BASE64_STANDARD.encode(format!("{}:", key.as_ref()))));

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}SimpleMDM API Library v{SDK_VERSION} | Rust {rust_version}");

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            auth_header,
            user_agent,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns `true` if an API key is configured.
    #[must_use]
    pub const fn has_credentials(&self) -> bool {
        self.auth_header.is_some()
    }

    /// Performs one GET request against the API.
    ///
    /// `path` is relative to the API base path (e.g., `"devices"` or
    /// `"devices/42"`). Query parameters are appended only when present.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::AuthNotConfigured`] without touching the network
    /// when no API key is set, or [`HttpError::Network`] when the request
    /// fails with no usable response. Non-2xx statuses are NOT errors at
    /// this layer; callers classify them from the returned
    /// [`HttpResponse`].
    pub async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<HttpResponse, HttpError> {
        let auth_header = self
            .auth_header
            .as_deref()
            .ok_or(HttpError::AuthNotConfigured)?;

        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, query_params = query.len(), "sending GET request");

        let mut builder = self
            .client
            .get(&url)
            .header("Authorization", auth_header)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json");
        if !query.is_empty() {
            builder = builder.query(query);
        }

        let res = builder.send().await?;

        let code = res.status().as_u16();
        let content_type = res
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| {
                value
                    .split(';')
                    .next()
                    .unwrap_or(value)
                    .trim()
                    .to_ascii_lowercase()
            });
        let body = res.bytes().await?.to_vec();

        Ok(HttpResponse::new(code, content_type, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;

    fn config_with_key(key: &str) -> SimpleMdmConfig {
        SimpleMdmConfig::builder()
            .api_key(ApiKey::new(key).unwrap())
            .build()
    }

    #[test]
    fn test_client_construction_with_key() {
        let client = HttpClient::new(&config_with_key("test-key"));

        assert_eq!(client.base_url(), "https://a.simplemdm.com/api/v1");
        assert!(client.has_credentials());
    }

    #[test]
    fn test_auth_header_is_basic_with_empty_password() {
        let client = HttpClient::new(&config_with_key("test-key"));

        let expected = format!("Basic {}", BASE64_STANDARD.encode("test-key:"));
        assert_eq!(client.auth_header.as_deref(), Some(expected.as_str()));
    }

    #[test]
    fn test_no_auth_header_without_key() {
        let client = HttpClient::new(&SimpleMdmConfig::builder().build());
        assert!(!client.has_credentials());
    }

    #[tokio::test]
    async fn test_get_without_key_short_circuits() {
        let client = HttpClient::new(&SimpleMdmConfig::builder().build());

        // No server is listening anywhere; the call must fail before I/O.
        let result = client.get("devices", &[]).await;
        assert!(matches!(result, Err(HttpError::AuthNotConfigured)));
    }

    #[test]
    fn test_user_agent_format() {
        let config = SimpleMdmConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build();
        let client = HttpClient::new(&config);

        assert!(client.user_agent.starts_with("MyApp/1.0 | "));
        assert!(client.user_agent.contains("SimpleMDM API Library v"));
        assert!(client.user_agent.contains("Rust"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
