//! Configuration types for the SimpleMDM API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with SimpleMDM.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`SimpleMdmConfig`]: The main configuration struct holding all SDK settings
//! - [`SimpleMdmConfigBuilder`]: A builder for constructing [`SimpleMdmConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`HostUrl`]: A validated API host URL (override for proxies and tests)
//!
//! # Example
//!
//! ```rust
//! use simplemdm_api::{SimpleMdmConfig, ApiKey};
//!
//! let config = SimpleMdmConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, HostUrl};

/// Default API endpoint for SimpleMDM.
pub const DEFAULT_HOST: &str = "https://a.simplemdm.com";

/// Base path for the current API version.
pub const API_BASE_PATH: &str = "/api/v1";

/// Configuration for the SimpleMDM API SDK.
///
/// This struct holds everything the client needs to talk to the API: the
/// credential, an optional host override, and an optional User-Agent prefix.
///
/// Configuration is instance-based and passed explicitly to
/// [`HttpClient::new`](crate::HttpClient::new); there is no process-wide
/// state. A
/// config without an API key builds fine — any fetch through such a client
/// fails with `AuthNotConfigured` before any network I/O.
///
/// # Thread Safety
///
/// `SimpleMdmConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use simplemdm_api::{SimpleMdmConfig, ApiKey, HostUrl};
///
/// let config = SimpleMdmConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .host(HostUrl::new("https://a.simplemdm.com").unwrap())
///     .build();
///
/// assert!(config.api_key().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct SimpleMdmConfig {
    api_key: Option<ApiKey>,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl SimpleMdmConfig {
    /// Creates a new builder for constructing a `SimpleMdmConfig`.
    #[must_use]
    pub fn builder() -> SimpleMdmConfigBuilder {
        SimpleMdmConfigBuilder::new()
    }

    /// Returns the configured API key, if any.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Returns the configured host override, if any.
    #[must_use]
    pub const fn host(&self) -> Option<&HostUrl> {
        self.host.as_ref()
    }

    /// Returns the configured User-Agent prefix, if any.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the base URL requests are sent to, including the API path.
    ///
    /// Uses the host override when configured, otherwise [`DEFAULT_HOST`].
    #[must_use]
    pub fn base_url(&self) -> String {
        let host = self
            .host
            .as_ref()
            .map_or(DEFAULT_HOST, std::convert::AsRef::as_ref);
        format!("{host}{API_BASE_PATH}")
    }
}

/// Builder for [`SimpleMdmConfig`].
///
/// # Example
///
/// ```rust
/// use simplemdm_api::{SimpleMdmConfig, ApiKey};
///
/// let config = SimpleMdmConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct SimpleMdmConfigBuilder {
    api_key: Option<ApiKey>,
    host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl SimpleMdmConfigBuilder {
    /// Creates a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    #[must_use]
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets the host the client sends requests to.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets a prefix for the User-Agent header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> SimpleMdmConfig {
        SimpleMdmConfig {
            api_key: self.api_key,
            host: self.host,
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}

// Verify SimpleMdmConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SimpleMdmConfig>();
};
