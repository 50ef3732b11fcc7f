//! Error types for SDK configuration.
//!
//! This module contains error types for configuration and validation
//! failures. Everything that can go wrong once requests are in flight lives
//! in [`crate::clients::HttpError`] and [`crate::rest::ResourceError`].
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use simplemdm_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid SimpleMDM API key.")]
    EmptyApiKey,

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://a.simplemdm.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
