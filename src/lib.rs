//! # SimpleMDM API Rust Library
//!
//! A typed Rust client for the SimpleMDM REST API, providing validated
//! configuration, envelope decoding, cursor-based pagination, and
//! relationship resolution for device management resources.
//!
//! ## Overview
//!
//! This library provides:
//! - Type-safe configuration via [`SimpleMdmConfig`] and [`SimpleMdmConfigBuilder`]
//! - Validated newtypes for the API key and host URL
//! - An async HTTP client with Basic authentication via [`clients`]
//! - Typed resources with generic envelope decoding via [`rest::resources`]
//! - Cursor pagination over listable collections via [`rest::Cursor`]
//! - Relationship resolvers for linked resources via [`rest::ToOne`],
//!   [`rest::ToMany`], and [`rest::ToManyNested`]
//!
//! ## Quick Start
//!
//! ```rust
//! use simplemdm_api::{ApiKey, SimpleMdmConfig};
//!
//! // Create configuration using the builder pattern
//! let config = SimpleMdmConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build();
//! ```
//!
//! ## Fetching Resources
//!
//! ```rust,ignore
//! use simplemdm_api::clients::HttpClient;
//! use simplemdm_api::rest::resources::{Account, Device};
//! use simplemdm_api::rest::{ListableResource, UniqueResource};
//!
//! let client = HttpClient::new(&config);
//!
//! // Singleton resources are fetched directly
//! let account = Account::get(&client).await?;
//!
//! // Collections can be fetched whole or walked with a cursor
//! let devices = Device::all(&client).await?;
//!
//! let mut cursor = Device::cursor();
//! while !cursor.is_exhausted() {
//!     for device in cursor.advance(&client, Some(25)).await? {
//!         println!("{}", device.name);
//!     }
//! }
//! ```
//!
//! ## Resolving Relationships
//!
//! ```rust,ignore
//! use simplemdm_api::rest::ListableResource;
//! use simplemdm_api::rest::resources::Device;
//!
//! let device = Device::find(&client, 121).await?;
//!
//! // To-one: follow the device group reference
//! if let Some(group) = &device.device_group {
//!     let group = group.resolve(&client).await?;
//! }
//!
//! // Nested to-many: discover custom attribute values by pagination
//! let values = device.custom_attribute_values().resolve_all(&client).await?;
//! ```

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export commonly used types at the crate root
pub use config::{ApiKey, HostUrl, SimpleMdmConfig, SimpleMdmConfigBuilder};
pub use error::ConfigError;

pub use clients::{HttpClient, HttpError, HttpResponse};

pub use rest::{
    Cursor, ListableResource, PageLimit, Resource, ResourceError, SearchableResource, ToMany,
    ToManyNested, ToOne, UniqueResource,
};
