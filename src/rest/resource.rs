//! Resource traits for typed fetch operations.
//!
//! This module defines the per-type descriptor trait, [`Resource`], and the
//! fetch-shape traits layered on top of it:
//!
//! - [`UniqueResource`]: `get()` for resources with exactly one server-side
//!   instance (the account, the push certificate)
//! - [`ListableResource`]: `find()`, `all()`, and `cursor()` for collection
//!   resources
//! - [`SearchableResource`]: `search()` for collections that accept a
//!   free-text match parameter
//!
//! # Implementing a Resource
//!
//! A resource declares its remote shape as associated constants and derives
//! `Deserialize` for its snake_case attributes; the envelope decoder does
//! the rest.
//!
//! ```rust,ignore
//! use serde::Deserialize;
//! use simplemdm_api::rest::{ListableResource, Resource};
//!
//! #[derive(Debug, Clone, PartialEq, Deserialize)]
//! pub struct Device {
//!     pub id: Option<i64>,
//!     pub name: String,
//! }
//!
//! impl Resource for Device {
//!     type Id = i64;
//!     const TYPE_NAME: &'static str = "device";
//!     const COLLECTION: &'static str = "devices";
//!
//!     fn id(&self) -> Option<Self::Id> {
//!         self.id
//!     }
//! }
//!
//! impl ListableResource for Device {}
//!
//! // Usage:
//! let device = Device::find(&client, 121).await?;
//! let devices = Device::all(&client).await?;
//! ```

use std::fmt::Display;

use serde::de::DeserializeOwned;

use crate::clients::{HttpClient, HttpError};
use crate::rest::cursor::{Cursor, PageLimit};
use crate::rest::envelope::{decode_error_body, decode_single};
use crate::rest::errors::ResourceError;

/// Identifier type for a resource.
///
/// The API uses integer identifiers for most resources and strings for
/// custom attributes; both satisfy this bound.
pub trait ResourceId:
    Display + std::fmt::Debug + Clone + PartialEq + DeserializeOwned + Send + Sync
{
}

impl<T> ResourceId for T where
    T: Display + std::fmt::Debug + Clone + PartialEq + DeserializeOwned + Send + Sync
{
}

/// A typed resource decoded from one server-side entity.
///
/// The associated constants are the resource's static descriptor: the
/// `"type"` discriminator every payload must carry, and the collection name
/// used to build request paths. Descriptors are compile-time data; the
/// decoder and the cursor are generic over them.
///
/// # Required Bounds
///
/// Resources must be deserializable, cloneable, debuggable, and thread-safe.
pub trait Resource: DeserializeOwned + Clone + std::fmt::Debug + Send + Sync + Sized {
    /// The type of the resource's identifier.
    type Id: ResourceId;

    /// The `"type"` discriminator string (e.g., `"device"`).
    const TYPE_NAME: &'static str;

    /// The collection name used in URL paths (e.g., `"devices"`).
    const COLLECTION: &'static str;

    /// Returns the resource's ID if the payload carried one.
    ///
    /// Singleton resources (the account) have no identifier.
    fn id(&self) -> Option<Self::Id>;
}

/// A resource with exactly one server-side instance.
///
/// Fetched by GETting the collection endpoint itself, which returns a
/// single-resource envelope.
#[allow(async_fn_in_trait)]
pub trait UniqueResource: Resource {
    /// Fetches the singleton instance.
    ///
    /// Issues exactly one GET request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] on auth, transport, or decode failure.
    async fn get(client: &HttpClient) -> Result<Self, ResourceError> {
        let body = fetch_classified(client, Self::COLLECTION, &[], Self::TYPE_NAME, None).await?;
        decode_single(&body)
    }
}

/// A resource living in a server-side collection.
#[allow(async_fn_in_trait)]
pub trait ListableResource: Resource {
    /// Fetches a single resource by ID.
    ///
    /// Issues exactly one GET request to `collection/{id}`. After decoding,
    /// the resource's own ID is cross-checked against the requested one; a
    /// mismatch fails with [`ResourceError::UnexpectedResourceId`] — this
    /// guards against server and URL-construction bugs.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::DoesNotExist`] for HTTP 404, or any other
    /// [`ResourceError`] surfaced by the fetch.
    async fn find(client: &HttpClient, id: Self::Id) -> Result<Self, ResourceError> {
        let path = format!("{}/{id}", Self::COLLECTION);
        let body =
            fetch_classified(client, &path, &[], Self::TYPE_NAME, Some(id.to_string())).await?;
        let resource: Self = decode_single(&body)?;

        match resource.id() {
            Some(actual) if actual == id => Ok(resource),
            actual => Err(ResourceError::UnexpectedResourceId {
                resource: Self::TYPE_NAME,
                expected: id.to_string(),
                actual: actual.map_or_else(|| "none".to_string(), |a| a.to_string()),
            }),
        }
    }

    /// Fetches every resource in the collection.
    ///
    /// Paginates internally at the maximum page size until the server
    /// reports no more data. Use [`ListableResource::cursor`] for bounded,
    /// incremental traversal.
    ///
    /// # Errors
    ///
    /// Returns the first [`ResourceError`] any page fetch produces.
    async fn all(client: &HttpClient) -> Result<Vec<Self>, ResourceError> {
        let mut cursor = Self::cursor();
        let mut items = Vec::new();
        while !cursor.is_exhausted() {
            items.extend(cursor.advance(client, Some(PageLimit::MAX)).await?);
        }
        Ok(items)
    }

    /// Returns a cursor over the collection.
    #[must_use]
    fn cursor() -> Cursor<Self> {
        Cursor::new()
    }
}

/// A collection resource that accepts a free-text match parameter.
pub trait SearchableResource: ListableResource {
    /// Returns a cursor that adds `search=<query>` to every page request.
    #[must_use]
    fn search(query: impl Into<String>) -> Cursor<Self> {
        Cursor::with_search(query.into())
    }
}

/// Performs one GET and classifies the response by status code.
///
/// Shared by every fetch operation and by the cursor: 200 requires a JSON
/// content type and yields the body bytes; 401 and 404 map to their
/// semantic errors; anything else is interpreted through the error
/// envelope.
pub(crate) async fn fetch_classified(
    client: &HttpClient,
    path: &str,
    query: &[(String, String)],
    resource: &'static str,
    id: Option<String>,
) -> Result<Vec<u8>, ResourceError> {
    let response = client.get(path, query).await?;

    match response.code {
        401 => Err(ResourceError::AuthRejected),
        404 => Err(ResourceError::DoesNotExist { resource, id }),
        code if response.is_ok() => {
            if !response.is_json() {
                return Err(HttpError::UnexpectedContentType {
                    content_type: response.content_type,
                }
                .into());
            }
            tracing::debug!(path, code, "fetched {resource}");
            Ok(response.body)
        }
        code => Err(decode_error_body(&response.body, code)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::{Account, CustomAttribute, Device, PushCertificate};

    #[test]
    fn test_descriptors_declare_collection_and_type() {
        assert_eq!(Device::TYPE_NAME, "device");
        assert_eq!(Device::COLLECTION, "devices");
        assert_eq!(Account::TYPE_NAME, "account");
        assert_eq!(Account::COLLECTION, "account");
        assert_eq!(PushCertificate::COLLECTION, "push_certificate");
    }

    #[test]
    fn test_string_identifier_resources() {
        // Custom attributes are identified by name rather than number.
        fn assert_string_id<R: Resource<Id = String>>() {}
        assert_string_id::<CustomAttribute>();
    }

    #[test]
    fn test_resource_trait_bounds() {
        fn assert_trait_bounds<T: Resource>() {}
        assert_trait_bounds::<Device>();
        assert_trait_bounds::<Account>();
    }
}
