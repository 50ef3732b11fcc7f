//! Relationship descriptors and their resolvers.
//!
//! A relationship is a reference from one resource to another, not the
//! related resource itself. Resolving one performs a fresh fetch every time;
//! nothing is cached, so repeated resolution performs repeated network I/O
//! by design.
//!
//! Three shapes exist on the wire:
//!
//! - [`ToOne`]: `{"type": ..., "id": ...}` — exactly one target identifier
//! - [`ToMany`]: an array of such references — target identifiers known
//!   ahead of fetch, in an order that is significant and preserved
//! - [`ToManyNested`]: target identifiers unknown ahead of fetch; children
//!   are discovered by paginating `{parent}/{id}/{children}`

use std::marker::PhantomData;

use serde::Deserialize;

use crate::clients::HttpClient;
use crate::rest::cursor::Cursor;
use crate::rest::errors::ResourceError;
use crate::rest::resource::{ListableResource, Resource};

/// A reference to exactly one related resource.
///
/// Deserialized from a relationship payload; carries the target type name
/// (informational) and the target identifier.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound = "")]
pub struct ToOne<R: Resource> {
    #[serde(rename = "type")]
    type_name: String,
    id: R::Id,
    #[serde(skip)]
    _marker: PhantomData<fn() -> R>,
}

impl<R: Resource> ToOne<R> {
    /// Returns the target resource's identifier.
    #[must_use]
    pub const fn id(&self) -> &R::Id {
        &self.id
    }

    /// Returns the target type name as declared in the payload.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl<R: ListableResource> ToOne<R> {
    /// Fetches the referenced resource.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the underlying fetch.
    pub async fn resolve(&self, client: &HttpClient) -> Result<R, ResourceError> {
        R::find(client, self.id.clone()).await
    }
}

impl<R: Resource> PartialEq for ToOne<R> {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && self.id == other.id
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RelationRef<Id> {
    #[serde(rename = "type")]
    type_name: String,
    id: Id,
}

/// An ordered set of references to related resources, known ahead of fetch.
///
/// The declared order is significant: every resolver yields results in this
/// order, never in network completion order.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent, bound = "")]
pub struct ToMany<R: Resource> {
    refs: Vec<RelationRef<R::Id>>,
    #[serde(skip)]
    _marker: PhantomData<fn() -> R>,
}

impl<R: Resource> ToMany<R> {
    /// Returns the declared target identifiers, in order.
    pub fn ids(&self) -> impl Iterator<Item = &R::Id> {
        self.refs.iter().map(|r| &r.id)
    }

    /// Returns the number of declared references.
    #[must_use]
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// Returns `true` when no references are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}

impl<R: ListableResource> ToMany<R> {
    /// Fetches the referenced resource at `index` in declared order.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::DoesNotExist`] — without a network call —
    /// when `index` is out of range; otherwise propagates the fetch result.
    pub async fn resolve_at(
        &self,
        client: &HttpClient,
        index: usize,
    ) -> Result<R, ResourceError> {
        let reference = self.refs.get(index).ok_or(ResourceError::DoesNotExist {
            resource: R::TYPE_NAME,
            id: None,
        })?;
        R::find(client, reference.id.clone()).await
    }

    /// Fetches the referenced resource with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::DoesNotExist`] — without a network call —
    /// when `id` is not among the declared references; otherwise propagates
    /// the fetch result.
    pub async fn resolve_by_id(
        &self,
        client: &HttpClient,
        id: R::Id,
    ) -> Result<R, ResourceError> {
        if !self.refs.iter().any(|r| r.id == id) {
            return Err(ResourceError::DoesNotExist {
                resource: R::TYPE_NAME,
                id: Some(id.to_string()),
            });
        }
        R::find(client, id).await
    }

    /// Fetches every referenced resource concurrently.
    ///
    /// One fetch per declared identifier is fired in parallel and joined;
    /// the collected resources come back in declared-identifier order, never
    /// in arrival order. If any fetch fails, the whole call fails with the
    /// first observed error and no partial results; sibling fetches still in
    /// flight are dropped.
    ///
    /// # Errors
    ///
    /// The first [`ResourceError`] any of the fetches produces.
    pub async fn resolve_all(&self, client: &HttpClient) -> Result<Vec<R>, ResourceError> {
        let fetches = self.refs.iter().map(|r| R::find(client, r.id.clone()));
        futures::future::try_join_all(fetches).await
    }
}

impl<R: Resource> Default for ToMany<R> {
    fn default() -> Self {
        Self {
            refs: Vec::new(),
            _marker: PhantomData,
        }
    }
}

impl<R: Resource> PartialEq for ToMany<R> {
    fn eq(&self, other: &Self) -> bool {
        self.refs.len() == other.refs.len()
            && self
                .refs
                .iter()
                .zip(&other.refs)
                .all(|(a, b)| a.type_name == b.type_name && a.id == b.id)
    }
}

/// A reference to related resources whose identifiers are unknown ahead of
/// fetch.
///
/// Holds only the parent's identifier; the children are discovered by
/// paginating `{parent_collection}/{parent_id}/{child_collection}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ToManyNested<P: Resource, C: Resource> {
    parent_id: P::Id,
    _marker: PhantomData<fn() -> C>,
}

impl<P: Resource, C: Resource> ToManyNested<P, C> {
    /// Creates a nested reference scoped under the given parent.
    #[must_use]
    pub const fn new(parent_id: P::Id) -> Self {
        Self {
            parent_id,
            _marker: PhantomData,
        }
    }

    /// Returns the parent identifier this reference is scoped under.
    #[must_use]
    pub const fn parent_id(&self) -> &P::Id {
        &self.parent_id
    }

    /// Returns a cursor over the nested collection.
    #[must_use]
    pub fn cursor(&self) -> Cursor<C> {
        Cursor::nested(P::COLLECTION, &self.parent_id.to_string())
    }

    /// Discovers and fetches every child, paginating until exhaustion.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the underlying page fetches.
    pub async fn resolve_all(&self, client: &HttpClient) -> Result<Vec<C>, ResourceError> {
        let mut cursor = self.cursor();
        let mut items = Vec::new();
        while let Some(item) = cursor.next_item(client).await? {
            items.push(item);
        }
        Ok(items)
    }

    /// Searches the nested collection for the child with the given
    /// identifier.
    ///
    /// Paginates until the child is found or the collection is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::DoesNotExist`] when the whole nested
    /// collection is exhausted without a match.
    pub async fn resolve_by_id(
        &self,
        client: &HttpClient,
        id: C::Id,
    ) -> Result<C, ResourceError> {
        let mut cursor = self.cursor();
        while let Some(item) = cursor.next_item(client).await? {
            if item.id().as_ref() == Some(&id) {
                return Ok(item);
            }
        }
        Err(ResourceError::DoesNotExist {
            resource: C::TYPE_NAME,
            id: Some(id.to_string()),
        })
    }
}
