//! Cursor-based pagination over collection endpoints.
//!
//! A [`Cursor`] walks a collection in bounded pages using the API's opaque
//! `starting_after`/`limit` protocol: each page request starts after the
//! last identifier seen, and the list envelope's `has_more` flag says
//! whether another page exists. Pages are strictly sequential; the cursor
//! never prefetches.
//!
//! A cursor is private, single-traversal state. `advance` takes `&mut self`,
//! so the borrow checker enforces the one-pending-call-at-a-time rule;
//! sharing a cursor across concurrent traversals requires external
//! synchronization.
//!
//! # Example
//!
//! ```rust,ignore
//! use simplemdm_api::rest::resources::Device;
//! use simplemdm_api::rest::ListableResource;
//!
//! let mut cursor = Device::cursor();
//! while !cursor.is_exhausted() {
//!     for device in cursor.advance(&client, Some(50)).await? {
//!         println!("{:?}", device.name);
//!     }
//! }
//! ```

use std::collections::VecDeque;

use crate::clients::HttpClient;
use crate::rest::envelope::decode_list;
use crate::rest::errors::ResourceError;
use crate::rest::resource::{fetch_classified, Resource};

/// Server-documented bounds on the `limit` page-size parameter.
///
/// Requests outside these bounds are rejected before any network call.
#[derive(Debug, Clone, Copy)]
pub struct PageLimit;

impl PageLimit {
    /// Smallest accepted page size.
    pub const MIN: u32 = 1;
    /// Largest accepted page size.
    pub const MAX: u32 = 100;
    /// Page size used when the caller does not specify one.
    pub const DEFAULT: u32 = 10;

    /// Validates a requested page size against the documented bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidLimit`] when `limit` is outside
    /// `MIN..=MAX`.
    pub const fn validate(limit: u32) -> Result<(), ResourceError> {
        if limit < Self::MIN || limit > Self::MAX {
            return Err(ResourceError::InvalidLimit(limit));
        }
        Ok(())
    }
}

/// Stateful paginator over a collection endpoint.
///
/// Tracks whether more data is available, the last identifier seen, and a
/// buffer of fetched-but-not-yet-yielded items. The cursor is exhausted —
/// the ordinary, expected end of a traversal — once the server reports no
/// more data and the buffer is drained.
///
/// Constructed through [`ListableResource::cursor`](crate::rest::ListableResource::cursor),
/// [`SearchableResource::search`](crate::rest::SearchableResource::search),
/// or a nested relationship.
#[derive(Debug)]
pub struct Cursor<R: Resource> {
    /// Request path (`devices`, or `device_groups/42/devices` when nested).
    path: String,
    /// Free-text match added to every page request, if any.
    search: Option<String>,
    has_more: bool,
    last_seen_id: Option<R::Id>,
    buffer: VecDeque<R>,
}

impl<R: Resource> Cursor<R> {
    /// Creates a cursor over the resource's top-level collection.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::with_path(R::COLLECTION.to_string())
    }

    /// Creates a cursor that adds `search=<query>` to every page request.
    #[must_use]
    pub(crate) fn with_search(query: String) -> Self {
        let mut cursor = Self::new();
        cursor.search = Some(query);
        cursor
    }

    /// Creates a cursor scoped under a parent resource
    /// (`{parent_collection}/{parent_id}/{collection}`).
    #[must_use]
    pub(crate) fn nested(parent_collection: &str, parent_id: &str) -> Self {
        Self::with_path(format!("{parent_collection}/{parent_id}/{}", R::COLLECTION))
    }

    fn with_path(path: String) -> Self {
        Self {
            path,
            search: None,
            has_more: true,
            last_seen_id: None,
            buffer: VecDeque::new(),
        }
    }

    /// Returns `true` while the server may still have data for this
    /// traversal.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// Returns `true` once the traversal is complete: no more server-side
    /// data and nothing buffered.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        !self.has_more && self.buffer.is_empty()
    }

    /// Fetches and returns the next batch of up to `limit` items
    /// (default 10).
    ///
    /// Issues at most one network request per call. Buffered items are
    /// served first; when the buffer already holds the requested amount, no
    /// request is made at all. The returned batch may be shorter than
    /// requested when the collection is exhausted — an empty batch from an
    /// exhausted cursor is the ordinary end of iteration, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidLimit`] — before any network call —
    /// when `limit` is outside `1..=100`, and
    /// [`ResourceError::DoesNotExpectMoreResources`] when the server claims
    /// more data but returns an empty page (a malformed response that would
    /// otherwise loop forever). Fetch and decode errors propagate unchanged;
    /// no retry is attempted internally.
    pub async fn advance(
        &mut self,
        client: &HttpClient,
        limit: Option<u32>,
    ) -> Result<Vec<R>, ResourceError> {
        if let Some(limit) = limit {
            PageLimit::validate(limit)?;
        }
        let requested = limit.unwrap_or(PageLimit::DEFAULT);

        if self.buffer.len() < requested as usize && self.has_more {
            self.fetch_page(client, requested).await?;
        }

        let take = self.buffer.len().min(requested as usize);
        Ok(self.buffer.drain(..take).collect())
    }

    /// Returns the next single item, fetching maximum-size pages as needed.
    ///
    /// `Ok(None)` signals the ordinary end of the sequence.
    ///
    /// # Errors
    ///
    /// Propagates any [`ResourceError`] from the underlying page fetch.
    pub async fn next_item(&mut self, client: &HttpClient) -> Result<Option<R>, ResourceError> {
        if self.buffer.is_empty() && self.has_more {
            self.fetch_page(client, PageLimit::MAX).await?;
        }
        Ok(self.buffer.pop_front())
    }

    /// Fetches one page into the buffer and updates the traversal state.
    async fn fetch_page(&mut self, client: &HttpClient, limit: u32) -> Result<(), ResourceError> {
        let mut query: Vec<(String, String)> = Vec::new();
        if let Some(last) = &self.last_seen_id {
            query.push(("starting_after".to_string(), last.to_string()));
        }
        query.push(("limit".to_string(), limit.to_string()));
        if let Some(search) = &self.search {
            query.push(("search".to_string(), search.clone()));
        }

        let body = fetch_classified(client, &self.path, &query, R::TYPE_NAME, None).await?;
        let (items, has_more) = decode_list::<R>(&body)?;

        if has_more && items.is_empty() {
            tracing::warn!(
                path = %self.path,
                "server reported more resources but returned an empty page"
            );
            return Err(ResourceError::DoesNotExpectMoreResources);
        }

        let last_id = items.last().and_then(Resource::id);
        if has_more && last_id.is_none() {
            // Without a resumption id the next fetch would re-request the
            // same page forever.
            tracing::warn!(
                path = %self.path,
                "server reported more resources but the page carries no resumption id"
            );
            return Err(ResourceError::DoesNotExpectMoreResources);
        }

        if let Some(id) = last_id {
            self.last_seen_id = Some(id);
        }
        self.has_more = has_more;
        self.buffer.extend(items);
        Ok(())
    }
}
