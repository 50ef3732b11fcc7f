//! Typed access to the REST API.
//!
//! The building blocks layer as follows: [`resources`] defines the typed
//! resource structs, [`Resource`] and its refinements describe how each one
//! is fetched, [`Cursor`] walks paginated collections, and the relation
//! types resolve cross-resource references. Envelope decoding is internal;
//! callers only ever see decoded resources and [`ResourceError`]s.

mod cursor;
mod envelope;
mod errors;
mod relation;
mod resource;
pub mod resources;

pub use cursor::{Cursor, PageLimit};
pub use envelope::timestamp;
pub use errors::ResourceError;
pub use relation::{ToMany, ToManyNested, ToOne};
pub use resource::{ListableResource, Resource, ResourceId, SearchableResource, UniqueResource};
