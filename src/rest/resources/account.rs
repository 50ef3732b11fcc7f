use serde::Deserialize;

use crate::rest::resource::{Resource, UniqueResource};

/// The account the API key belongs to.
///
/// There is exactly one per API key, so it carries no identifier and is
/// fetched with [`UniqueResource::get`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Account {
    pub name: String,
    pub apple_store_country_code: Option<String>,
}

impl Resource for Account {
    type Id = i64;

    const TYPE_NAME: &'static str = "account";
    const COLLECTION: &'static str = "account";

    fn id(&self) -> Option<Self::Id> {
        None
    }
}

impl UniqueResource for Account {}
