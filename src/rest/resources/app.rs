use serde::Deserialize;

use crate::rest::resource::{ListableResource, Resource, SearchableResource};

/// An app in the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct App {
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub app_type: Option<String>,
    #[serde(default)]
    pub bundle_identifier: Option<String>,
    #[serde(default)]
    pub itunes_store_id: Option<i64>,
    #[serde(default)]
    pub version: Option<String>,
}

impl Resource for App {
    type Id = i64;

    const TYPE_NAME: &'static str = "app";
    const COLLECTION: &'static str = "apps";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl ListableResource for App {}

impl SearchableResource for App {}
