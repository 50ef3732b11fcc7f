use serde::Deserialize;

use crate::rest::resource::{ListableResource, Resource};

/// A custom attribute definition.
///
/// Identified by its name rather than a numeric id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CustomAttribute {
    pub id: Option<String>,
    pub name: String,
}

impl Resource for CustomAttribute {
    type Id = String;

    const TYPE_NAME: &'static str = "custom_attribute";
    const COLLECTION: &'static str = "custom_attributes";

    fn id(&self) -> Option<Self::Id> {
        self.id.clone()
    }
}

impl ListableResource for CustomAttribute {}
