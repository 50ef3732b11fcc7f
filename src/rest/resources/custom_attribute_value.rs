use serde::Deserialize;

use crate::rest::resource::Resource;

/// A custom attribute value attached to a device.
///
/// Only reachable through a device's nested collection; there is no
/// top-level endpoint for these.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CustomAttributeValue {
    pub id: Option<String>,
    pub value: String,
}

impl Resource for CustomAttributeValue {
    type Id = String;

    const TYPE_NAME: &'static str = "custom_attribute_value";
    const COLLECTION: &'static str = "custom_attribute_values";

    fn id(&self) -> Option<Self::Id> {
        self.id.clone()
    }
}
