use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::rest::envelope::timestamp;
use crate::rest::relation::{ToManyNested, ToOne};
use crate::rest::resource::{ListableResource, Resource, SearchableResource};
use crate::rest::resources::{CustomAttributeValue, DeviceGroup};

/// An enrolled device.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Device {
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub last_seen_at: Option<DateTime<FixedOffset>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub enrolled_at: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub device_name: Option<String>,
    #[serde(default)]
    pub os_version: Option<String>,
    #[serde(default)]
    pub build_version: Option<String>,
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    /// The device group this device belongs to, when the payload carries a
    /// `device_group` relationship.
    #[serde(default)]
    pub device_group: Option<ToOne<DeviceGroup>>,
}

impl Device {
    /// Returns a reference to this device's custom attribute values.
    ///
    /// The values are a nested collection; their identifiers are only
    /// discovered when the reference is resolved.
    ///
    /// # Panics
    ///
    /// Panics when the device carries no identifier, which only happens for
    /// hand-built values; every payload decoded from the API carries one.
    #[must_use]
    pub fn custom_attribute_values(&self) -> ToManyNested<Self, CustomAttributeValue> {
        let id = self.id.expect("device payloads always carry an id");
        ToManyNested::new(id)
    }
}

impl Resource for Device {
    type Id = i64;

    const TYPE_NAME: &'static str = "device";
    const COLLECTION: &'static str = "devices";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl ListableResource for Device {}

impl SearchableResource for Device {}
