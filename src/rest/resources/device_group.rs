use serde::Deserialize;

use crate::rest::relation::ToManyNested;
use crate::rest::resource::{ListableResource, Resource};
use crate::rest::resources::Device;

/// A named group of devices.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeviceGroup {
    pub id: Option<i64>,
    pub name: String,
}

impl DeviceGroup {
    /// Returns a reference to the devices assigned to this group.
    ///
    /// # Panics
    ///
    /// Panics when the group carries no identifier, which only happens for
    /// hand-built values; every payload decoded from the API carries one.
    #[must_use]
    pub fn devices(&self) -> ToManyNested<Self, Device> {
        let id = self.id.expect("device group payloads always carry an id");
        ToManyNested::new(id)
    }
}

impl Resource for DeviceGroup {
    type Id = i64;

    const TYPE_NAME: &'static str = "device_group";
    const COLLECTION: &'static str = "device_groups";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl ListableResource for DeviceGroup {}
