use serde::Deserialize;

use crate::rest::relation::ToMany;
use crate::rest::resource::{ListableResource, Resource};
use crate::rest::resources::{App, DeviceGroup};

/// A group of apps deployed together to a set of device groups.
///
/// Both relationships are declared inline in the payload, so their target
/// identifiers are known before any resolution happens.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppGroup {
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub auto_deploy: Option<bool>,
    #[serde(default)]
    pub apps: ToMany<App>,
    #[serde(default)]
    pub device_groups: ToMany<DeviceGroup>,
}

impl Resource for AppGroup {
    type Id = i64;

    const TYPE_NAME: &'static str = "app_group";
    const COLLECTION: &'static str = "app_groups";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl ListableResource for AppGroup {}
