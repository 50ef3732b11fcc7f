use serde::Deserialize;

use crate::rest::resource::{ListableResource, Resource};

/// A configuration profile.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub profile_identifier: Option<String>,
    #[serde(default)]
    pub user_scope: Option<bool>,
}

impl Resource for Profile {
    type Id = i64;

    const TYPE_NAME: &'static str = "profile";
    const COLLECTION: &'static str = "profiles";

    fn id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl ListableResource for Profile {}
