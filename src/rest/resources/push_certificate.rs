use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::rest::envelope::timestamp;
use crate::rest::resource::{Resource, UniqueResource};

/// The APNs push certificate on file for the account.
///
/// At most one exists per account, so it carries no identifier and is
/// fetched with [`UniqueResource::get`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PushCertificate {
    pub apple_id: String,
    #[serde(default, deserialize_with = "timestamp::deserialize_opt")]
    pub expires_at: Option<DateTime<FixedOffset>>,
}

impl Resource for PushCertificate {
    type Id = i64;

    const TYPE_NAME: &'static str = "push_certificate";
    const COLLECTION: &'static str = "push_certificate";

    fn id(&self) -> Option<Self::Id> {
        None
    }
}

impl UniqueResource for PushCertificate {}
