//! Typed resource definitions.
//!
//! Each module maps one API resource type onto a Rust struct, wiring its
//! wire names (`TYPE_NAME`, `COLLECTION`) into the fetch and pagination
//! machinery via the [`Resource`](crate::rest::resource::Resource) trait.

mod account;
mod app;
mod app_group;
mod custom_attribute;
mod custom_attribute_value;
mod device;
mod device_group;
mod profile;
mod push_certificate;

pub use account::Account;
pub use app::App;
pub use app_group::AppGroup;
pub use custom_attribute::CustomAttribute;
pub use custom_attribute_value::CustomAttributeValue;
pub use device::Device;
pub use device_group::DeviceGroup;
pub use profile::Profile;
pub use push_certificate::PushCertificate;
