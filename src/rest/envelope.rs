//! Envelope decoding for the SimpleMDM wire format.
//!
//! Every API response is wrapped in one of three JSON envelopes:
//!
//! - a single resource: `{"data": {"type": ..., "id": ..., "attributes": {...},
//!   "relationships": {...}}}`
//! - a list: `{"data": [...], "has_more": bool}`
//! - an error: `{"errors": [{"title": ...}, ...]}`
//!
//! Attribute names on the wire are snake_case, which maps one-to-one onto
//! Rust field names, so the typed resources deserialize directly once the
//! envelope is peeled: the decoder merges `attributes`, the `id`, and each
//! relationship's `data` payload into a single object and hands it to serde.
//!
//! The `"type"` discriminator of every entry is validated against the
//! resource's declared type name before any field is looked at; a payload
//! for the wrong type never coerces silently.

use serde::Deserialize;
use serde_json::Value;

use crate::rest::errors::ResourceError;
use crate::rest::resource::Resource;

/// One resource entry as it appears inside an envelope's `data`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ResourceData {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub attributes: serde_json::Map<String, Value>,
    #[serde(default)]
    pub relationships: serde_json::Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct SingleEnvelope {
    data: ResourceData,
}

#[derive(Debug, Deserialize)]
struct ListEnvelope {
    data: Vec<ResourceData>,
    #[serde(default)]
    has_more: bool,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    title: String,
}

/// Decodes a single-resource envelope into a typed resource.
pub(crate) fn decode_single<R: Resource>(body: &[u8]) -> Result<R, ResourceError> {
    let envelope: SingleEnvelope = serde_json::from_slice(body).map_err(classify_decode_error)?;
    resource_from_data(envelope.data)
}

/// Decodes a list envelope into typed resources plus the `has_more` flag.
pub(crate) fn decode_list<R: Resource>(body: &[u8]) -> Result<(Vec<R>, bool), ResourceError> {
    let envelope: ListEnvelope = serde_json::from_slice(body).map_err(classify_decode_error)?;
    let items = envelope
        .data
        .into_iter()
        .map(resource_from_data)
        .collect::<Result<Vec<R>, _>>()?;
    Ok((items, envelope.has_more))
}

/// Decodes an error body into the matching [`ResourceError`].
///
/// Only the first `errors[].title` entry is surfaced, even when the server
/// reports several. A body with no usable `errors` key yields
/// [`ResourceError::UnknownApi`].
pub(crate) fn decode_error_body(body: &[u8], status: u16) -> ResourceError {
    let envelope: Option<ErrorEnvelope> = serde_json::from_slice(body).ok();
    envelope
        .and_then(|e| e.errors.into_iter().next())
        .map_or(ResourceError::UnknownApi { status }, |entry| {
            ResourceError::Api {
                status,
                message: entry.title,
            }
        })
}

/// Builds a typed resource from one decoded envelope entry.
///
/// Validates the `"type"` discriminator, then merges attributes, the `id`,
/// and each relationship's inner `data` payload into one object for serde.
pub(crate) fn resource_from_data<R: Resource>(data: ResourceData) -> Result<R, ResourceError> {
    if data.type_name != R::TYPE_NAME {
        return Err(ResourceError::TypeMismatch {
            expected: R::TYPE_NAME,
            actual: data.type_name,
        });
    }

    let mut object = data.attributes;
    if let Some(id) = data.id {
        object.insert("id".to_string(), id);
    }
    for (name, relationship) in data.relationships {
        // Each relationship is wrapped as {"data": <relation-or-array>}.
        if let Some(inner) = relationship.get("data") {
            object.insert(name, inner.clone());
        }
    }

    serde_json::from_value(Value::Object(object)).map_err(classify_decode_error)
}

/// Reclassifies date-format failures out of serde's generic decode error.
///
/// The timestamp deserializer reports unparseable dates through
/// `serde::de::Error::custom`, which serde_json folds into its own error
/// string; this is the single place that string is turned back into the
/// dedicated variant.
fn classify_decode_error(err: serde_json::Error) -> ResourceError {
    let message = err.to_string();
    if let Some(rest) = message.strip_prefix(timestamp::ERROR_PREFIX) {
        let value = rest
            .split(" at line ")
            .next()
            .unwrap_or(rest)
            .trim()
            .to_string();
        return ResourceError::DateFormat(value);
    }
    ResourceError::Decode(err)
}

/// Serde helpers for the API's date-valued attributes.
///
/// Exactly two textual formats are accepted, first match wins:
///
/// 1. the custom `yyyy-MM-dd HH:mm:ss ±ZZZZ` format the API documents
///    (e.g., `"2026-01-15 09:30:00 +0000"`)
/// 2. ISO 8601 / RFC 3339 with fractional seconds
///    (e.g., `"2026-01-15T09:30:00.000+00:00"`)
///
/// Anything else fails decoding with
/// [`ResourceError::DateFormat`](crate::rest::ResourceError::DateFormat).
pub mod timestamp {
    use chrono::{DateTime, FixedOffset};
    use serde::{de, Deserialize, Deserializer};

    pub(crate) const ERROR_PREFIX: &str = "unrecognized date format: ";

    const CUSTOM_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

    /// Parses a date string in either accepted format.
    ///
    /// The ISO 8601 form is only accepted with a fractional-seconds
    /// component; `2026-01-15T09:30:00+00:00` is not a valid API date.
    ///
    /// # Errors
    ///
    /// Returns the unparseable input when neither format matches.
    pub fn parse(value: &str) -> Result<DateTime<FixedOffset>, String> {
        if let Ok(parsed) = DateTime::parse_from_str(value, CUSTOM_FORMAT) {
            return Ok(parsed);
        }
        if value.contains('.') {
            if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
                return Ok(parsed);
            }
        }
        Err(value.to_string())
    }

    /// Deserializes a required date field.
    ///
    /// # Errors
    ///
    /// Fails with the date-format marker message when the value matches
    /// neither accepted format.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        parse(&value).map_err(|v| de::Error::custom(format!("{ERROR_PREFIX}{v}")))
    }

    /// Deserializes an optional date field (`null` and absent both map to
    /// `None`; pair with `#[serde(default)]` for absence).
    ///
    /// # Errors
    ///
    /// Fails with the date-format marker message when a present value
    /// matches neither accepted format.
    pub fn deserialize_opt<'de, D>(
        deserializer: D,
    ) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        match value {
            None => Ok(None),
            Some(value) => parse(&value)
                .map(Some)
                .map_err(|v| de::Error::custom(format!("{ERROR_PREFIX}{v}"))),
        }
    }
}
