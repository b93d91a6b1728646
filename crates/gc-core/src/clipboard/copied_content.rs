//! `CopiedContent` record and the normalizer that builds it from raw payloads.
//!
//! A payload arrives either as JSON text or as an already-parsed JSON value.
//! Normalization branches once on that tag, parses text, then projects the
//! `key` and `value` fields by name. Fields missing from the source stay
//! `None`; they are never filled with defaults. Any JSON number is a valid
//! `key` and is kept exactly as parsed.

use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::ClipKey;

/// Untyped input accepted by the normalizer.
#[derive(Debug, Clone, PartialEq)]
pub enum RawPayload {
    /// Serialized JSON text, parsed before field extraction.
    Text(String),
    /// An already-structured JSON value.
    Structured(Value),
}

impl Default for RawPayload {
    /// The empty structure `{}`.
    fn default() -> Self {
        RawPayload::Structured(Value::Object(Map::new()))
    }
}

impl From<&str> for RawPayload {
    fn from(text: &str) -> Self {
        RawPayload::Text(text.to_string())
    }
}

impl From<String> for RawPayload {
    fn from(text: String) -> Self {
        RawPayload::Text(text)
    }
}

impl From<Value> for RawPayload {
    fn from(value: Value) -> Self {
        RawPayload::Structured(value)
    }
}

impl From<Map<String, Value>> for RawPayload {
    fn from(map: Map<String, Value>) -> Self {
        RawPayload::Structured(Value::Object(map))
    }
}

/// An omitted source normalizes like the empty structure.
impl<T: Into<RawPayload>> From<Option<T>> for RawPayload {
    fn from(source: Option<T>) -> Self {
        source.map(Into::into).unwrap_or_default()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("malformed payload: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("field `{field}` has an unexpected type: {source}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// A copied clipboard item as exposed to consumers of the history.
///
/// Serializes to exactly two fields, `key` and `value`; an absent field is
/// written as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CopiedContent {
    /// Numeric handle distinguishing one history item from another.
    pub key: Option<Number>,
    /// The copied text.
    pub value: Option<String>,
}

impl CopiedContent {
    pub fn new(key: impl Into<Number>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }

    /// Convenience constructor; delegates to [`CopiedContent::normalize`].
    pub fn create_from(source: impl Into<RawPayload>) -> Result<Self, NormalizeError> {
        Self::normalize(source)
    }

    /// Normalize a raw payload into a typed record.
    ///
    /// Text is parsed as JSON first. Values that are not JSON objects carry
    /// no named fields and yield a record with both fields absent.
    ///
    /// # Errors
    ///
    /// - [`NormalizeError::Malformed`] if text is not valid JSON
    /// - [`NormalizeError::InvalidField`] if `key` is not a number or
    ///   `value` is not a string
    pub fn normalize(source: impl Into<RawPayload>) -> Result<Self, NormalizeError> {
        let structured = match source.into() {
            RawPayload::Text(text) => {
                serde_json::from_str::<Value>(&text).map_err(NormalizeError::Malformed)?
            }
            RawPayload::Structured(value) => value,
        };

        let Value::Object(mut fields) = structured else {
            return Ok(Self::default());
        };

        Ok(Self {
            key: take_field(&mut fields, "key")?,
            value: take_field(&mut fields, "value")?,
        })
    }

    /// The history key this record refers to, if `key` is a non-negative
    /// integer.
    pub fn history_key(&self) -> Option<ClipKey> {
        self.key.as_ref().and_then(Number::as_u64).map(ClipKey)
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_none() && self.value.is_none()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn take_field<T: DeserializeOwned>(
    fields: &mut Map<String, Value>,
    field: &'static str,
) -> Result<Option<T>, NormalizeError> {
    match fields.remove(field) {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => serde_json::from_value(raw)
            .map(Some)
            .map_err(|source| NormalizeError::InvalidField { field, source }),
    }
}

impl TryFrom<RawPayload> for CopiedContent {
    type Error = NormalizeError;

    fn try_from(source: RawPayload) -> Result<Self, Self::Error> {
        Self::normalize(source)
    }
}

impl FromStr for CopiedContent {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s)
    }
}
