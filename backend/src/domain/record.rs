//! Shared vocabulary for the record kinds managed by the admin backend.
//!
//! Users, modules, and assignments follow the same lifecycle: created once
//! under a natural key, listed with an optional equality filter, and deleted
//! by key. [`Record`] captures what differs between them so one service and
//! one store port can serve all three.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Scalar value used in equality filters against the document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// `field == value` predicate over stored documents.
///
/// # Examples
/// ```
/// use academic_backend::domain::{FieldFilter, FieldValue};
///
/// let filter = FieldFilter::eq("moduleId", 10_i64);
/// assert_eq!(filter.field, "moduleId");
/// assert_eq!(filter.value, FieldValue::Integer(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub field: &'static str,
    pub value: FieldValue,
}

impl FieldFilter {
    pub fn eq(field: &'static str, value: impl Into<FieldValue>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// A record kind stored in its own collection under a natural key.
///
/// Implementors serialise with the camelCase field names used by the
/// collections and the HTTP API. `createdAt` is assigned by the service and
/// never taken from client input.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Validated creation input.
    type Draft: Send + Sync + 'static;
    /// Natural key value.
    type Key: Clone + fmt::Display + Into<FieldValue> + Send + Sync + 'static;
    /// Query accepted by `list`.
    type ListFilter: Send + Sync + 'static;

    /// Collection name in the document store.
    const COLLECTION: &'static str;
    /// Stored field holding the natural key.
    const KEY_FIELD: &'static str;
    /// Human label used in response messages.
    const LABEL: &'static str;

    /// Build the stored record from validated input and the creation time.
    fn from_draft(draft: Self::Draft, created_at: DateTime<Utc>) -> Self;

    fn draft_key(draft: &Self::Draft) -> Self::Key;

    fn key(&self) -> Self::Key;

    /// Translate a list query into a store filter; `None` lists everything.
    fn list_filter(filter: Self::ListFilter) -> Option<FieldFilter>;

    fn created_message() -> String {
        format!("{} created successfully", Self::LABEL)
    }

    fn exists_message() -> String {
        format!("{} already exists", Self::LABEL)
    }

    fn not_found_message() -> String {
        format!("{} not found", Self::LABEL)
    }

    fn removed_message() -> String {
        format!("{} removed successfully", Self::LABEL)
    }
}

/// Confirmation returned by create and delete operations.
///
/// Serialised as `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub message: String,
}

impl Acknowledgement {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
