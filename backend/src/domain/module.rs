//! Module (course) records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{FieldFilter, Record};

/// Input for creating a module.
///
/// Name and description may be empty. A professor is never assigned at
/// creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewModule {
    module_id: i64,
    name: String,
    description: String,
}

impl NewModule {
    pub fn new(module_id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            module_id,
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn module_id(&self) -> i64 {
        self.module_id
    }
}

/// Stored module as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    module_id: i64,
    name: String,
    description: String,
    /// Always `null` until a professor is assigned.
    professor_address: Option<String>,
    created_at: DateTime<Utc>,
}

impl Module {
    /// Rebuild a stored module; no validation is applied.
    pub fn new(
        module_id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        professor_address: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            module_id,
            name: name.into(),
            description: description.into(),
            professor_address,
            created_at,
        }
    }

    pub fn module_id(&self) -> i64 {
        self.module_id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    pub fn professor_address(&self) -> Option<&str> {
        self.professor_address.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Record for Module {
    type Draft = NewModule;
    type Key = i64;
    type ListFilter = ();

    const COLLECTION: &'static str = "modules";
    const KEY_FIELD: &'static str = "moduleId";
    const LABEL: &'static str = "Module";

    fn from_draft(draft: NewModule, created_at: DateTime<Utc>) -> Self {
        Self {
            module_id: draft.module_id,
            name: draft.name,
            description: draft.description,
            professor_address: None,
            created_at,
        }
    }

    fn draft_key(draft: &NewModule) -> i64 {
        draft.module_id
    }

    fn key(&self) -> i64 {
        self.module_id
    }

    fn list_filter((): ()) -> Option<FieldFilter> {
        None
    }
}
