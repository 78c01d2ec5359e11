//! Assignment metadata records.
//!
//! `moduleId` references a module but is not checked against the modules
//! collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{FieldFilter, Record};

/// Input for creating an assignment. The title may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignment {
    assignment_id: i64,
    module_id: i64,
    title: String,
}

impl NewAssignment {
    pub fn new(assignment_id: i64, module_id: i64, title: impl Into<String>) -> Self {
        Self {
            assignment_id,
            module_id,
            title: title.into(),
        }
    }

    pub fn assignment_id(&self) -> i64 {
        self.assignment_id
    }
}

/// Stored assignment as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    assignment_id: i64,
    module_id: i64,
    title: String,
    created_at: DateTime<Utc>,
}

impl Assignment {
    pub fn new(
        assignment_id: i64,
        module_id: i64,
        title: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            assignment_id,
            module_id,
            title: title.into(),
            created_at,
        }
    }

    pub fn assignment_id(&self) -> i64 {
        self.assignment_id
    }

    pub fn module_id(&self) -> i64 {
        self.module_id
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Assignments are always listed per module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentFilter {
    pub module_id: i64,
}

impl Record for Assignment {
    type Draft = NewAssignment;
    type Key = i64;
    type ListFilter = AssignmentFilter;

    const COLLECTION: &'static str = "assignments";
    const KEY_FIELD: &'static str = "assignmentId";
    const LABEL: &'static str = "Assignment";

    fn from_draft(draft: NewAssignment, created_at: DateTime<Utc>) -> Self {
        Self {
            assignment_id: draft.assignment_id,
            module_id: draft.module_id,
            title: draft.title,
            created_at,
        }
    }

    fn draft_key(draft: &NewAssignment) -> i64 {
        draft.assignment_id
    }

    fn key(&self) -> i64 {
        self.assignment_id
    }

    fn list_filter(filter: AssignmentFilter) -> Option<FieldFilter> {
        Some(FieldFilter::eq("moduleId", filter.module_id))
    }

    fn created_message() -> String {
        "Assignment metadata saved".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldValue;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case(" ")]
    fn empty_title_is_kept(#[case] title: &str) {
        let assignment = Assignment::from_draft(NewAssignment::new(1, 10, title), Utc::now());
        assert_eq!(assignment.title(), title);
    }

    #[rstest]
    fn filter_targets_module_id() {
        let filter = Assignment::list_filter(AssignmentFilter { module_id: 10 });
        assert_eq!(
            filter,
            Some(FieldFilter {
                field: "moduleId",
                value: FieldValue::Integer(10),
            })
        );
    }

    #[rstest]
    fn creation_message_keeps_metadata_wording() {
        assert_eq!(Assignment::created_message(), "Assignment metadata saved");
        assert_eq!(Assignment::removed_message(), "Assignment removed successfully");
    }

    #[rstest]
    fn from_draft_copies_fields() {
        let created_at = Utc::now();
        let draft = NewAssignment::new(1, 10, "HW1");
        let assignment = Assignment::from_draft(draft, created_at);

        assert_eq!(assignment.assignment_id(), 1);
        assert_eq!(assignment.module_id(), 10);
        assert_eq!(assignment.title(), "HW1");
        assert_eq!(assignment.created_at(), created_at);
    }
}
