//! Collection document shapes.
//!
//! These mirror the domain records field for field but store `createdAt` as
//! a native BSON date rather than an RFC 3339 string.

use chrono::{DateTime, Utc};
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::{Assignment, Module, Record, User};

/// A record kind with a BSON document representation.
pub trait MongoRecord: Record {
    type Document: Serialize + DeserializeOwned + Unpin + Send + Sync + 'static;

    fn into_document(self) -> Self::Document;

    fn from_document(document: Self::Document) -> Self;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    pub address: String,
    pub role: String,
    pub name: String,
    pub email: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl MongoRecord for User {
    type Document = UserDocument;

    fn into_document(self) -> UserDocument {
        UserDocument {
            address: self.address().to_owned(),
            role: self.role().to_owned(),
            name: self.name().to_owned(),
            email: self.email().to_owned(),
            created_at: self.created_at(),
        }
    }

    fn from_document(document: UserDocument) -> Self {
        Self::new(
            document.address,
            document.role,
            document.name,
            document.email,
            document.created_at,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDocument {
    pub module_id: i64,
    pub name: String,
    pub description: String,
    // Older documents may lack the field entirely.
    #[serde(default)]
    pub professor_address: Option<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl MongoRecord for Module {
    type Document = ModuleDocument;

    fn into_document(self) -> ModuleDocument {
        ModuleDocument {
            module_id: self.module_id(),
            name: self.name().to_owned(),
            description: self.description().to_owned(),
            professor_address: self.professor_address().map(str::to_owned),
            created_at: self.created_at(),
        }
    }

    fn from_document(document: ModuleDocument) -> Self {
        Self::new(
            document.module_id,
            document.name,
            document.description,
            document.professor_address,
            document.created_at,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDocument {
    pub assignment_id: i64,
    pub module_id: i64,
    pub title: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl MongoRecord for Assignment {
    type Document = AssignmentDocument;

    fn into_document(self) -> AssignmentDocument {
        AssignmentDocument {
            assignment_id: self.assignment_id(),
            module_id: self.module_id(),
            title: self.title().to_owned(),
            created_at: self.created_at(),
        }
    }

    fn from_document(document: AssignmentDocument) -> Self {
        Self::new(
            document.assignment_id,
            document.module_id,
            document.title,
            document.created_at,
        )
    }
}
