//! User records.
//!
//! Users are keyed by their wallet `address`. The role is free text; the
//! admin frontend decides which roles exist.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::record::{FieldFilter, Record};

/// Validation errors returned by [`NewUser::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserValidationError {
    InvalidEmail,
}

impl UserValidationError {
    /// Request field the error refers to.
    pub fn field(self) -> &'static str {
        match self {
            Self::InvalidEmail => "email",
        }
    }
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail => write!(f, "email must be a valid email address"),
        }
    }
}

impl std::error::Error for UserValidationError {}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Validated input for creating a user.
///
/// ## Invariants
/// - `email` has the shape `local@domain.tld`.
/// - `address`, `role`, and `name` are stored as given, empty strings included.
///
/// # Examples
/// ```
/// use academic_backend::domain::NewUser;
///
/// let user = NewUser::try_new("0xA", "student", "Ann", "a@x.io").expect("valid user");
/// assert_eq!(user.address(), "0xA");
/// assert!(NewUser::try_new("0xA", "student", "Ann", "not-an-email").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    address: String,
    role: String,
    name: String,
    email: String,
}

impl NewUser {
    pub fn try_new(
        address: impl Into<String>,
        role: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let email = email.into();
        if !email_regex().is_match(&email) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self {
            address: address.into(),
            role: role.into(),
            name: name.into(),
            email,
        })
    }

    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    pub fn role(&self) -> &str {
        self.role.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Stored user as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    address: String,
    role: String,
    name: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl User {
    /// Rebuild a stored user; no validation is applied.
    pub fn new(
        address: impl Into<String>,
        role: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            address: address.into(),
            role: role.into(),
            name: name.into(),
            email: email.into(),
            created_at,
        }
    }

    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    pub fn role(&self) -> &str {
        self.role.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Optional role filter for listing users.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub role: Option<String>,
}

impl Record for User {
    type Draft = NewUser;
    type Key = String;
    type ListFilter = UserFilter;

    const COLLECTION: &'static str = "users";
    const KEY_FIELD: &'static str = "address";
    const LABEL: &'static str = "User";

    fn from_draft(draft: NewUser, created_at: DateTime<Utc>) -> Self {
        let NewUser {
            address,
            role,
            name,
            email,
        } = draft;
        Self {
            address,
            role,
            name,
            email,
            created_at,
        }
    }

    fn draft_key(draft: &NewUser) -> String {
        draft.address.clone()
    }

    fn key(&self) -> String {
        self.address.clone()
    }

    fn list_filter(filter: UserFilter) -> Option<FieldFilter> {
        // An empty `role` query value behaves like no filter at all.
        filter
            .role
            .filter(|role| !role.is_empty())
            .map(|role| FieldFilter::eq("role", role))
    }
}

#[cfg(test)]
mod tests;
