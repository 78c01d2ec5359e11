//! Tests for user validation and record mapping.

use super::*;
use crate::domain::FieldValue;
use chrono::TimeZone;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 2, 8, 30, 0)
        .single()
        .expect("valid timestamp")
}

#[fixture]
fn ann() -> NewUser {
    NewUser::try_new("0xA", "student", "Ann", "a@x.io").expect("valid user")
}

#[rstest]
#[case("a@x")]
#[case("ann at x.io")]
#[case("")]
fn rejects_invalid_email(#[case] email: &str) {
    let result = NewUser::try_new("0xA", "student", "Ann", email);
    assert_eq!(result, Err(UserValidationError::InvalidEmail));
}

#[rstest]
#[case("", "student", "Ann")]
#[case("0xA", "", "Ann")]
#[case("0xA", "student", "")]
#[case("  ", "  ", "  ")]
fn accepts_empty_text_fields(#[case] address: &str, #[case] role: &str, #[case] name: &str) {
    let user = NewUser::try_new(address, role, name, "a@x.io").expect("valid user");

    assert_eq!(user.address(), address);
    assert_eq!(user.role(), role);
    assert_eq!(user.name(), name);
}

#[rstest]
fn validation_errors_name_their_field() {
    assert_eq!(UserValidationError::InvalidEmail.field(), "email");
}

#[rstest]
fn from_draft_keeps_input_and_stamps_time(ann: NewUser, created_at: DateTime<Utc>) {
    let user = User::from_draft(ann, created_at);

    assert_eq!(user.address(), "0xA");
    assert_eq!(user.role(), "student");
    assert_eq!(user.name(), "Ann");
    assert_eq!(user.email(), "a@x.io");
    assert_eq!(user.created_at(), created_at);
    assert_eq!(user.key(), "0xA");
}

#[rstest]
fn serialises_with_camel_case_fields(ann: NewUser, created_at: DateTime<Utc>) {
    let user = User::from_draft(ann, created_at);
    let value = serde_json::to_value(&user).expect("serialise user");

    assert_eq!(
        value,
        json!({
            "address": "0xA",
            "role": "student",
            "name": "Ann",
            "email": "a@x.io",
            "createdAt": "2024-09-02T08:30:00Z",
        })
    );
}

#[rstest]
#[case(UserFilter { role: None }, None)]
#[case(UserFilter { role: Some(String::new()) }, None)]
#[case(
    UserFilter { role: Some("professor".to_owned()) },
    Some(FieldFilter { field: "role", value: FieldValue::Text("professor".to_owned()) })
)]
fn list_filter_ignores_empty_role(#[case] filter: UserFilter, #[case] expected: Option<FieldFilter>) {
    assert_eq!(User::list_filter(filter), expected);
}

#[rstest]
fn messages_use_the_user_label() {
    assert_eq!(User::created_message(), "User created successfully");
    assert_eq!(User::exists_message(), "User already exists");
    assert_eq!(User::not_found_message(), "User not found");
    assert_eq!(User::removed_message(), "User removed successfully");
}
