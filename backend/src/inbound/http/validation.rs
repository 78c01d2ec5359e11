//! Request validation helpers for inbound HTTP adapters.
//!
//! Extractor failures (malformed JSON, missing query parameters, non-numeric
//! path segments) and user email validation failures all surface as
//! `invalid_request` errors carrying `{field, code}` details where known.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use serde_json::json;

use crate::domain::{Error, UserValidationError};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    InvalidEmail,
    MalformedBody,
    InvalidQuery,
    InvalidPath,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidEmail => "invalid_email",
            Self::MalformedBody => "malformed_body",
            Self::InvalidQuery => "invalid_query",
            Self::InvalidPath => "invalid_path",
        }
    }
}

fn field_error(field: &str, message: impl Into<String>, code: ValidationCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": code.as_str(),
    }))
}

fn request_error(message: impl Into<String>, code: ValidationCode) -> Error {
    Error::invalid_request(message).with_details(json!({ "code": code.as_str() }))
}

pub(crate) fn user_validation_error(error: UserValidationError) -> Error {
    let code = match error {
        UserValidationError::InvalidEmail => ValidationCode::InvalidEmail,
    };
    field_error(error.field(), error.to_string(), code)
}

fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    request_error(
        format!("invalid request body: {error}"),
        ValidationCode::MalformedBody,
    )
    .into()
}

fn query_error_handler(error: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    request_error(
        format!("invalid query parameters: {error}"),
        ValidationCode::InvalidQuery,
    )
    .into()
}

fn path_error_handler(error: PathError, _req: &HttpRequest) -> actix_web::Error {
    request_error(
        format!("invalid path parameter: {error}"),
        ValidationCode::InvalidPath,
    )
    .into()
}

/// Extractor configuration routing payload errors through the error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error_handler)
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error_handler)
}
