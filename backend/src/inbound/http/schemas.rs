//! OpenAPI schema definitions for domain types.
//!
//! Domain records do not derive `ToSchema`. The wrappers here mirror their
//! serialised shape and are registered with utoipa under the domain names.

use utoipa::ToSchema;

/// Stable machine-readable error codes returned in error responses.
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// Malformed or invalid request.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Record does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// Natural key already taken. Served with status 400.
    #[schema(rename = "conflict")]
    Conflict,
    /// Document store unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// Unexpected failure; message is redacted.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Error response envelope.
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    #[schema(example = "conflict")]
    code: ErrorCodeSchema,
    #[schema(example = "User already exists")]
    message: String,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Field-level context, e.g. `{"field": "email", "code": "invalid_email"}`.
    details: Option<serde_json::Value>,
}

/// Confirmation returned by create and delete endpoints.
#[derive(ToSchema)]
#[schema(as = Acknowledgement)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AcknowledgementSchema {
    #[schema(example = "User created successfully")]
    message: String,
}

/// Stored user.
#[derive(ToSchema)]
#[schema(as = User, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    #[schema(example = "0xA")]
    address: String,
    #[schema(example = "student")]
    role: String,
    #[schema(example = "Ann")]
    name: String,
    #[schema(example = "a@x.io")]
    email: String,
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
}

/// Stored module.
#[derive(ToSchema)]
#[schema(as = Module, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ModuleSchema {
    #[schema(example = 10)]
    module_id: i64,
    #[schema(example = "Distributed Systems")]
    name: String,
    description: String,
    /// Always `null` at creation.
    professor_address: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
}

/// Stored assignment metadata.
#[derive(ToSchema)]
#[schema(as = Assignment, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AssignmentSchema {
    #[schema(example = 1)]
    assignment_id: i64,
    #[schema(example = 10)]
    module_id: i64,
    #[schema(example = "HW1")]
    title: String,
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
}
