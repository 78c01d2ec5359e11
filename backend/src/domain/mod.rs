//! Domain primitives, record kinds, and the record service.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `Record`: what differs between users, modules, and assignments.
//! - `RecordService`: generic create/list/delete over a `RecordStore`.
//! - `TraceId`: request correlation identifier in task-local storage.

pub mod assignment;
pub mod error;
pub mod module;
pub mod ports;
pub mod record;
pub mod record_service;
pub mod trace_id;
pub mod user;

pub use self::assignment::{Assignment, AssignmentFilter, NewAssignment};
pub use self::error::{
    DomainError, DomainError as Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER,
};
pub use self::module::{Module, NewModule};
pub use self::record::{Acknowledgement, FieldFilter, FieldValue, Record};
pub use self::record_service::RecordService;
pub use self::trace_id::TraceId;
pub use self::user::{NewUser, User, UserFilter, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use academic_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("User not found"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
