//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every handler path and the schema wrappers from
//! [`crate::inbound::http::schemas`]. The document backs Swagger UI in debug
//! builds and is printed by `cargo run --bin openapi-dump`.

use crate::inbound::http::assignments::CreateAssignmentRequest;
use crate::inbound::http::modules::CreateModuleRequest;
use crate::inbound::http::schemas::{
    AcknowledgementSchema, AssignmentSchema, ErrorCodeSchema, ErrorSchema, ModuleSchema,
    UserSchema,
};
use crate::inbound::http::users::CreateUserRequest;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Academic records backend API",
        description = "Administration of users, modules, and assignment metadata."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::modules::create_module,
        crate::inbound::http::modules::list_modules,
        crate::inbound::http::modules::delete_module,
        crate::inbound::http::assignments::create_assignment,
        crate::inbound::http::assignments::list_assignments,
        crate::inbound::http::assignments::delete_assignment,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        ModuleSchema,
        AssignmentSchema,
        AcknowledgementSchema,
        ErrorSchema,
        ErrorCodeSchema,
        CreateUserRequest,
        CreateModuleRequest,
        CreateAssignmentRequest,
    )),
    tags(
        (name = "users", description = "User administration"),
        (name = "modules", description = "Module administration"),
        (name = "assignments", description = "Assignment metadata for professors"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
