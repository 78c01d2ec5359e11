//! User administration handlers.
//!
//! ```text
//! POST   /admin/users {"address":"0xA","role":"student","name":"Ann","email":"a@x.io"}
//! GET    /admin/users?role=student
//! DELETE /admin/users/0xA
//! ```

use actix_web::{Scope, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Acknowledgement, NewUser, User, UserFilter, UserValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{AcknowledgementSchema, ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::user_validation_error;

/// Request body for `POST /admin/users`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[schema(example = "0xA")]
    pub address: String,
    #[schema(example = "student")]
    pub role: String,
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = "a@x.io")]
    pub email: String,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = UserValidationError;

    fn try_from(value: CreateUserRequest) -> Result<Self, Self::Error> {
        Self::try_new(value.address, value.role, value.name, value.email)
    }
}

/// Query string for `GET /admin/users`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Only return users with this role. Empty means no filter.
    pub role: Option<String>,
}

/// Create a user keyed by wallet address.
#[utoipa::path(
    post,
    path = "/admin/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = AcknowledgementSchema),
        (status = 400, description = "Invalid input or user already exists", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<web::Json<Acknowledgement>> {
    let draft = NewUser::try_from(payload.into_inner()).map_err(user_validation_error)?;
    let ack = state.users.create(draft).await?;
    Ok(web::Json(ack))
}

/// List users, optionally filtered by role.
#[utoipa::path(
    get,
    path = "/admin/users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "Users", body = [UserSchema]),
        (status = 400, description = "Invalid query", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
pub async fn list_users(
    state: web::Data<HttpState>,
    query: web::Query<ListUsersQuery>,
) -> ApiResult<web::Json<Vec<User>>> {
    let filter = UserFilter {
        role: query.into_inner().role,
    };
    let users = state.users.list(filter).await?;
    Ok(web::Json(users))
}

/// Delete a user by address.
#[utoipa::path(
    delete,
    path = "/admin/users/{address}",
    params(("address" = String, Path, description = "Wallet address of the user")),
    responses(
        (status = 200, description = "User removed", body = AcknowledgementSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
pub async fn delete_user(
    state: web::Data<HttpState>,
    address: web::Path<String>,
) -> ApiResult<web::Json<Acknowledgement>> {
    let ack = state.users.delete(address.into_inner()).await?;
    Ok(web::Json(ack))
}

/// Routes mounted under `/admin/users`, with or without a trailing slash.
pub fn scope() -> Scope {
    web::scope("/admin/users")
        .service(
            web::resource(["", "/"])
                .route(web::post().to(create_user))
                .route(web::get().to(list_users)),
        )
        .service(web::resource("/{address}").route(web::delete().to(delete_user)))
}
