//! Module administration handlers.
//!
//! ```text
//! POST   /admin/modules {"moduleId":10,"name":"Networks","description":""}
//! GET    /admin/modules
//! DELETE /admin/modules/10
//! ```

use actix_web::{Scope, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Acknowledgement, Module, NewModule};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{AcknowledgementSchema, ErrorSchema, ModuleSchema};
use crate::inbound::http::state::HttpState;

/// Request body for `POST /admin/modules`.
///
/// A professor cannot be assigned at creation; any `professorAddress` in
/// the body is ignored.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateModuleRequest {
    #[schema(example = 10)]
    pub module_id: i64,
    #[schema(example = "Distributed Systems")]
    pub name: String,
    #[schema(example = "Consensus, replication, and failure detection")]
    pub description: String,
}

impl From<CreateModuleRequest> for NewModule {
    fn from(value: CreateModuleRequest) -> Self {
        Self::new(value.module_id, value.name, value.description)
    }
}

#[utoipa::path(
    post,
    path = "/admin/modules",
    request_body = CreateModuleRequest,
    responses(
        (status = 200, description = "Module created", body = AcknowledgementSchema),
        (status = 400, description = "Malformed body or module already exists", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema)
    ),
    tags = ["modules"],
    operation_id = "createModule"
)]
pub async fn create_module(
    state: web::Data<HttpState>,
    payload: web::Json<CreateModuleRequest>,
) -> ApiResult<web::Json<Acknowledgement>> {
    let ack = state.modules.create(payload.into_inner().into()).await?;
    Ok(web::Json(ack))
}

#[utoipa::path(
    get,
    path = "/admin/modules",
    responses(
        (status = 200, description = "All modules", body = [ModuleSchema]),
        (status = 503, description = "Document store unavailable", body = ErrorSchema)
    ),
    tags = ["modules"],
    operation_id = "listModules"
)]
pub async fn list_modules(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Module>>> {
    let modules = state.modules.list(()).await?;
    Ok(web::Json(modules))
}

#[utoipa::path(
    delete,
    path = "/admin/modules/{moduleId}",
    params(("moduleId" = i64, Path, description = "Module identifier")),
    responses(
        (status = 200, description = "Module removed", body = AcknowledgementSchema),
        (status = 400, description = "Module identifier is not an integer", body = ErrorSchema),
        (status = 404, description = "Module not found", body = ErrorSchema)
    ),
    tags = ["modules"],
    operation_id = "deleteModule"
)]
pub async fn delete_module(
    state: web::Data<HttpState>,
    module_id: web::Path<i64>,
) -> ApiResult<web::Json<Acknowledgement>> {
    let ack = state.modules.delete(module_id.into_inner()).await?;
    Ok(web::Json(ack))
}

/// Routes mounted under `/admin/modules`, with or without a trailing slash.
pub fn scope() -> Scope {
    web::scope("/admin/modules")
        .service(
            web::resource(["", "/"])
                .route(web::post().to(create_module))
                .route(web::get().to(list_modules)),
        )
        .service(web::resource("/{module_id}").route(web::delete().to(delete_module)))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::Error;
    use crate::inbound::http::test_utils::MockPorts;
    use crate::inbound::http::validation::{json_config, path_config};

    async fn send(ports: MockPorts, request: actix_test::TestRequest) -> (StatusCode, Value) {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(ports.into_state()))
                .app_data(json_config())
                .app_data(path_config())
                .service(scope()),
        )
        .await;
        let response = actix_test::call_service(&app, request.to_request()).await;
        let status = response.status();
        let body: Value = actix_test::read_body_json(response).await;
        (status, body)
    }

    #[rstest]
    #[actix_web::test]
    async fn create_ignores_client_professor_address() {
        let mut ports = MockPorts::default();
        ports
            .modules
            .expect_create()
            .withf(|draft| draft.module_id() == 10)
            .times(1)
            .return_once(|_| Ok(Acknowledgement::new("Module created successfully")));

        let request = actix_test::TestRequest::post().uri("/admin/modules").set_json(json!({
            "moduleId": 10,
            "name": "Networks",
            "description": "",
            "professorAddress": "0xP",
        }));
        let (status, body) = send(ports, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Module created successfully" }));
    }

    #[rstest]
    #[actix_web::test]
    async fn create_accepts_empty_name() {
        let mut ports = MockPorts::default();
        ports
            .modules
            .expect_create()
            .with(eq(NewModule::new(10, "", "")))
            .times(1)
            .return_once(|_| Ok(Acknowledgement::new("Module created successfully")));

        let request = actix_test::TestRequest::post().uri("/admin/modules").set_json(json!({
            "moduleId": 10,
            "name": "",
            "description": "",
        }));
        let (status, _) = send(ports, request).await;

        assert_eq!(status, StatusCode::OK);
    }

    #[rstest]
    #[case(json!({ "moduleId": "ten", "name": "Networks", "description": "" }))]
    #[case(json!({ "moduleId": 10, "description": "" }))]
    #[actix_web::test]
    async fn create_rejects_invalid_bodies(#[case] payload: Value) {
        let mut ports = MockPorts::default();
        ports.modules.expect_create().never();

        let request = actix_test::TestRequest::post()
            .uri("/admin/modules")
            .set_json(payload);
        let (status, body) = send(ports, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.get("code").and_then(Value::as_str), Some("invalid_request"));
    }

    #[rstest]
    #[actix_web::test]
    async fn delete_rejects_non_integer_identifier() {
        let mut ports = MockPorts::default();
        ports.modules.expect_delete().never();

        let request = actix_test::TestRequest::delete().uri("/admin/modules/abc");
        let (status, body) = send(ports, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body.pointer("/details/code").and_then(Value::as_str),
            Some("invalid_path")
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn delete_reports_missing_module() {
        let mut ports = MockPorts::default();
        ports
            .modules
            .expect_delete()
            .with(eq(99_i64))
            .times(1)
            .return_once(|_| Err(Error::not_found("Module not found")));

        let request = actix_test::TestRequest::delete().uri("/admin/modules/99");
        let (status, body) = send(ports, request).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body.get("message").and_then(Value::as_str),
            Some("Module not found")
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn list_returns_every_module() {
        let mut ports = MockPorts::default();
        ports
            .modules
            .expect_list()
            .times(1)
            .return_once(|()| Ok(Vec::new()));

        let (status, body) = send(ports, actix_test::TestRequest::get().uri("/admin/modules")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }
}
