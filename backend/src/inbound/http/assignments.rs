//! Assignment metadata handlers.
//!
//! ```text
//! POST   /professor/assignments {"assignmentId":1,"moduleId":10,"title":"HW1"}
//! GET    /professor/assignments?moduleId=10
//! DELETE /professor/assignments/1
//! ```

use actix_web::{Scope, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Acknowledgement, Assignment, AssignmentFilter, NewAssignment};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{AcknowledgementSchema, AssignmentSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Request body for `POST /professor/assignments`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignmentRequest {
    #[schema(example = 1)]
    pub assignment_id: i64,
    /// Not checked against existing modules.
    #[schema(example = 10)]
    pub module_id: i64,
    #[schema(example = "HW1")]
    pub title: String,
}

impl From<CreateAssignmentRequest> for NewAssignment {
    fn from(value: CreateAssignmentRequest) -> Self {
        Self::new(value.assignment_id, value.module_id, value.title)
    }
}

/// Query string for `GET /professor/assignments`.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ListAssignmentsQuery {
    /// Module whose assignments are listed.
    pub module_id: i64,
}

#[utoipa::path(
    post,
    path = "/professor/assignments",
    request_body = CreateAssignmentRequest,
    responses(
        (status = 200, description = "Assignment metadata saved", body = AcknowledgementSchema),
        (status = 400, description = "Malformed body or assignment already exists", body = ErrorSchema),
        (status = 503, description = "Document store unavailable", body = ErrorSchema)
    ),
    tags = ["assignments"],
    operation_id = "createAssignment"
)]
pub async fn create_assignment(
    state: web::Data<HttpState>,
    payload: web::Json<CreateAssignmentRequest>,
) -> ApiResult<web::Json<Acknowledgement>> {
    let ack = state.assignments.create(payload.into_inner().into()).await?;
    Ok(web::Json(ack))
}

#[utoipa::path(
    get,
    path = "/professor/assignments",
    params(ListAssignmentsQuery),
    responses(
        (status = 200, description = "Assignments for the module", body = [AssignmentSchema]),
        (status = 400, description = "moduleId missing or not an integer", body = ErrorSchema)
    ),
    tags = ["assignments"],
    operation_id = "listAssignments"
)]
pub async fn list_assignments(
    state: web::Data<HttpState>,
    query: web::Query<ListAssignmentsQuery>,
) -> ApiResult<web::Json<Vec<Assignment>>> {
    let filter = AssignmentFilter {
        module_id: query.module_id,
    };
    let assignments = state.assignments.list(filter).await?;
    Ok(web::Json(assignments))
}

#[utoipa::path(
    delete,
    path = "/professor/assignments/{assignmentId}",
    params(("assignmentId" = i64, Path, description = "Assignment identifier")),
    responses(
        (status = 200, description = "Assignment removed", body = AcknowledgementSchema),
        (status = 400, description = "Assignment identifier is not an integer", body = ErrorSchema),
        (status = 404, description = "Assignment not found", body = ErrorSchema)
    ),
    tags = ["assignments"],
    operation_id = "deleteAssignment"
)]
pub async fn delete_assignment(
    state: web::Data<HttpState>,
    assignment_id: web::Path<i64>,
) -> ApiResult<web::Json<Acknowledgement>> {
    let ack = state.assignments.delete(assignment_id.into_inner()).await?;
    Ok(web::Json(ack))
}

/// Routes mounted under `/professor/assignments`, with or without a trailing slash.
pub fn scope() -> Scope {
    web::scope("/professor/assignments")
        .service(
            web::resource(["", "/"])
                .route(web::post().to(create_assignment))
                .route(web::get().to(list_assignments)),
        )
        .service(web::resource("/{assignment_id}").route(web::delete().to(delete_assignment)))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use chrono::Utc;
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::inbound::http::test_utils::MockPorts;
    use crate::inbound::http::validation::{json_config, query_config};

    async fn send(ports: MockPorts, request: actix_test::TestRequest) -> (StatusCode, Value) {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(ports.into_state()))
                .app_data(json_config())
                .app_data(query_config())
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
    async fn create_reports_metadata_saved() {
        let mut ports = MockPorts::default();
        ports
            .assignments
            .expect_create()
            .withf(|draft| draft.assignment_id() == 1)
            .times(1)
            .return_once(|_| Ok(Acknowledgement::new("Assignment metadata saved")));

        let request = actix_test::TestRequest::post()
            .uri("/professor/assignments")
            .set_json(json!({ "assignmentId": 1, "moduleId": 10, "title": "HW1" }));
        let (status, body) = send(ports, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Assignment metadata saved" }));
    }

    #[rstest]
    #[actix_web::test]
    async fn create_accepts_empty_title() {
        let mut ports = MockPorts::default();
        ports
            .assignments
            .expect_create()
            .with(eq(NewAssignment::new(2, 10, "")))
            .times(1)
            .return_once(|_| Ok(Acknowledgement::new("Assignment metadata saved")));

        let request = actix_test::TestRequest::post()
            .uri("/professor/assignments")
            .set_json(json!({ "assignmentId": 2, "moduleId": 10, "title": "" }));
        let (status, _) = send(ports, request).await;

        assert_eq!(status, StatusCode::OK);
    }

    #[rstest]
    #[actix_web::test]
    async fn list_filters_by_module_id() {
        let created_at = Utc::now();
        let mut ports = MockPorts::default();
        ports
            .assignments
            .expect_list()
            .with(eq(AssignmentFilter { module_id: 10 }))
            .times(1)
            .return_once(move |_| Ok(vec![Assignment::new(1, 10, "HW1", created_at)]));

        let request = actix_test::TestRequest::get().uri("/professor/assignments?moduleId=10");
        let (status, body) = send(ports, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body.pointer("/0/title").and_then(Value::as_str),
            Some("HW1")
        );
        assert_eq!(body.pointer("/0/moduleId").and_then(Value::as_i64), Some(10));
    }

    #[rstest]
    #[case("/professor/assignments")]
    #[case("/professor/assignments?moduleId=abc")]
    #[actix_web::test]
    async fn list_requires_integer_module_id(#[case] uri: &str) {
        let mut ports = MockPorts::default();
        ports.assignments.expect_list().never();

        let (status, body) = send(ports, actix_test::TestRequest::get().uri(uri)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body.pointer("/details/code").and_then(Value::as_str),
            Some("invalid_query")
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn delete_acknowledges_removal() {
        let mut ports = MockPorts::default();
        ports
            .assignments
            .expect_delete()
            .with(eq(1_i64))
            .times(1)
            .return_once(|_| Ok(Acknowledgement::new("Assignment removed successfully")));

        let request = actix_test::TestRequest::delete().uri("/professor/assignments/1");
        let (status, body) = send(ports, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Assignment removed successfully" }));
    }
}
