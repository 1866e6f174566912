//! Project registry handlers.
//!
//! All routes here are guarded: extracting [`Identity`] verifies the bearer
//! token before the handler body runs.

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Identity, ProjectSummary};
use crate::inbound::http::error::{ApiResult, ErrorBody};
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/projects`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// List non-deleted projects, newest first.
#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (status = 200, description = "Projects", body = [ProjectSummary]),
        (status = 401, description = "Unauthenticated", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["projects"],
    operation_id = "listProjects"
)]
#[get("/projects")]
pub async fn list_projects(
    _identity: Identity,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ProjectSummary>>> {
    let projects = state.projects.list().await?;
    Ok(web::Json(projects))
}

/// Create a project. The new id is not returned.
#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created"),
        (status = 400, description = "Missing name", body = ErrorBody),
        (status = 401, description = "Unauthenticated", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["projects"],
    operation_id = "createProject"
)]
#[post("/projects")]
pub async fn create_project(
    _identity: Identity,
    state: web::Data<HttpState>,
    payload: web::Json<CreateProjectRequest>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    state
        .projects
        .create(body.name.as_deref().unwrap_or_default())
        .await?;
    Ok(HttpResponse::Created().finish())
}

/// Soft-delete a project.
///
/// Unconditionally stamps the soft-delete timestamp; unknown and
/// already-deleted ids succeed silently. Documents of the project are not
/// cascade-soft-deleted.
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    params(("id" = i32, Path, description = "Project id")),
    responses(
        (status = 204, description = "Project soft-deleted"),
        (status = 401, description = "Unauthenticated", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["projects"],
    operation_id = "deleteProject"
)]
#[delete("/projects/{id}")]
pub async fn delete_project(
    _identity: Identity,
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state.projects.soft_delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
