//! Document registry handlers, scoped to a parent project.

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DocumentSummary, Identity};
use crate::inbound::http::error::{ApiResult, ErrorBody};
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/projects/{id}/documents`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateDocumentRequest {
    #[serde(default)]
    pub title: Option<String>,
}

/// List the project's non-deleted documents, newest first.
///
/// The project itself is not checked; a deleted or unknown project yields
/// an empty list.
#[utoipa::path(
    get,
    path = "/api/projects/{id}/documents",
    params(("id" = i32, Path, description = "Parent project id")),
    responses(
        (status = 200, description = "Documents", body = [DocumentSummary]),
        (status = 401, description = "Unauthenticated", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["documents"],
    operation_id = "listDocuments"
)]
#[get("/projects/{id}/documents")]
pub async fn list_documents(
    _identity: Identity,
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Vec<DocumentSummary>>> {
    let documents = state.documents.list_by_project(path.into_inner()).await?;
    Ok(web::Json(documents))
}

/// Create a document under the project. The new id is not returned.
#[utoipa::path(
    post,
    path = "/api/projects/{id}/documents",
    params(("id" = i32, Path, description = "Parent project id")),
    request_body = CreateDocumentRequest,
    responses(
        (status = 201, description = "Document created"),
        (status = 400, description = "Missing title", body = ErrorBody),
        (status = 401, description = "Unauthenticated", body = ErrorBody),
        (status = 409, description = "Title already exists in project", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["documents"],
    operation_id = "createDocument"
)]
#[post("/projects/{id}/documents")]
pub async fn create_document(
    _identity: Identity,
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<CreateDocumentRequest>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    state
        .documents
        .create(path.into_inner(), body.title.as_deref().unwrap_or_default())
        .await?;
    Ok(HttpResponse::Created().finish())
}

/// Soft-delete a document; unknown and already-deleted ids succeed
/// silently.
#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    params(("id" = i32, Path, description = "Document id")),
    responses(
        (status = 204, description = "Document soft-deleted"),
        (status = 401, description = "Unauthenticated", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["documents"],
    operation_id = "deleteDocument"
)]
#[delete("/documents/{id}")]
pub async fn delete_document(
    _identity: Identity,
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    state.documents.soft_delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
