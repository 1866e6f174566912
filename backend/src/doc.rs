//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated specification for the REST API. The
//! bearer scheme is applied globally; the register, login, and health paths
//! opt out with an empty `security([])` list.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{DocumentSummary, ProjectSummary, UserSummary};
use crate::inbound::http::auth::{LoginRequest, LoginResponse, RegisterRequest};
use crate::inbound::http::documents::CreateDocumentRequest;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::projects::CreateProjectRequest;

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Token issued by POST /api/auth/login."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Document organiser API",
        description = "Bearer-authenticated project and document management."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerToken" = [])),
    paths(
        crate::inbound::http::health::health,
        crate::inbound::http::auth::register,
        crate::inbound::http::auth::login,
        crate::inbound::http::projects::list_projects,
        crate::inbound::http::projects::create_project,
        crate::inbound::http::projects::delete_project,
        crate::inbound::http::documents::list_documents,
        crate::inbound::http::documents::create_document,
        crate::inbound::http::documents::delete_document,
    ),
    components(schemas(
        ErrorBody,
        UserSummary,
        ProjectSummary,
        DocumentSummary,
        RegisterRequest,
        LoginRequest,
        LoginResponse,
        CreateProjectRequest,
        CreateDocumentRequest,
    ))
)]
pub struct ApiDoc;
