//! Server construction and wiring.
//!
//! Builds the HTTP state from the configured pool, mounts the `/api` scope,
//! and (in debug builds) serves Swagger UI at `/docs`.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::{AuthService, DocumentRegistry, ProjectRegistry};
use crate::inbound::http::configure_api;
use crate::inbound::http::state::HttpState;
use crate::outbound::auth::{Argon2PasswordHasher, JwtTokenService};
use crate::outbound::persistence::{
    DieselDocumentRepository, DieselProjectRepository, DieselUserRepository,
};

/// Wire the production adapters into an [`HttpState`].
fn build_http_state(config: &ServerConfig) -> HttpState {
    let users = Arc::new(DieselUserRepository::new(config.db_pool.clone()));
    let projects = Arc::new(DieselProjectRepository::new(config.db_pool.clone()));
    let documents = Arc::new(DieselDocumentRepository::new(config.db_pool.clone()));
    let hasher = Arc::new(Argon2PasswordHasher);
    let tokens = Arc::new(JwtTokenService::new(&config.token_secret));

    HttpState::new(
        AuthService::new(users, hasher, tokens.clone()),
        ProjectRegistry::new(projects),
        DocumentRegistry::new(documents),
        tokens,
    )
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    let bind_addr = config.bind_addr;

    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(http_state.clone())
            .configure(configure_api);

        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind(bind_addr)?
    .run();

    Ok(server)
}
