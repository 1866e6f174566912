//! HTTP inbound adapter exposing the REST endpoints.

use actix_web::web;

pub mod auth;
pub mod bearer;
pub mod documents;
pub mod error;
pub mod health;
pub mod projects;
#[cfg(test)]
mod flow_tests;
pub mod state;
#[cfg(test)]
pub mod test_support;

pub use error::ApiResult;

/// Mount the `/api` surface on a service config.
///
/// Shared between the production server and the handler tests so both run
/// the same routing table.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(health::health)
            .service(auth::register)
            .service(auth::login)
            .service(projects::list_projects)
            .service(projects::create_project)
            .service(projects::delete_project)
            .service(documents::list_documents)
            .service(documents::create_document)
            .service(documents::delete_document),
    );
}
