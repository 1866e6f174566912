//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain services and ports, and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::TokenService;
use crate::domain::{AuthService, DocumentRegistry, ProjectRegistry};

/// Dependency bundle for HTTP handlers.
///
/// The token service appears twice in spirit: [`AuthService`] issues
/// assertions at login, while the guard extractor verifies them on every
/// protected call through the handle kept here.
#[derive(Clone)]
pub struct HttpState {
    pub auth: AuthService,
    pub projects: ProjectRegistry,
    pub documents: DocumentRegistry,
    pub tokens: Arc<dyn TokenService>,
}

impl HttpState {
    /// Bundle the wired services for handler registration.
    pub fn new(
        auth: AuthService,
        projects: ProjectRegistry,
        documents: DocumentRegistry,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            auth,
            projects,
            documents,
            tokens,
        }
    }
}
