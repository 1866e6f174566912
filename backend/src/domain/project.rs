//! Project entity and the registry service over it.

use std::sync::Arc;

use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::DomainError;
use crate::domain::ports::{ProjectPersistenceError, ProjectRepository};

/// Project fields returned by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProjectSummary {
    /// Surrogate identifier assigned by storage.
    pub id: i32,
    /// Project name; duplicates are permitted.
    #[schema(example = "Apollo")]
    pub name: String,
}

fn map_persistence_error(error: ProjectPersistenceError, message: &'static str) -> DomainError {
    error!(%error, "project repository operation failed");
    DomainError::internal(message)
}

/// CRUD and soft-delete over project entities.
///
/// Soft-deleted projects are excluded from listings but their documents are
/// not cascade-soft-deleted; they stay independently queryable.
#[derive(Clone)]
pub struct ProjectRegistry {
    projects: Arc<dyn ProjectRepository>,
}

impl ProjectRegistry {
    /// Create a registry backed by the given repository port.
    pub fn new(projects: Arc<dyn ProjectRepository>) -> Self {
        Self { projects }
    }

    /// List non-deleted projects, newest first.
    pub async fn list(&self) -> Result<Vec<ProjectSummary>, DomainError> {
        self.projects
            .list_active()
            .await
            .map_err(|err| map_persistence_error(err, "Failed to fetch projects"))
    }

    /// Create a project. The id is not returned to the caller.
    ///
    /// The name is stored verbatim; only a missing or empty string is
    /// rejected, so a whitespace-only name is a valid project.
    pub async fn create(&self, name: &str) -> Result<(), DomainError> {
        if name.is_empty() {
            return Err(DomainError::invalid_input("Project name is required"));
        }

        self.projects
            .create(name)
            .await
            .map_err(|err| map_persistence_error(err, "Failed to create project"))
    }

    /// Stamp the soft-delete timestamp; a no-op for unknown or already
    /// deleted ids.
    pub async fn soft_delete(&self, id: i32) -> Result<(), DomainError> {
        self.projects
            .soft_delete(id)
            .await
            .map_err(|err| map_persistence_error(err, "Failed to delete project"))
    }
}
