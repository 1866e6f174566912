//! Document entity and the registry service over it.

use std::sync::Arc;

use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::DomainError;
use crate::domain::ports::{DocumentPersistenceError, DocumentRepository};

/// Document fields returned by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DocumentSummary {
    /// Surrogate identifier assigned by storage.
    pub id: i32,
    /// Title, unique per project at the storage layer.
    #[schema(example = "Flight plan")]
    pub title: String,
}

fn map_persistence_error(error: DocumentPersistenceError, message: &'static str) -> DomainError {
    error!(%error, "document repository operation failed");
    DomainError::internal(message)
}

/// CRUD and soft-delete over documents, scoped to a parent project.
#[derive(Clone)]
pub struct DocumentRegistry {
    documents: Arc<dyn DocumentRepository>,
}

impl DocumentRegistry {
    /// Create a registry backed by the given repository port.
    pub fn new(documents: Arc<dyn DocumentRepository>) -> Self {
        Self { documents }
    }

    /// List the project's non-deleted documents, newest first.
    ///
    /// The project itself is not checked: listing documents of a deleted or
    /// unknown project returns an empty sequence, not an error.
    pub async fn list_by_project(
        &self,
        project_id: i32,
    ) -> Result<Vec<DocumentSummary>, DomainError> {
        self.documents
            .list_active_by_project(project_id)
            .await
            .map_err(|err| map_persistence_error(err, "Failed to fetch documents"))
    }

    /// Create a document under the given project.
    ///
    /// The `(project, title)` uniqueness check lives in storage, which turns
    /// a create/create race into a conflict rather than silent corruption.
    /// An unknown parent project fails the foreign key and surfaces
    /// generically as an internal error.
    ///
    /// The title is stored verbatim. Padded and unpadded variants of the
    /// same words are distinct titles for the uniqueness constraint.
    pub async fn create(&self, project_id: i32, title: &str) -> Result<(), DomainError> {
        if title.is_empty() {
            return Err(DomainError::invalid_input("Document title is required"));
        }

        self.documents
            .create(project_id, title)
            .await
            .map_err(|err| match err {
                DocumentPersistenceError::DuplicateTitle => {
                    DomainError::conflict("Document title already exists in this project")
                }
                other => map_persistence_error(other, "Failed to create document"),
            })
    }

    /// Stamp the soft-delete timestamp; a no-op for unknown or already
    /// deleted ids.
    pub async fn soft_delete(&self, id: i32) -> Result<(), DomainError> {
        self.documents
            .soft_delete(id)
            .await
            .map_err(|err| map_persistence_error(err, "Failed to delete document"))
    }
}
