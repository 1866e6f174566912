//! Port abstraction for document persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::document::DocumentSummary;

/// Persistence errors raised by document repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentPersistenceError {
    /// The `(project_id, title)` uniqueness constraint rejected the insert.
    ///
    /// The stored constraint is unconditional, so a soft-deleted document's
    /// title also triggers this variant.
    #[error("document title already taken in project")]
    DuplicateTitle,
    /// Repository connection could not be established.
    #[error("document repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution, including foreign-key
    /// violations against an unknown parent project.
    #[error("document repository query failed: {message}")]
    Query { message: String },
}

impl DocumentPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Driven port over the documents relation.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// List the project's documents without a soft-delete timestamp, newest
    /// first.
    ///
    /// The parent project is not checked; an unknown or soft-deleted parent
    /// yields an empty list rather than an error.
    async fn list_active_by_project(
        &self,
        project_id: i32,
    ) -> Result<Vec<DocumentSummary>, DocumentPersistenceError>;

    /// Insert a document row under the given project.
    async fn create(&self, project_id: i32, title: &str)
    -> Result<(), DocumentPersistenceError>;

    /// Stamp `deleted_at` on the given document. Idempotent, as for
    /// projects.
    async fn soft_delete(&self, id: i32) -> Result<(), DocumentPersistenceError>;
}
