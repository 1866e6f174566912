//! Port abstraction for project persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::project::ProjectSummary;

/// Persistence errors raised by project repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectPersistenceError {
    /// Repository connection could not be established.
    #[error("project repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("project repository query failed: {message}")]
    Query { message: String },
}

impl ProjectPersistenceError {
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

/// Driven port over the projects relation.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// List projects without a soft-delete timestamp, newest first.
    async fn list_active(&self) -> Result<Vec<ProjectSummary>, ProjectPersistenceError>;

    /// Insert a project row. No uniqueness constraint applies to names.
    async fn create(&self, name: &str) -> Result<(), ProjectPersistenceError>;

    /// Stamp `deleted_at` on the given project.
    ///
    /// Updating zero rows is not an error, so deleting an unknown or
    /// already-deleted id succeeds silently.
    async fn soft_delete(&self, id: i32) -> Result<(), ProjectPersistenceError>;
}
