//! PostgreSQL-backed `DocumentRepository` implementation using Diesel ORM.
//!
//! The `(project_id, title)` unique constraint covers soft-deleted rows too,
//! so reusing a retired title still surfaces as `DuplicateTitle`. Listing
//! filters on the requested project and ignores whether that project itself
//! still exists; an unknown or deleted project simply yields no rows.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::DocumentSummary;
use crate::domain::ports::{DocumentPersistenceError, DocumentRepository};

use super::models::{DocumentRow, NewDocumentRow};
use super::pool::{DbPool, PoolError};
use super::schema::documents;

/// Diesel-backed implementation of the `DocumentRepository` port.
#[derive(Clone)]
pub struct DieselDocumentRepository {
    pool: DbPool,
}

impl DieselDocumentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> DocumentPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            DocumentPersistenceError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> DocumentPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(%other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            DocumentPersistenceError::DuplicateTitle
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DocumentPersistenceError::connection("database connection error")
        }
        // Includes foreign key violations for documents added to a project id
        // that was never created.
        _ => DocumentPersistenceError::query("database error"),
    }
}

#[async_trait]
impl DocumentRepository for DieselDocumentRepository {
    async fn list_active_by_project(
        &self,
        project_id: i32,
    ) -> Result<Vec<DocumentSummary>, DocumentPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<DocumentRow> = documents::table
            .filter(documents::project_id.eq(project_id))
            .filter(documents::deleted_at.is_null())
            .order(documents::created_at.desc())
            .select(DocumentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|row| DocumentSummary {
                id: row.id,
                title: row.title,
            })
            .collect())
    }

    async fn create(&self, project_id: i32, title: &str) -> Result<(), DocumentPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(documents::table)
            .values(&NewDocumentRow { project_id, title })
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(())
    }

    async fn soft_delete(&self, id: i32) -> Result<(), DocumentPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::update(documents::table.filter(documents::id.eq(id)))
            .set(documents::deleted_at.eq(Utc::now()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(())
    }
}
