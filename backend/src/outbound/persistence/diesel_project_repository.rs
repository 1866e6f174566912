//! PostgreSQL-backed `ProjectRepository` implementation using Diesel ORM.
//!
//! Projects are retired by stamping `deleted_at`; listing filters those rows
//! out and deletion is a plain `UPDATE`, so deleting an unknown id touches
//! zero rows and succeeds.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ProjectSummary;
use crate::domain::ports::{ProjectPersistenceError, ProjectRepository};

use super::models::{NewProjectRow, ProjectRow};
use super::pool::{DbPool, PoolError};
use super::schema::projects;

/// Diesel-backed implementation of the `ProjectRepository` port.
#[derive(Clone)]
pub struct DieselProjectRepository {
    pool: DbPool,
}

impl DieselProjectRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ProjectPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            ProjectPersistenceError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> ProjectPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(%other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ProjectPersistenceError::connection("database connection error")
        }
        _ => ProjectPersistenceError::query("database error"),
    }
}

#[async_trait]
impl ProjectRepository for DieselProjectRepository {
    async fn list_active(&self) -> Result<Vec<ProjectSummary>, ProjectPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ProjectRow> = projects::table
            .filter(projects::deleted_at.is_null())
            .order(projects::created_at.desc())
            .select(ProjectRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|row| ProjectSummary {
                id: row.id,
                name: row.name,
            })
            .collect())
    }

    async fn create(&self, name: &str) -> Result<(), ProjectPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(projects::table)
            .values(&NewProjectRow { name })
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(())
    }

    async fn soft_delete(&self, id: i32) -> Result<(), ProjectPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::update(projects::table.filter(projects::id.eq(id)))
            .set(projects::deleted_at.eq(Utc::now()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(())
    }
}
