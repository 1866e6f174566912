//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::user::UserRecord;

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// The email uniqueness constraint rejected the insert.
    #[error("email already registered")]
    DuplicateEmail,
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserPersistenceError {
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

/// Insert payload for a new user row.
#[derive(Debug, Clone)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub name: &'a str,
    pub role: &'a str,
    pub password_digest: &'a str,
}

/// Driven port over the users relation.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and return the stored row.
    ///
    /// The email uniqueness check happens at the storage layer; a violation
    /// surfaces as [`UserPersistenceError::DuplicateEmail`].
    async fn insert(&self, new_user: &NewUser<'_>) -> Result<UserRecord, UserPersistenceError>;

    /// Fetch a user by exact email match, digest included.
    async fn find_by_email(&self, email: &str)
    -> Result<Option<UserRecord>, UserPersistenceError>;
}
