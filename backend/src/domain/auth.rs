//! Registration and login use-cases over the credential store.

use std::sync::Arc;

use tracing::error;

use crate::domain::DomainError;
use crate::domain::ports::{NewUser, PasswordHasher, TokenService, UserPersistenceError,
    UserRepository};
use crate::domain::user::{DEFAULT_ROLE, LoginCredentials, Registration, UserSummary};

/// Decoded request identity attached by the authorization guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Subject user id from the verified assertion.
    pub user_id: i32,
    /// Role string carried by the assertion.
    pub role: String,
}

/// Credential store and session issuer facade.
///
/// Registration stores a salted one-way digest and never echoes it; login
/// deliberately returns one indistinguishable `Invalid credentials` failure
/// for unknown emails and wrong passwords to resist account enumeration.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
}

impl AuthService {
    /// Create a service over the given ports.
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Register a new user and return the caller-visible summary.
    pub async fn register(&self, registration: &Registration) -> Result<UserSummary, DomainError> {
        let digest = self
            .hasher
            .hash(registration.password())
            .await
            .map_err(|err| {
                error!(%err, "password digest computation failed");
                DomainError::internal("Failed to register")
            })?;

        let new_user = NewUser {
            email: registration.email(),
            name: registration.name(),
            role: DEFAULT_ROLE,
            password_digest: &digest,
        };
        let record = self.users.insert(&new_user).await.map_err(|err| match err {
            UserPersistenceError::DuplicateEmail => DomainError::conflict("Email already exists"),
            other => {
                error!(%other, "user insert failed");
                DomainError::internal("Failed to register")
            }
        })?;

        Ok(record.summary())
    }

    /// Verify credentials and issue a signed, time-bounded assertion.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<String, DomainError> {
        let record = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(|err| {
                error!(%err, "user lookup failed");
                DomainError::internal("Failed to log in")
            })?;

        // Unknown email and wrong password produce the same response shape.
        let Some(record) = record else {
            return Err(DomainError::unauthorized("Invalid credentials"));
        };

        let matches = self
            .hasher
            .verify(credentials.password(), &record.password_digest)
            .await
            .map_err(|err| {
                error!(%err, "password verification failed");
                DomainError::internal("Failed to log in")
            })?;
        if !matches {
            return Err(DomainError::unauthorized("Invalid credentials"));
        }

        self.tokens.issue(record.id, &record.role).map_err(|err| {
            error!(%err, "token issuance failed");
            DomainError::internal("Failed to log in")
        })
    }
}
