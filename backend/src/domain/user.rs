//! User identity model and credential value types.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use serde::Serialize;
use utoipa::ToSchema;
use zeroize::Zeroizing;

/// Role assigned to newly registered users.
pub const DEFAULT_ROLE: &str = "user";

/// User fields safe to return to callers.
///
/// The password digest is deliberately absent; it never leaves the
/// persistence boundary except inside [`UserRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserSummary {
    /// Surrogate identifier assigned by storage.
    pub id: i32,
    /// Unique email address, case-sensitive as stored.
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Display name shown to other users.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Role string, `user` by default.
    #[schema(example = "user")]
    pub role: String,
}

/// Full user row as read from storage, including the password digest.
///
/// Never serialised; only [`UserSummary`] crosses the transport boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: String,
    pub password_digest: String,
}

impl UserRecord {
    /// Project the record onto its caller-visible summary.
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
        }
    }
}

/// Domain error returned when credential payload values are invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialValidationError {
    /// Email was missing or the empty string.
    EmptyEmail,
    /// Display name was missing or the empty string.
    EmptyName,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// Validated registration payload.
///
/// ## Invariants
/// - Every field is non-empty as provided. No normalisation is applied:
///   values keep caller whitespace, so padded emails are distinct accounts
///   at the storage uniqueness check.
#[derive(Debug, Clone)]
pub struct Registration {
    email: String,
    name: String,
    password: Zeroizing<String>,
}

impl Registration {
    /// Construct a registration from raw field inputs.
    pub fn try_from_parts(
        email: &str,
        name: &str,
        password: &str,
    ) -> Result<Self, CredentialValidationError> {
        if email.is_empty() {
            return Err(CredentialValidationError::EmptyEmail);
        }
        if name.is_empty() {
            return Err(CredentialValidationError::EmptyName);
        }
        if password.is_empty() {
            return Err(CredentialValidationError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_owned(),
            name: name.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email address used for the storage uniqueness check.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Display name for the new account.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Plaintext password; only ever handed to the hasher port.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated login credentials used by the authentication service.
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, CredentialValidationError> {
        if email.is_empty() {
            return Err(CredentialValidationError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(CredentialValidationError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email string suitable for user lookups.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
