//! Port abstraction for the one-way password digest primitive.
//!
//! The digest computation is CPU-bound; adapters are expected to run it on a
//! blocking pool so concurrent requests keep making progress.

use async_trait::async_trait;

/// Errors raised by password hashing adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordHashError {
    /// Digest computation failed.
    #[error("password hashing failed: {message}")]
    Hash { message: String },
}

impl PasswordHashError {
    /// Create a hashing error with the given message.
    pub fn hash(message: impl Into<String>) -> Self {
        Self::Hash {
            message: message.into(),
        }
    }
}

/// Driven port for salted one-way password digests.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Produce a salted digest of the plaintext.
    async fn hash(&self, password: &str) -> Result<String, PasswordHashError>;

    /// Compare a plaintext against a stored digest.
    ///
    /// A malformed stored digest compares unequal rather than erroring, so
    /// callers cannot distinguish it from a wrong password.
    async fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordHashError>;
}
