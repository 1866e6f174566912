//! Port abstraction for issuing and verifying signed identity assertions.

use crate::domain::auth::Identity;

/// Errors raised by token adapters.
///
/// Verification failures carry no detail by design: malformed, expired, and
/// wrongly signed tokens are indistinguishable to the caller. Adapters log
/// the underlying reason before collapsing it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// Signing the assertion failed.
    #[error("token issuance failed: {message}")]
    Issue { message: String },
    /// The presented token did not verify.
    #[error("token verification failed")]
    Verify,
}

impl TokenError {
    /// Create an issuance error with the given message.
    pub fn issue(message: impl Into<String>) -> Self {
        Self::Issue {
            message: message.into(),
        }
    }
}

/// Driven port for the bearer-token primitive.
///
/// Tokens are opaque, integrity-protected, and time-bounded; possession
/// alone grants the encoded authority until expiry. There is no refresh and
/// no revocation list.
pub trait TokenService: Send + Sync {
    /// Produce a signed assertion encoding the user id and role.
    fn issue(&self, user_id: i32, role: &str) -> Result<String, TokenError>;

    /// Verify signature and expiry, returning the embedded identity.
    fn verify(&self, token: &str) -> Result<Identity, TokenError>;
}
