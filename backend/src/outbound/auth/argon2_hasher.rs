//! Argon2 implementation of the `PasswordHasher` port.
//!
//! Digests are stored in PHC string format so parameters travel with the
//! digest and can be tightened later without invalidating existing accounts.
//! Hashing is deliberately slow, so both operations run on the blocking
//! thread pool rather than stalling the async executor.

use argon2::Argon2;
use argon2::password_hash::{
    PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};
use async_trait::async_trait;
use rand::rngs::OsRng;
use tracing::warn;
use zeroize::Zeroizing;

use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Port implementation backed by `argon2` with its default parameters
/// (Argon2id, v19).
#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordHasher;

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        let password = Zeroizing::new(password.to_owned());

        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|digest| digest.to_string())
                .map_err(|err| PasswordHashError::hash(err.to_string()))
        })
        .await
        .map_err(|err| PasswordHashError::hash(err.to_string()))?
    }

    async fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordHashError> {
        let password = Zeroizing::new(password.to_owned());
        let digest = digest.to_owned();

        tokio::task::spawn_blocking(move || {
            let parsed = match PasswordHash::new(&digest) {
                Ok(parsed) => parsed,
                Err(err) => {
                    // A stored digest we cannot parse compares unequal; the
                    // caller reports a failed login, not a server fault.
                    warn!(%err, "stored password digest is not a valid PHC string");
                    return Ok(false);
                }
            };

            Ok(Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok())
        })
        .await
        .map_err(|err| PasswordHashError::hash(err.to_string()))?
    }
}
