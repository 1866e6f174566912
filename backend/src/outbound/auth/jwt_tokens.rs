//! JWT implementation of the `TokenService` port.
//!
//! Tokens are HS256-signed and carry the user id, the stored role label, and
//! a one day expiry. Verification failures are logged at debug level and
//! collapsed into [`TokenError::Verify`] so callers never leak why a token
//! was rejected.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::Identity;
use crate::domain::ports::{TokenError, TokenService};

/// Token lifetime from issuance, in days.
const TOKEN_TTL_DAYS: i64 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: i32,
    role: String,
    exp: i64,
}

/// Port implementation backed by `jsonwebtoken` with a shared HS256 secret.
pub struct JwtTokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtTokenService {
    /// Build a service around the given signing secret.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation: Validation::default(),
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user_id: i32, role: &str) -> Result<String, TokenError> {
        let claims = Claims {
            sub: user_id,
            role: role.to_owned(),
            exp: (Utc::now() + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|err| TokenError::issue(err.to_string()))
    }

    fn verify(&self, token: &str) -> Result<Identity, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|err| {
            debug!(%err, "token verification failed");
            TokenError::Verify
        })?;

        Ok(Identity {
            user_id: data.claims.sub,
            role: data.claims.role,
        })
    }
}
