//! Bearer-token authorization guard applied to protected routes.
//!
//! Extracting [`Identity`] from a request verifies the `Authorization`
//! header's token and exposes the decoded `{user_id, role}` to the handler.
//! Any verification failure, whether the token is malformed, expired, or
//! signed with the wrong secret, yields the same 401; the reason is logged,
//! never returned.
//!
//! The guard authenticates but does not authorize: it performs no project
//! membership or role check against the target resource, so any
//! authenticated user may act on any project or document.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use futures_util::future::{Ready, ready};
use tracing::debug;

use crate::domain::Identity;
use crate::inbound::http::error::ApiError;
use crate::inbound::http::state::HttpState;

fn extract_identity(req: &HttpRequest) -> Result<Identity, ApiError> {
    let state = req
        .app_data::<web::Data<HttpState>>()
        .ok_or_else(|| ApiError::internal("Internal server error"))?;

    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;
    let value = header
        .to_str()
        .map_err(|_| ApiError::unauthorized("Authentication required"))?;
    // Scheme word first, token second; the scheme itself is not inspected.
    let token = value
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| ApiError::unauthorized("Authentication required"))?;

    state.tokens.verify(token).map_err(|err| {
        debug!(%err, "bearer token rejected");
        ApiError::unauthorized("Invalid or expired token")
    })
}

impl FromRequest for Identity {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_identity(req))
    }
}
