//! Registration and login handlers.
//!
//! ```text
//! POST /api/auth/register {"email":"ada@example.com","name":"Ada","password":"secret"}
//! POST /api/auth/login    {"email":"ada@example.com","password":"secret"}
//! ```
//!
//! Request bodies are explicit schemas with every field optional at the
//! serde layer; requiredness is enforced here so a missing field produces
//! the documented envelope instead of a deserialisation error.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::user::UserSummary;
use crate::domain::{LoginCredentials, Registration};
use crate::inbound::http::error::{ApiError, ApiResult, ErrorBody};
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/auth/register`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Response body for a successful login.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Signed bearer assertion, valid for one day.
    pub token: String,
}

/// Create a user account.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = UserSummary),
        (status = 400, description = "Missing fields", body = ErrorBody),
        (status = 409, description = "Email already exists", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["auth"],
    operation_id = "register",
    security([])
)]
#[post("/auth/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let registration = Registration::try_from_parts(
        body.email.as_deref().unwrap_or_default(),
        body.name.as_deref().unwrap_or_default(),
        body.password.as_deref().unwrap_or_default(),
    )
    .map_err(|_| ApiError::invalid_input("Missing fields"))?;

    let summary = state.auth.register(&registration).await?;
    Ok(HttpResponse::Created().json(summary))
}

/// Exchange credentials for a bearer token.
///
/// A missing or empty field fails credential verification rather than
/// validation, so the response is indistinguishable from a wrong password.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let credentials = LoginCredentials::try_from_parts(
        body.email.as_deref().unwrap_or_default(),
        body.password.as_deref().unwrap_or_default(),
    )
    .map_err(|_| ApiError::unauthorized("Invalid credentials"))?;

    let token = state.auth.login(&credentials).await?;
    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}
