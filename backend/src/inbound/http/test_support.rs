//! In-memory port implementations and app builders for handler tests.
//!
//! The memory repositories reproduce the storage-layer semantics the
//! handlers rely on: email uniqueness, the unconditional
//! `(project, title)` constraint, soft-delete flags, and newest-first
//! ordering. Tokens are real signed assertions so the guard path is
//! exercised end to end.

use std::sync::{Arc, Mutex};

use actix_web::{App, web};
use async_trait::async_trait;

use crate::domain::ports::{
    DocumentPersistenceError, DocumentRepository, NewUser, PasswordHashError, PasswordHasher,
    ProjectPersistenceError, ProjectRepository, TokenService as _, UserPersistenceError,
    UserRepository,
};
use crate::domain::user::UserRecord;
use crate::domain::{
    AuthService, DocumentRegistry, DocumentSummary, ProjectRegistry, ProjectSummary,
};
use crate::inbound::http::configure_api;
use crate::inbound::http::state::HttpState;
use crate::outbound::auth::JwtTokenService;

const TEST_TOKEN_SECRET: &[u8] = b"test-token-secret";

#[derive(Default)]
pub(crate) struct MemoryUserRepository {
    rows: Mutex<Vec<UserRecord>>,
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn insert(&self, new_user: &NewUser<'_>) -> Result<UserRecord, UserPersistenceError> {
        let mut rows = self.rows.lock().expect("rows lock");
        if rows.iter().any(|row| row.email == new_user.email) {
            return Err(UserPersistenceError::DuplicateEmail);
        }
        let record = UserRecord {
            id: i32::try_from(rows.len()).expect("small test fixture") + 1,
            email: new_user.email.to_owned(),
            name: new_user.name.to_owned(),
            role: new_user.role.to_owned(),
            password_digest: new_user.password_digest.to_owned(),
        };
        rows.push(record.clone());
        Ok(record)
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserRecord>, UserPersistenceError> {
        let rows = self.rows.lock().expect("rows lock");
        Ok(rows.iter().find(|row| row.email == email).cloned())
    }
}

struct StoredProject {
    id: i32,
    name: String,
    deleted: bool,
}

#[derive(Default)]
pub(crate) struct MemoryProjectRepository {
    rows: Mutex<Vec<StoredProject>>,
}

#[async_trait]
impl ProjectRepository for MemoryProjectRepository {
    async fn list_active(&self) -> Result<Vec<ProjectSummary>, ProjectPersistenceError> {
        let rows = self.rows.lock().expect("rows lock");
        let mut listed: Vec<ProjectSummary> = rows
            .iter()
            .filter(|row| !row.deleted)
            .map(|row| ProjectSummary {
                id: row.id,
                name: row.name.clone(),
            })
            .collect();
        listed.reverse();
        Ok(listed)
    }

    async fn create(&self, name: &str) -> Result<(), ProjectPersistenceError> {
        let mut rows = self.rows.lock().expect("rows lock");
        let id = i32::try_from(rows.len()).expect("small test fixture") + 1;
        rows.push(StoredProject {
            id,
            name: name.to_owned(),
            deleted: false,
        });
        Ok(())
    }

    async fn soft_delete(&self, id: i32) -> Result<(), ProjectPersistenceError> {
        let mut rows = self.rows.lock().expect("rows lock");
        for row in rows.iter_mut().filter(|row| row.id == id) {
            row.deleted = true;
        }
        Ok(())
    }
}

struct StoredDocument {
    id: i32,
    project_id: i32,
    title: String,
    deleted: bool,
}

#[derive(Default)]
pub(crate) struct MemoryDocumentRepository {
    rows: Mutex<Vec<StoredDocument>>,
}

#[async_trait]
impl DocumentRepository for MemoryDocumentRepository {
    async fn list_active_by_project(
        &self,
        project_id: i32,
    ) -> Result<Vec<DocumentSummary>, DocumentPersistenceError> {
        let rows = self.rows.lock().expect("rows lock");
        let mut listed: Vec<DocumentSummary> = rows
            .iter()
            .filter(|row| row.project_id == project_id && !row.deleted)
            .map(|row| DocumentSummary {
                id: row.id,
                title: row.title.clone(),
            })
            .collect();
        listed.reverse();
        Ok(listed)
    }

    async fn create(
        &self,
        project_id: i32,
        title: &str,
    ) -> Result<(), DocumentPersistenceError> {
        let mut rows = self.rows.lock().expect("rows lock");
        // Unconditional constraint: deleted rows still count.
        let clash = rows
            .iter()
            .any(|row| row.project_id == project_id && row.title == title);
        if clash {
            return Err(DocumentPersistenceError::DuplicateTitle);
        }
        let id = i32::try_from(rows.len()).expect("small test fixture") + 1;
        rows.push(StoredDocument {
            id,
            project_id,
            title: title.to_owned(),
            deleted: false,
        });
        Ok(())
    }

    async fn soft_delete(&self, id: i32) -> Result<(), DocumentPersistenceError> {
        let mut rows = self.rows.lock().expect("rows lock");
        for row in rows.iter_mut().filter(|row| row.id == id) {
            row.deleted = true;
        }
        Ok(())
    }
}

/// Reversible stand-in for the Argon2 adapter; real digests are covered by
/// the adapter's own tests.
pub(crate) struct StubHasher;

#[async_trait]
impl PasswordHasher for StubHasher {
    async fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        Ok(format!("digest:{password}"))
    }

    async fn verify(&self, password: &str, digest: &str) -> Result<bool, PasswordHashError> {
        Ok(digest == format!("digest:{password}"))
    }
}

/// Build an [`HttpState`] over memory repositories and real signed tokens.
pub(crate) fn stub_state() -> HttpState {
    let users = Arc::new(MemoryUserRepository::default());
    let projects = Arc::new(MemoryProjectRepository::default());
    let documents = Arc::new(MemoryDocumentRepository::default());
    let tokens = Arc::new(JwtTokenService::new(TEST_TOKEN_SECRET));

    HttpState::new(
        AuthService::new(users, Arc::new(StubHasher), tokens.clone()),
        ProjectRegistry::new(projects),
        DocumentRegistry::new(documents),
        tokens,
    )
}

/// Issue a token against the state's own verifier.
pub(crate) fn token_for(state: &HttpState, user_id: i32, role: &str) -> String {
    state
        .tokens
        .issue(user_id, role)
        .expect("token issuance succeeds")
}

/// Correctly signed token whose expiry is already past the verifier's
/// default leeway.
pub(crate) fn expired_token(user_id: i32, role: &str) -> String {
    #[derive(serde::Serialize)]
    struct Claims<'a> {
        sub: i32,
        role: &'a str,
        exp: i64,
    }

    let claims = Claims {
        sub: user_id,
        role,
        exp: (chrono::Utc::now() - chrono::Duration::minutes(2)).timestamp(),
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_TOKEN_SECRET),
    )
    .expect("encoding succeeds")
}

/// App with the full `/api` surface mounted, as in production wiring.
pub(crate) fn api_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .configure(configure_api)
}
