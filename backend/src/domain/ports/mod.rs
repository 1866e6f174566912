//! Domain ports: trait seams between domain services and driven adapters.
//!
//! In hexagonal terms these are *driven* ports: the domain calls them
//! without knowing (or importing) the backing infrastructure, which keeps
//! service tests deterministic because they can substitute a test double
//! instead of wiring persistence or crypto.

pub mod document_repository;
pub mod password_hasher;
pub mod project_repository;
pub mod token_service;
pub mod user_repository;

pub use document_repository::{DocumentPersistenceError, DocumentRepository};
pub use password_hasher::{PasswordHashError, PasswordHasher};
pub use project_repository::{ProjectPersistenceError, ProjectRepository};
pub use token_service::{TokenError, TokenService};
pub use user_repository::{NewUser, UserPersistenceError, UserRepository};
