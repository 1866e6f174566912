//! Transport-agnostic domain: entities, validation types, services, and the
//! ports driven adapters implement.

pub mod auth;
pub mod document;
pub mod error;
pub mod ports;
pub mod project;
pub mod user;

pub use self::auth::{AuthService, Identity};
pub use self::document::{DocumentRegistry, DocumentSummary};
pub use self::error::{DomainError, ErrorCode};
pub use self::project::{ProjectRegistry, ProjectSummary};
pub use self::user::{
    CredentialValidationError, LoginCredentials, Registration, UserRecord, UserSummary,
};
