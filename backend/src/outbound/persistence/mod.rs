//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Thin adapters over the domain repository ports. Diesel row structs and
//! schema definitions stay internal to this module; every database error is
//! mapped to the owning port's error type before it reaches the domain.

mod diesel_document_repository;
mod diesel_project_repository;
mod diesel_user_repository;
mod models;
pub mod pool;
pub(crate) mod schema;

pub use diesel_document_repository::DieselDocumentRepository;
pub use diesel_project_repository::DieselProjectRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
