//! Outbound adapters implementing the domain ports against real
//! infrastructure.

pub mod auth;
pub mod persistence;
