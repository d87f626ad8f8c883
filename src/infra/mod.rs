//! Infrastructure layer - External systems integration
//!
//! - Database connection, schema bootstrap and shutdown
//! - Credential repository over the database

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{CredentialRepository, CredentialStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockCredentialRepository;
