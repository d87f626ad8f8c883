//! Repository layer - Data access abstraction

pub(crate) mod entities;
mod credential_repository;

pub use credential_repository::{CredentialRepository, CredentialStore};

// Export mock for tests
#[cfg(any(test, feature = "test-utils"))]
pub use credential_repository::MockCredentialRepository;
