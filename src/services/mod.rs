//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure. They depend on
//! the repository trait, not on a concrete store.

mod auth_service;
mod token_issuer;

pub use auth_service::{AuthService, Authenticator};
pub use token_issuer::{Claims, TokenIssuer};
