//! Domain layer - Core entities and logic
//!
//! Contains the stored credential and the password value object that
//! owns hashing and verification.

pub mod credential;
pub mod password;

pub use credential::Credential;
pub use password::{HashCost, Password};
