//! Auth API - user registration and login over HTTP.
//!
//! Stores one salted password hash per user name and issues short-lived
//! signed bearer tokens on successful login.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Credential entity and password hashing
//! - **services**: Token issuing and the register/login use cases
//! - **infra**: Database bootstrap and the credential store
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Response envelope
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve --port 3000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Credential, HashCost, Password};
pub use errors::{AppError, AppResult};
