//! API layer - HTTP handlers and middleware
//!
//! - Request handlers
//! - Custom extractors
//! - Route definitions and middleware stack

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
