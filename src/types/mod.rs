//! Shared response types.

mod response;

pub use response::{Created, CreatedResponse, MessageResponse, TokenResponse};
