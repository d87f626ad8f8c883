//! JSON response envelope.
//!
//! Every body carries `message`, `success` and `error`; `/create` adds
//! `data` and `/login` adds `token`.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Credential;

/// Message-only response, used for the welcome route and every failure
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Welcome to our application!")]
    pub message: String,
    pub success: bool,
    pub error: bool,
}

impl MessageResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
            error: false,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
            error: true,
        }
    }
}

/// Successful registration
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(example = "User created successfully")]
    pub message: String,
    pub data: Credential,
    pub success: bool,
    pub error: bool,
}

impl CreatedResponse {
    pub fn new(message: impl Into<String>, data: Credential) -> Self {
        Self {
            message: message.into(),
            data,
            success: true,
            error: false,
        }
    }
}

/// Successful login
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    #[schema(example = "Successfully logged in")]
    pub message: String,
    /// Signed bearer token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    pub success: bool,
    pub error: bool,
}

impl TokenResponse {
    pub fn new(message: impl Into<String>, token: String) -> Self {
        Self {
            message: message.into(),
            token,
            success: true,
            error: false,
        }
    }
}

/// Created response helper (201 with a JSON body)
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}
