//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::{MSG_LOGGED_IN, MSG_USER_CREATED};
use crate::errors::AppResult;
use crate::types::{Created, CreatedResponse, MessageResponse, TokenResponse};

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// Unique user name
    #[validate(
        required(message = "Name and password are required"),
        length(min = 1, message = "Name and password are required")
    )]
    #[schema(example = "alice")]
    pub name: Option<String>,
    /// Plain text password
    #[validate(
        required(message = "Name and password are required"),
        length(min = 1, message = "Name and password are required")
    )]
    #[schema(example = "secret1")]
    pub password: Option<String>,
}

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(
        required(message = "All fields required"),
        length(min = 1, message = "All fields required")
    )]
    #[schema(example = "alice")]
    pub name: Option<String>,
    #[validate(
        required(message = "All fields required"),
        length(min = 1, message = "All fields required")
    )]
    #[schema(example = "secret1")]
    pub password: Option<String>,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(register))
        .route("/login", post(login))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/create",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = CreatedResponse),
        (status = 400, description = "Name or password missing", body = MessageResponse),
        (status = 409, description = "User already exists", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<Created<CreatedResponse>> {
    let credential = state
        .auth_service
        .register(
            payload.name.unwrap_or_default(),
            payload.password.unwrap_or_default(),
        )
        .await?;

    Ok(Created(CreatedResponse::new(MSG_USER_CREATED, credential)))
}

/// Login and get a bearer token
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Fields missing or credentials incorrect", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state
        .auth_service
        .login(
            payload.name.unwrap_or_default(),
            payload.password.unwrap_or_default(),
        )
        .await?;

    Ok(Json(TokenResponse::new(MSG_LOGGED_IN, token)))
}
