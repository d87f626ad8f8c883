//! OpenAPI documentation configuration.
//!
//! Served at `/api-docs/openapi.json` with Swagger UI at `/swagger-ui`.

use utoipa::OpenApi;

use crate::api::handlers::auth_handler;
use crate::api::routes;
use crate::domain::Credential;
use crate::types::{CreatedResponse, MessageResponse, TokenResponse};

/// OpenAPI documentation for the Auth API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Auth API",
        version = "0.1.0",
        description = "User registration and login issuing short-lived bearer tokens",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        routes::root,
        auth_handler::register,
        auth_handler::login,
    ),
    components(
        schemas(
            Credential,
            MessageResponse,
            CreatedResponse,
            TokenResponse,
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
        )
    ),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Authentication", description = "User registration and login")
    )
)]
pub struct ApiDoc;
