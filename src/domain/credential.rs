//! Credential domain entity.

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// A registered user: a unique name and the salted hash of its password.
///
/// Created once by registration and never mutated afterwards.
/// Serializes to the `/create` payload shape (`_id`, `name`, `password`).
#[derive(Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Credential {
    /// Store-assigned identifier
    #[serde(rename = "_id")]
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Unique user name, trimmed
    #[schema(example = "alice")]
    pub name: String,
    /// Argon2 PHC hash string
    #[serde(rename = "password")]
    #[schema(example = "$argon2id$v=19$m=19456,t=2,p=1$...")]
    pub password_hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

impl Credential {
    pub fn new(id: Uuid, name: String, password_hash: String) -> Self {
        Self {
            id,
            name,
            password_hash,
        }
    }
}
