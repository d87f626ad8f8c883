//! Signed, short-lived bearer tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 token issuer bound to one shared secret.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// # Errors
    /// Fails if the configured lifetime is not representable as a duration.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let ttl = Duration::try_seconds(config.jwt_expiration_seconds).ok_or_else(|| {
            AppError::config(format!(
                "Token lifetime out of range: {}s",
                config.jwt_expiration_seconds
            ))
        })?;

        Ok(Self::new(config.jwt_secret_bytes(), ttl))
    }

    /// Sign a token asserting `name`, expiring `ttl` from now.
    pub fn issue(&self, name: &str) -> AppResult<String> {
        let now = Utc::now();
        let expires = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::internal("Token expiry overflows the clock"))?;
        let claims = Claims {
            name: name.to_string(),
            iat: now.timestamp(),
            exp: expires.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Check signature and expiry (no leeway) and return the claims.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!("Token rejected: {}", e);
            AppError::InvalidToken
        })?;

        Ok(token_data.claims)
    }
}
