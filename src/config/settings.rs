//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_JWT_EXPIRATION_SECONDS, MAX_JWT_EXPIRATION_SECONDS,
    MIN_JWT_SECRET_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    jwt_secret: String,
    pub jwt_expiration_seconds: i64,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiration_seconds", &self.jwt_expiration_seconds)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    ///
    /// # Errors
    /// See [`Config::from_lookup`].
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key/value source.
    ///
    /// # Errors
    /// Fails if `JWT_SECRET` is unset or shorter than the minimum length,
    /// or if `JWT_EXPIRATION_SECONDS` is not an integer in range.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let jwt_secret = lookup("JWT_SECRET")
            .ok_or_else(|| AppError::config("JWT_SECRET environment variable must be set"))?;

        let jwt_expiration_seconds = match lookup("JWT_EXPIRATION_SECONDS") {
            Some(raw) => raw.trim().parse::<i64>().map_err(|_| {
                AppError::config(format!("JWT_EXPIRATION_SECONDS is not an integer: {raw}"))
            })?,
            None => DEFAULT_JWT_EXPIRATION_SECONDS,
        };

        Self::new(
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
            jwt_expiration_seconds,
        )
    }

    /// Build a configuration from explicit values.
    pub fn new(
        database_url: impl Into<String>,
        jwt_secret: impl Into<String>,
        jwt_expiration_seconds: i64,
    ) -> AppResult<Self> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::config(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if !(1..=MAX_JWT_EXPIRATION_SECONDS).contains(&jwt_expiration_seconds) {
            return Err(AppError::config(format!(
                "JWT_EXPIRATION_SECONDS must be between 1 and {}, got {}",
                MAX_JWT_EXPIRATION_SECONDS, jwt_expiration_seconds
            )));
        }

        Ok(Self {
            database_url: database_url.into(),
            jwt_secret,
            jwt_expiration_seconds,
        })
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SECRET: &str = "test-secret-key-for-testing-only-32chars";

    #[test]
    fn test_new_accepts_long_secret() {
        let config = Config::new("sqlite::memory:", SECRET, 60).unwrap();
        assert_eq!(config.jwt_secret_bytes(), SECRET.as_bytes());
        assert_eq!(config.jwt_expiration_seconds, 60);
    }

    #[test]
    fn test_new_rejects_short_secret() {
        let result = Config::new("sqlite::memory:", "short", 60);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_new_rejects_out_of_range_lifetime() {
        for secs in [0, -5, MAX_JWT_EXPIRATION_SECONDS + 1, i64::MAX] {
            let result = Config::new("sqlite::memory:", SECRET, secs);
            assert!(matches!(result, Err(AppError::Config(_))), "lifetime {secs}");
        }

        let longest = Config::new("sqlite::memory:", SECRET, MAX_JWT_EXPIRATION_SECONDS).unwrap();
        assert_eq!(longest.jwt_expiration_seconds, MAX_JWT_EXPIRATION_SECONDS);
    }

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_lookup_applies_defaults() {
        let config = Config::from_lookup(lookup_from(&[("JWT_SECRET", SECRET)])).unwrap();

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.jwt_expiration_seconds, DEFAULT_JWT_EXPIRATION_SECONDS);
    }

    #[test]
    fn test_lookup_reads_every_key() {
        let config = Config::from_lookup(lookup_from(&[
            ("JWT_SECRET", SECRET),
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_EXPIRATION_SECONDS", "300"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.jwt_expiration_seconds, 300);
    }

    #[test]
    fn test_lookup_requires_secret() {
        let result = Config::from_lookup(lookup_from(&[("DATABASE_URL", "sqlite::memory:")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_lookup_rejects_bad_lifetime() {
        for raw in ["abc", "", "1.5", "0", "-60", "1000000000000000"] {
            let result = Config::from_lookup(lookup_from(&[
                ("JWT_SECRET", SECRET),
                ("JWT_EXPIRATION_SECONDS", raw),
            ]));
            assert!(matches!(result, Err(AppError::Config(_))), "value {raw:?}");
        }
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::new("postgres://user:hunter2@db/app", SECRET, 60).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains(SECRET));
    }
}
