//! Authentication service - registration and login.
//!
//! Holds no mutable state; every call is a single request/response.
//! Register writes at most once, login never writes.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{Config, MSG_LOGIN_FIELDS_REQUIRED, MSG_REGISTER_FIELDS_REQUIRED};
use crate::domain::{Credential, HashCost, Password};
use crate::errors::{AppError, AppResult};
use crate::infra::CredentialRepository;

use super::TokenIssuer;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user and return the stored credential
    async fn register(&self, name: String, password: String) -> AppResult<Credential>;

    /// Check a name/password pair and return a signed token
    async fn login(&self, name: String, password: String) -> AppResult<String>;
}

/// Concrete implementation of AuthService over a credential repository.
pub struct Authenticator<R: CredentialRepository> {
    credentials: Arc<R>,
    tokens: TokenIssuer,
    cost: HashCost,
}

impl<R: CredentialRepository> Authenticator<R> {
    pub fn new(credentials: Arc<R>, tokens: TokenIssuer, cost: HashCost) -> Self {
        Self {
            credentials,
            tokens,
            cost,
        }
    }

    /// Production wiring: configured token issuer, default hash cost
    pub fn from_config(credentials: Arc<R>, config: &Config) -> AppResult<Self> {
        Ok(Self::new(
            credentials,
            TokenIssuer::from_config(config)?,
            HashCost::default(),
        ))
    }
}

/// Trimmed name, or `None` if either field is empty.
fn required_fields(name: &str, password: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() || password.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[async_trait]
impl<R: CredentialRepository> AuthService for Authenticator<R> {
    async fn register(&self, name: String, password: String) -> AppResult<Credential> {
        let name = required_fields(&name, &password)
            .ok_or_else(|| AppError::validation(MSG_REGISTER_FIELDS_REQUIRED))?;

        if self.credentials.find_by_name(&name).await?.is_some() {
            tracing::info!(user = %name, "Registration rejected: name taken");
            return Err(AppError::conflict("User"));
        }

        let password_hash = Password::hash(password, self.cost).await?.into_string();

        // A concurrent register may have won since the lookup; the store
        // reports that as a conflict.
        let credential = self.credentials.create(name, password_hash).await?;

        tracing::info!(user = %credential.name, id = %credential.id, "User registered");
        Ok(credential)
    }

    async fn login(&self, name: String, password: String) -> AppResult<String> {
        let name = required_fields(&name, &password)
            .ok_or_else(|| AppError::validation(MSG_LOGIN_FIELDS_REQUIRED))?;

        let Some(credential) = self.credentials.find_by_name(&name).await? else {
            // Same hashing work as a wrong password
            Password::hash(password, self.cost).await?;
            tracing::info!(user = %name, "Login rejected");
            return Err(AppError::InvalidCredentials);
        };

        let stored = Password::from_hash(credential.password_hash);
        if !stored.matches(password).await? {
            tracing::info!(user = %name, "Login rejected");
            return Err(AppError::InvalidCredentials);
        }

        let token = self.tokens.issue(&credential.name)?;
        tracing::info!(user = %credential.name, "User logged in");
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    use crate::infra::MockCredentialRepository;

    const SECRET: &[u8] = b"test-secret-key-for-testing-only-32chars";

    fn cheap() -> HashCost {
        HashCost::new(1024, 1, 1)
    }

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(SECRET, Duration::seconds(60))
    }

    fn service(repo: MockCredentialRepository) -> Authenticator<MockCredentialRepository> {
        Authenticator::new(Arc::new(repo), issuer(), cheap())
    }

    fn stored(name: &str, password: &str) -> Credential {
        let hash = Password::with_cost(password, &cheap()).unwrap().into_string();
        Credential::new(Uuid::new_v4(), name.to_string(), hash)
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repo = MockCredentialRepository::new();
        repo.expect_find_by_name()
            .withf(|name: &str| name == "alice")
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_create()
            .withf(|name: &String, hash: &String| {
                name == "alice" && hash != "secret1" && Password::from_hash(hash.clone()).verify("secret1")
            })
            .times(1)
            .returning(|name, hash| Ok(Credential::new(Uuid::new_v4(), name, hash)));

        let credential = service(repo)
            .register("alice".to_string(), "secret1".to_string())
            .await
            .unwrap();

        assert_eq!(credential.name, "alice");
        assert_ne!(credential.password_hash, "secret1");
    }

    #[tokio::test]
    async fn test_register_trims_name() {
        let mut repo = MockCredentialRepository::new();
        repo.expect_find_by_name()
            .withf(|name: &str| name == "alice")
            .returning(|_| Ok(None));
        repo.expect_create()
            .withf(|name: &String, _hash: &String| name == "alice")
            .times(1)
            .returning(|name, hash| Ok(Credential::new(Uuid::new_v4(), name, hash)));

        let credential = service(repo)
            .register("  alice \n".to_string(), "secret1".to_string())
            .await
            .unwrap();

        assert_eq!(credential.name, "alice");
    }

    #[tokio::test]
    async fn test_register_duplicate_name() {
        let mut repo = MockCredentialRepository::new();
        repo.expect_find_by_name()
            .returning(|name| Ok(Some(stored(name, "secret1"))));
        repo.expect_create().never();

        let result = service(repo)
            .register("alice".to_string(), "other".to_string())
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_register_missing_fields_writes_nothing() {
        for (name, password) in [("", "secret1"), ("alice", ""), ("   ", "secret1"), ("", "")] {
            let mut repo = MockCredentialRepository::new();
            repo.expect_find_by_name().never();
            repo.expect_create().never();

            let result = service(repo)
                .register(name.to_string(), password.to_string())
                .await;

            match result {
                Err(AppError::Validation(msg)) => assert_eq!(msg, MSG_REGISTER_FIELDS_REQUIRED),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_register_lost_race_is_conflict() {
        let mut repo = MockCredentialRepository::new();
        repo.expect_find_by_name().returning(|_| Ok(None));
        repo.expect_create()
            .times(1)
            .returning(|_, _| Err(AppError::conflict("User")));

        let result = service(repo)
            .register("alice".to_string(), "secret1".to_string())
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_register_store_failure_is_internal() {
        let mut repo = MockCredentialRepository::new();
        repo.expect_find_by_name()
            .returning(|_| Err(AppError::Database(sea_orm::DbErr::Custom("down".into()))));
        repo.expect_create().never();

        let err = service(repo)
            .register("alice".to_string(), "secret1".to_string())
            .await
            .unwrap_err();

        assert_eq!(err.status(), axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_login_success_issues_token_for_name() {
        let mut repo = MockCredentialRepository::new();
        let credential = stored("alice", "secret1");
        repo.expect_find_by_name()
            .withf(|name: &str| name == "alice")
            .returning(move |_| Ok(Some(credential.clone())));

        let token = service(repo)
            .login(" alice".to_string(), "secret1".to_string())
            .await
            .unwrap();

        let claims = issuer().verify(&token).unwrap();
        assert_eq!(claims.name, "alice");
        assert_eq!(claims.exp - claims.iat, 60);
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let mut repo = MockCredentialRepository::new();
        let credential = stored("alice", "secret1");
        repo.expect_find_by_name().returning(move |name| {
            if name == "alice" {
                Ok(Some(credential.clone()))
            } else {
                Ok(None)
            }
        });
        let service = service(repo);

        let wrong_password = service
            .login("alice".to_string(), "wrong".to_string())
            .await
            .unwrap_err();
        let unknown_name = service
            .login("bob".to_string(), "secret1".to_string())
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AppError::InvalidCredentials));
        assert!(matches!(unknown_name, AppError::InvalidCredentials));
        assert_eq!(wrong_password.user_message(), unknown_name.user_message());
        assert_eq!(wrong_password.status(), unknown_name.status());
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        let mut repo = MockCredentialRepository::new();
        repo.expect_find_by_name().never();

        let result = service(repo).login("alice".to_string(), String::new()).await;

        match result {
            Err(AppError::Validation(msg)) => assert_eq!(msg, MSG_LOGIN_FIELDS_REQUIRED),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
