//! Credential repository.
//!
//! Name uniqueness is enforced by the table's unique constraint, not by a
//! prior lookup, so two concurrent inserts of the same name leave exactly
//! one row and the loser gets `AppError::Conflict`.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    SqlErr,
};
use uuid::Uuid;

use super::entities::credential::{self, ActiveModel, Entity as CredentialEntity};
use crate::domain::Credential;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Credential repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Find a credential by its exact name
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Credential>>;

    /// Insert a new credential; a taken name is `AppError::Conflict`
    async fn create(&self, name: String, password_hash: String) -> AppResult<Credential>;
}

/// Concrete implementation of CredentialRepository
pub struct CredentialStore {
    db: DatabaseConnection,
}

impl CredentialStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("User"),
        _ => AppError::from(err),
    }
}

#[async_trait]
impl CredentialRepository for CredentialStore {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Credential>> {
        let result = CredentialEntity::find()
            .filter(credential::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Credential::from))
    }

    async fn create(&self, name: String, password_hash: String) -> AppResult<Credential> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            password_hash: Set(password_hash),
        };

        let model = active_model.insert(&self.db).await.map_err(map_insert_error)?;
        Ok(Credential::from(model))
    }
}
