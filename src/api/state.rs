//! Application state shared by all handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{CredentialStore, Database};
use crate::services::{AuthService, Authenticator};

/// Application state (cheap to clone)
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
}

impl AppState {
    /// Wire the production service graph over an open database.
    pub fn from_config(database: &Database, config: &Config) -> AppResult<Self> {
        let store = Arc::new(CredentialStore::new(database.get_connection()));
        let auth_service = Arc::new(Authenticator::from_config(store, config)?);

        Ok(Self::new(auth_service))
    }

    /// Create state with a manually injected service.
    pub fn new(auth_service: Arc<dyn AuthService>) -> Self {
        Self { auth_service }
    }
}
