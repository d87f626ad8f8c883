//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::Duration;
use sea_orm::{ConnectOptions, ConnectionTrait, Statement};

use auth_api::api::AppState;
use auth_api::infra::{CredentialStore, Database};
use auth_api::services::{Authenticator, TokenIssuer};
use auth_api::HashCost;

pub const SECRET: &[u8] = b"test-secret-key-for-testing-only-32chars";

/// Fresh in-memory SQLite database with the schema in place.
///
/// One pooled connection, since every SQLite memory connection is its own database.
pub async fn memory_database() -> Database {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    Database::connect_with(options)
        .await
        .expect("in-memory database should open")
}

pub fn issuer() -> TokenIssuer {
    TokenIssuer::new(SECRET, Duration::seconds(60))
}

/// Cheap hashing keeps the suite fast; production uses `HashCost::default()`.
pub fn cheap_cost() -> HashCost {
    HashCost::new(1024, 1, 1)
}

pub fn authenticator(database: &Database) -> Authenticator<CredentialStore> {
    let store = Arc::new(CredentialStore::new(database.get_connection()));
    Authenticator::new(store, issuer(), cheap_cost())
}

pub fn app_state(database: &Database) -> AppState {
    AppState::new(Arc::new(authenticator(database)))
}

/// Number of rows in the credentials table.
pub async fn credential_count(database: &Database) -> i64 {
    let connection = database.connection();
    let row = connection
        .query_one(Statement::from_string(
            connection.get_database_backend(),
            "SELECT COUNT(*) AS n FROM users".to_string(),
        ))
        .await
        .expect("count query should run")
        .expect("count query returns a row");

    row.try_get::<i64>("", "n").expect("count is an integer")
}
