//! Database connection and initialization.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Schema,
    Statement,
};

use crate::config::Config;
use crate::infra::repositories::entities::credential;

/// Database wrapper for connection management.
///
/// Owns the pool for the lifetime of the process; `close` releases it.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Connect, check the connection, and make sure the schema exists.
    ///
    /// # Errors
    /// Fails if the database is unreachable or the schema cannot be created.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.database_url.clone());
        options.sqlx_logging(false);

        Self::connect_with(options).await
    }

    /// Same as `connect`, with caller-supplied pool options.
    pub async fn connect_with(options: ConnectOptions) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(options).await?;
        let database = Self { connection };

        database.ping().await?;
        database.ensure_schema().await?;
        tracing::info!("Database connected and schema ready");

        Ok(database)
    }

    /// Create the credentials table and its unique name constraint if missing.
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        let backend = self.connection.get_database_backend();
        let mut table = Schema::new(backend).create_table_from_entity(credential::Entity);
        table.if_not_exists();

        self.connection.execute(backend.build(&table)).await?;
        Ok(())
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }

    /// Close the pool. Clones handed out earlier stop working.
    pub async fn close(self) -> Result<(), DbErr> {
        self.connection.close().await
    }
}
