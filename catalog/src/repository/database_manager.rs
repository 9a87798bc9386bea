use crate::error::CatalogError;
use crate::repository::sqlite;
use crate::repository::sqlite::sqlite_product_repo::SqliteProductRepository;
use crate::repository::SharedSqliteConnection;
use log::debug;
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Represents parameters for initializing the database connection
#[derive(Debug, Clone)]
pub enum DatabaseConfig {
    /// SQLite database with a specific file path
    SqliteOnDisk { path: PathBuf },

    /// SQLite database that runs entirely in memory
    SqliteInMemory,
}

pub struct DatabaseManager {
    connection: SharedSqliteConnection,
}

impl DatabaseManager {
    /// Creates a new `DatabaseManager` based on the provided configuration and makes sure the
    /// schema exists.
    pub fn new(config: &DatabaseConfig) -> Result<Self, CatalogError> {
        let connection = match config {
            // SQLite (on-disk)
            DatabaseConfig::SqliteOnDisk { path } => {
                debug!("Opening database {}", path.to_string_lossy());
                sqlite::create_connection(path)?
            }

            // SQLite (in-memory)
            DatabaseConfig::SqliteInMemory => Connection::open_in_memory()?,
        };

        let connection = Arc::new(Mutex::new(connection));

        sqlite::create_schema(&connection)?;

        Ok(Self { connection })
    }

    /// Provide access to the shared database connection.
    pub(crate) fn get_connection(&self) -> SharedSqliteConnection {
        self.connection.clone()
    }

    pub(crate) fn create_product_repository(&self) -> Arc<SqliteProductRepository> {
        Arc::new(SqliteProductRepository::new(self.get_connection()))
    }
}
