use crate::error::CatalogError;
use crate::repository::SharedSqliteConnection;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub(crate) mod sqlite_product_repo;

/// Creates the entire database schema by running schema creation functions for all entities.
#[allow(clippy::module_name_repetitions)]
pub(crate) fn create_schema(connection: &SharedSqliteConnection) -> Result<(), CatalogError> {
    sqlite_product_repo::create_product_table(connection)?;
    Ok(())
}

pub(crate) fn create_connection(dbms_path: &Path) -> Result<Connection, CatalogError> {
    if let Some(parent) = dbms_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Connection::open(dbms_path).map_err(|e| CatalogError::OpenDbms {
        path: dbms_path.to_string_lossy().to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
pub(crate) mod tests;
