use crate::error::CatalogError;
use crate::repository::database_manager::{DatabaseConfig, DatabaseManager};
use crate::repository::product_repository::ProductRepository;
use crate::repository::sqlite::tests::{draft_for_test, test_database_manager};
use crate::repository::SharedSqliteConnection;
use crate::types::{Scores, PRODUCT_COLUMNS};

#[test]
fn test_product_table_columns() {
    let db_manager = test_database_manager().expect("Failed to create test database manager");

    let columns = table_columns(&db_manager.get_connection(), "produtos")
        .expect("Failed to read the table definition");

    assert_eq!(columns, PRODUCT_COLUMNS);
}

#[test]
fn test_schema_creation_is_idempotent() -> Result<(), CatalogError> {
    let tmp_dir = tempfile::tempdir()?;
    let path = tmp_dir.path().join("data").join("products.db");

    {
        let db_manager = DatabaseManager::new(&DatabaseConfig::SqliteOnDisk { path: path.clone() })?;
        db_manager
            .create_product_repository()
            .add_product(&draft_for_test("Kept", Scores::new(1, 1, 1)))?;
    }

    // Opening the same file again must neither fail nor drop the existing rows
    let db_manager = DatabaseManager::new(&DatabaseConfig::SqliteOnDisk { path })?;
    let products = db_manager.create_product_repository().find_all_products()?;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Kept");
    Ok(())
}

#[test]
fn test_open_failure_is_reported() -> Result<(), CatalogError> {
    let tmp_dir = tempfile::tempdir()?;
    // A directory cannot be opened as a database file
    let result = DatabaseManager::new(&DatabaseConfig::SqliteOnDisk {
        path: tmp_dir.path().to_path_buf(),
    });
    assert!(result.is_err());
    Ok(())
}

/// Helper function to list the column names of a table in declaration order
fn table_columns(conn: &SharedSqliteConnection, table: &str) -> Result<Vec<String>, CatalogError> {
    let conn = conn.lock().map_err(|_| CatalogError::LockPoisoned)?;
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({table})"))
        .map_err(|e| CatalogError::Sql(e.to_string()))?;

    let columns = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .map_err(|e| CatalogError::Sql(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(columns)
}
