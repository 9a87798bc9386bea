mod schema_tests;

use crate::error::CatalogError;
use crate::repository::database_manager::{DatabaseConfig, DatabaseManager};
use crate::repository::sqlite::sqlite_product_repo::SqliteProductRepository;
use crate::types::{ProductDraft, Scores};
use chrono::NaiveDate;
use std::sync::Arc;

/// Creates a `DatabaseManager` with an in-memory database suitable for testing.
pub fn test_database_manager() -> Result<DatabaseManager, CatalogError> {
    DatabaseManager::new(&DatabaseConfig::SqliteInMemory)
}

pub fn create_product_repo_for_test() -> Result<Arc<SqliteProductRepository>, CatalogError> {
    Ok(test_database_manager()?.create_product_repository())
}

pub fn draft_for_test(name: &str, scores: Scores) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        sector: "Security".to_string(),
        released: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().into(),
        scores,
    }
}
