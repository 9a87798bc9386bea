use catalog::config::AppConfiguration;
use catalog::{error::CatalogError, ApplicationRuntime, ApplicationRuntimeBuilder};
use std::path::Path;
use std::sync::Arc;

/// Creates a test runtime with an in-memory database and the default configuration
pub fn create_test_runtime() -> Result<Arc<ApplicationRuntime>, CatalogError> {
    // Initialize logger only once
    let _ = env_logger::builder().is_test(true).try_init();

    let runtime = ApplicationRuntimeBuilder::new()
        .with_config(AppConfiguration::default())
        .use_in_memory_db()
        .build()?;

    Ok(Arc::new(runtime))
}

/// Creates a test runtime backed by a database file at `path`
pub fn create_on_disk_runtime(path: &Path) -> Result<ApplicationRuntime, CatalogError> {
    let _ = env_logger::builder().is_test(true).try_init();

    ApplicationRuntimeBuilder::new()
        .with_config(AppConfiguration::default())
        .with_database_path(path.to_path_buf())
        .build()
}
