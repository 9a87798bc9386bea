use crate::error::CatalogError;
use config::AppConfiguration;
use export::ExportSummary;
use form::ProductForm;
use log::debug;
use repository::database_manager::{DatabaseConfig, DatabaseManager};
use service::product_service::ProductService;
use std::path::PathBuf;
use std::sync::Arc;
use types::Product;

pub mod config;
pub mod date;
pub mod error;
pub mod export;
pub mod form;
pub mod qualification;
pub mod service;
pub mod types;

pub(crate) mod repository;

pub struct ApplicationRuntime {
    config: AppConfiguration,
    product_service: Arc<ProductService>,
}

pub enum Operation {
    Insert(ProductForm),
    Edit { id: i64, form: ProductForm },
    Delete(i64),
    List,
    Export(PathBuf),
}

#[derive(Debug)]
pub enum OperationResult {
    Inserted(Product),
    Edited(Product),
    Deleted(i64),
    Products(Vec<Product>),
    Exported(ExportSummary),
}

/// Builds an `ApplicationRuntime`, choosing which configuration and which database to use.
///
/// Unless told otherwise the configuration is loaded from the configuration file and the
/// database is the file named in it.
#[derive(Default)]
pub struct ApplicationRuntimeBuilder {
    config: Option<AppConfiguration>,
    database: Option<DatabaseConfig>,
}

impl ApplicationRuntimeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(mut self, config: AppConfiguration) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn use_in_memory_db(mut self) -> Self {
        self.database = Some(DatabaseConfig::SqliteInMemory);
        self
    }

    #[must_use]
    pub fn with_database_path(mut self, path: PathBuf) -> Self {
        self.database = Some(DatabaseConfig::SqliteOnDisk { path });
        self
    }

    /// # Errors
    ///
    /// - Returns an error if the configuration fails to load.
    /// - Returns an error if the database could not be opened or its schema not created.
    pub fn build(self) -> Result<ApplicationRuntime, CatalogError> {
        let config = match self.config {
            Some(config) => config,
            None => config::load()?,
        };

        let database = self.database.unwrap_or_else(|| DatabaseConfig::SqliteOnDisk {
            path: PathBuf::from(&config.application_data.database),
        });
        debug!("Using database {database:?}");

        let database_manager = DatabaseManager::new(&database)?;
        let product_service = Arc::new(ProductService::new(
            database_manager.create_product_repository(),
        ));

        Ok(ApplicationRuntime {
            config,
            product_service,
        })
    }
}

impl ApplicationRuntime {
    /// Creates a new instance of `ApplicationRuntime` from the configuration file, using the
    /// database file named in it.
    ///
    /// # Errors
    ///
    /// - Returns an error if the configuration fails to load.
    /// - Returns an error if the initialization of the product database fails.
    pub fn new() -> Result<Self, CatalogError> {
        ApplicationRuntimeBuilder::new().build()
    }

    #[must_use]
    pub fn config(&self) -> &AppConfiguration {
        &self.config
    }

    #[must_use]
    pub fn product_service(&self) -> Arc<ProductService> {
        self.product_service.clone()
    }

    /// Executes the specified `Operation` and returns the result.
    ///
    /// # Errors
    ///
    /// This function may return an error (`CatalogError`) in the following scenarios:
    ///
    /// - When the submitted form does not validate during `Operation::Insert` or
    ///   `Operation::Edit`. Nothing is written in this case.
    /// - When there is no product with the given id during `Operation::Edit` or
    ///   `Operation::Delete`.
    /// - When the database fails.
    /// - When the spreadsheet could not be written during `Operation::Export`.
    pub fn execute(&self, operation: Operation) -> Result<OperationResult, CatalogError> {
        match operation {
            Operation::Insert(form) => {
                let product = self.product_service.insert(&form)?;
                Ok(OperationResult::Inserted(product))
            }
            Operation::Edit { id, form } => {
                let product = self.product_service.edit(id, &form)?;
                Ok(OperationResult::Edited(product))
            }
            Operation::Delete(id) => {
                self.product_service.delete(id)?;
                Ok(OperationResult::Deleted(id))
            }
            Operation::List => Ok(OperationResult::Products(self.product_service.list()?)),
            Operation::Export(path) => {
                let products = self.product_service.list()?;
                let summary = export::to_file(&products, &path)?;
                Ok(OperationResult::Exported(summary))
            }
        }
    }
}
