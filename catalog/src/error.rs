use std::{io, path::PathBuf};

use crate::form::InvalidProductForm;
use thiserror::Error;

#[allow(clippy::module_name_repetitions)]
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unable to load the application configuration file {path:?}")]
    ApplicationConfig { path: PathBuf, source: io::Error },
    #[error("Unable to parse contents of {path}")]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Unable to serialize the application configuration: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Unable to create configuration file {path}")]
    ConfigFileCreation { path: PathBuf },
    #[error("Unable to open DBMS in file {path}: {reason}")]
    OpenDbms { path: String, reason: String },
    #[error("SQL dbms error: {0}")]
    Sql(String),
    #[error("Unable to create database SQL schema: {0}")]
    DatabaseError(String),
    #[error("Mutex locking error")]
    LockPoisoned,
    #[error("No product with id {0}")]
    ProductNotFound(i64),
    #[error("{0}")]
    InvalidInput(InvalidProductForm),
    #[error("Unable to export to {path}: {reason}")]
    Export { path: PathBuf, reason: String },
    #[error("Unsupported export format '{0}', use .xlsx or .csv")]
    UnsupportedExportFormat(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CatalogError {
    /// Tells a rejected user submission apart from storage, configuration and export failures.
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        matches!(self, CatalogError::InvalidInput(_))
    }
}

impl From<rusqlite::Error> for CatalogError {
    fn from(err: rusqlite::Error) -> Self {
        CatalogError::Sql(format!("Sqlite error {err}"))
    }
}

impl From<InvalidProductForm> for CatalogError {
    fn from(err: InvalidProductForm) -> Self {
        CatalogError::InvalidInput(err)
    }
}
