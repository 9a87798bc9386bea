//! Exports the product table to a spreadsheet file.
//!
//! Both formats hold a single table: a header row with the column names of the `produtos` table
//! followed by one row per product, in the order given.
use crate::config::DEFAULT_EXPORT_FILE_NAME;
use crate::error::CatalogError;
use crate::types::Product;
use log::info;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

mod csv;
mod xlsx;

/// Name of the single worksheet of an XLSX export
pub const WORKSHEET_NAME: &str = "produtos";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Csv,
}

impl ExportFormat {
    /// Chooses the format from the extension of `path` and returns the file to write.
    ///
    /// A path without an extension is exported as XLSX, with `.xlsx` appended to it. A directory,
    /// or a path ending in a separator, gets `products.xlsx` inside it, and a bare `.xlsx` or
    /// `.csv` file name gets `products` in front of it.
    ///
    /// # Errors
    /// Returns `CatalogError::UnsupportedExportFormat` for any extension other than
    /// `xlsx` and `csv`, regardless of case.
    pub fn for_path(path: &Path) -> Result<(ExportFormat, PathBuf), CatalogError> {
        let default_file = Path::new(DEFAULT_EXPORT_FILE_NAME);
        if path.is_dir() || ends_with_separator(path) {
            return Ok((ExportFormat::Xlsx, path.join(default_file)));
        }
        let file_name = path.file_name().map(|name| name.to_string_lossy().to_lowercase());
        match file_name.as_deref() {
            Some(".xlsx") => return Ok((ExportFormat::Xlsx, path.with_file_name(default_file))),
            Some(".csv") => {
                let file = path.with_file_name(default_file).with_extension("csv");
                return Ok((ExportFormat::Csv, file));
            }
            _ => {}
        }

        match path.extension().map(|ext| ext.to_string_lossy().to_lowercase()) {
            None => Ok((ExportFormat::Xlsx, path.with_extension("xlsx"))),
            Some(ext) if ext == "xlsx" => Ok((ExportFormat::Xlsx, path.to_path_buf())),
            Some(ext) if ext == "csv" => Ok((ExportFormat::Csv, path.to_path_buf())),
            Some(ext) => Err(CatalogError::UnsupportedExportFormat(ext)),
        }
    }
}

fn ends_with_separator(path: &Path) -> bool {
    let path = path.as_os_str().to_string_lossy();
    path.ends_with('/') || path.ends_with(std::path::MAIN_SEPARATOR)
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Xlsx => write!(f, "XLSX"),
            ExportFormat::Csv => write!(f, "CSV"),
        }
    }
}

/// What an export produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub format: ExportFormat,
    /// Number of data rows, the header row not included
    pub rows: usize,
}

/// Writes `products` to `path`, creating missing parent directories.
///
/// # Errors
/// Returns `CatalogError::UnsupportedExportFormat` if the extension of `path` is neither `xlsx`
/// nor `csv`, and `CatalogError::Export` if the file could not be written.
pub fn to_file(products: &[Product], path: &Path) -> Result<ExportSummary, CatalogError> {
    let (format, path) = ExportFormat::for_path(path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| export_error(&path, e))?;
        }
    }

    let rows = match format {
        ExportFormat::Xlsx => xlsx::write(products, &path),
        ExportFormat::Csv => csv::write(products, &path),
    }?;

    info!(
        "Exported {rows} products as {format} to {}",
        path.to_string_lossy()
    );
    Ok(ExportSummary { path, format, rows })
}

fn export_error(path: &Path, reason: impl Display) -> CatalogError {
    CatalogError::Export {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
