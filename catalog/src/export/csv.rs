use std::fs::File;
use std::io;
use std::path::Path;

use ::csv::{Writer, WriterBuilder};
use log::debug;

use super::export_error;
use crate::error::CatalogError;
use crate::types::{Product, PRODUCT_COLUMNS};

/// Ensures we always create the CSV writer the same way. The header is written explicitly so
/// that an empty table still gets one.
fn create_csv_writer<W: io::Write>(file: W) -> Writer<W> {
    WriterBuilder::new().has_headers(false).from_writer(file)
}

/// Writes the header and one record per product, returns the number of records written.
pub(super) fn write(products: &[Product], path: &Path) -> Result<usize, CatalogError> {
    let file = File::create(path).map_err(|e| export_error(path, e))?;
    let mut csv_writer = create_csv_writer(file);

    debug!("Writing the CSV header");
    csv_writer
        .write_record(PRODUCT_COLUMNS)
        .map_err(|e| export_error(path, e))?;

    for product in products {
        csv_writer
            .serialize(product)
            .map_err(|e| export_error(path, e))?;
    }

    csv_writer.flush().map_err(|e| export_error(path, e))?;
    Ok(products.len())
}
