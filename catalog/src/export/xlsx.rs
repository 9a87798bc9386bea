use std::path::Path;

use log::debug;
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet, XlsxError};

use super::{export_error, WORKSHEET_NAME};
use crate::error::CatalogError;
use crate::types::{Product, PRODUCT_COLUMNS};

/// Largest integer an Excel number (an IEEE double) holds exactly
const MAX_EXACT_NUMBER: i64 = 1 << 53;

/// Writes a single worksheet holding the header and one row per product, returns the number of
/// data rows written.
pub(super) fn write(products: &[Product], path: &Path) -> Result<usize, CatalogError> {
    let mut workbook = Workbook::new();
    fill_worksheet(workbook.add_worksheet(), products).map_err(|e| export_error(path, e))?;

    debug!("Saving workbook to {}", path.to_string_lossy());
    workbook.save(path).map_err(|e| export_error(path, e))?;
    Ok(products.len())
}

fn fill_worksheet(worksheet: &mut Worksheet, products: &[Product]) -> Result<(), XlsxError> {
    worksheet.set_name(WORKSHEET_NAME)?;

    let header_format = Format::new().set_bold();
    for (col, name) in (0..).zip(PRODUCT_COLUMNS) {
        worksheet.write_string_with_format(0, col, name, &header_format)?;
    }

    for (row, product) in (1..).zip(products) {
        write_integer(worksheet, row, 0, product.id)?;
        worksheet.write_string(row, 1, &product.name)?;
        worksheet.write_string(row, 2, &product.sector)?;
        worksheet.write_string(row, 3, &product.released)?;
        write_integer(worksheet, row, 4, product.qualification)?;
        write_integer(worksheet, row, 5, product.training)?;
        write_integer(worksheet, row, 6, product.manual_datasheet)?;
        write_integer(worksheet, row, 7, product.laboratory)?;
    }

    worksheet.autofit();
    Ok(())
}

/// Integers are written as numbers, unless a number would not hold them exactly
#[allow(clippy::cast_precision_loss)]
fn write_integer(
    worksheet: &mut Worksheet,
    row: RowNum,
    col: ColNum,
    value: i64,
) -> Result<(), XlsxError> {
    if value.unsigned_abs() <= MAX_EXACT_NUMBER.unsigned_abs() {
        worksheet.write_number(row, col, value as f64)?;
    } else {
        worksheet.write_string(row, col, value.to_string())?;
    }
    Ok(())
}
