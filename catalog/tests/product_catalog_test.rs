#[cfg(test)]
#[allow(dead_code)]
mod test_helpers;

use crate::test_helpers::common::{create_on_disk_runtime, create_test_runtime};
use crate::test_helpers::fixtures::{product_form, product_forms, TEST_PRODUCT_NAME};
use calamine::{open_workbook, Reader, Xlsx};
use catalog::error::CatalogError;
use catalog::export::{ExportFormat, WORKSHEET_NAME};
use catalog::form::ProductForm;
use catalog::qualification::qualification;
use catalog::types::{Product, PRODUCT_COLUMNS};
use catalog::{ApplicationRuntime, Operation, OperationResult};
use std::collections::HashSet;

fn list(runtime: &ApplicationRuntime) -> Vec<Product> {
    match runtime.execute(Operation::List).expect("List failed") {
        OperationResult::Products(products) => products,
        other => panic!("Unexpected result {other:?}"),
    }
}

fn insert(runtime: &ApplicationRuntime, form: ProductForm) -> Result<Product, CatalogError> {
    match runtime.execute(Operation::Insert(form))? {
        OperationResult::Inserted(product) => Ok(product),
        other => panic!("Unexpected result {other:?}"),
    }
}

#[test]
fn test_insert_stores_one_row_with_derived_qualification() -> Result<(), CatalogError> {
    let runtime = create_test_runtime()?;

    let product = insert(&runtime, product_form(0, 10, 0))?;

    let products = list(&runtime);
    assert_eq!(products.len(), 1);
    assert_eq!(products[0], product);
    assert_eq!(products[0].name, TEST_PRODUCT_NAME);
    assert_eq!(products[0].qualification, 2);
    Ok(())
}

#[test]
fn test_inserted_ids_are_unique() -> Result<(), CatalogError> {
    let runtime = create_test_runtime()?;
    let mut ids = HashSet::new();

    for form in product_forms() {
        let product = insert(&runtime, form)?;
        assert!(ids.insert(product.id), "id {} reused", product.id);
    }
    assert_eq!(runtime.product_service().count()?, 3);
    for product in list(&runtime) {
        assert_eq!(
            product.qualification,
            qualification(product.training, product.manual_datasheet, product.laboratory)
        );
    }
    Ok(())
}

#[test]
fn test_edit_preserves_id_and_recomputes_qualification() -> Result<(), CatalogError> {
    let runtime = create_test_runtime()?;
    let original = insert(&runtime, product_form(10, 10, 10))?;
    let untouched = insert(&runtime, product_form(1, 1, 1))?;

    let form = ProductForm {
        name: "Renamed".to_string(),
        released: "2025-01-02".to_string(),
        ..product_form(10, 0, 0)
    };
    let result = runtime.execute(Operation::Edit {
        id: original.id,
        form,
    })?;
    let edited = match result {
        OperationResult::Edited(edited) => edited,
        other => panic!("Unexpected result {other:?}"),
    };

    assert_eq!(edited.id, original.id);
    assert_eq!(edited.qualification, 5);

    let stored = runtime.product_service().find(original.id)?.unwrap();
    assert_eq!(stored, edited);
    assert_eq!(stored.released, "2025-01-02");
    assert_eq!(
        runtime.product_service().find(untouched.id)?.unwrap(),
        untouched
    );
    Ok(())
}

#[test]
fn test_delete_removes_exactly_one_product() -> Result<(), CatalogError> {
    let runtime = create_test_runtime()?;
    let products: Vec<Product> = product_forms()
        .into_iter()
        .map(|form| insert(&runtime, form))
        .collect::<Result<_, _>>()?;

    let result = runtime.execute(Operation::Delete(products[1].id))?;
    assert!(matches!(result, OperationResult::Deleted(id) if id == products[1].id));

    assert_eq!(
        list(&runtime),
        vec![products[0].clone(), products[2].clone()]
    );
    Ok(())
}

#[test]
fn test_delete_unknown_id_is_reported() -> Result<(), CatalogError> {
    let runtime = create_test_runtime()?;
    insert(&runtime, product_form(1, 2, 3))?;

    let err = runtime.execute(Operation::Delete(999)).unwrap_err();
    assert!(matches!(err, CatalogError::ProductNotFound(999)));
    assert_eq!(list(&runtime).len(), 1);
    Ok(())
}

#[test]
fn test_non_numeric_input_leaves_table_unchanged() -> Result<(), CatalogError> {
    let runtime = create_test_runtime()?;
    let existing = insert(&runtime, product_form(4, 4, 4))?;

    let bad_insert = ProductForm {
        laboratory: "lots".to_string(),
        ..product_form(1, 1, 1)
    };
    let err = runtime.execute(Operation::Insert(bad_insert)).unwrap_err();
    assert!(err.is_validation_error());

    let bad_edit = ProductForm {
        training: "3.5".to_string(),
        ..product_form(1, 1, 1)
    };
    let err = runtime
        .execute(Operation::Edit {
            id: existing.id,
            form: bad_edit,
        })
        .unwrap_err();
    assert!(err.is_validation_error());

    assert_eq!(list(&runtime), vec![existing]);
    Ok(())
}

#[test]
fn test_bad_date_leaves_table_unchanged() -> Result<(), CatalogError> {
    let runtime = create_test_runtime()?;
    let existing = insert(&runtime, product_form(4, 4, 4))?;

    for released in ["18/03/2024", "2024-3-18", "2024-02-30", ""] {
        let form = ProductForm {
            released: released.to_string(),
            ..product_form(1, 1, 1)
        };
        assert!(runtime
            .execute(Operation::Insert(form.clone()))
            .unwrap_err()
            .is_validation_error());
        assert!(runtime
            .execute(Operation::Edit {
                id: existing.id,
                form
            })
            .unwrap_err()
            .is_validation_error());
    }

    assert_eq!(list(&runtime), vec![existing]);
    Ok(())
}

#[test]
fn test_export_has_one_row_per_product_plus_header() -> Result<(), CatalogError> {
    let runtime = create_test_runtime()?;
    for form in product_forms() {
        insert(&runtime, form)?;
    }
    let tmp_dir = tempfile::tempdir()?;
    let path = tmp_dir.path().join("products.csv");

    let result = runtime.execute(Operation::Export(path.clone()))?;
    let summary = match result {
        OperationResult::Exported(summary) => summary,
        other => panic!("Unexpected result {other:?}"),
    };
    assert_eq!(summary.format, ExportFormat::Csv);
    assert_eq!(summary.rows, 3);

    let contents = std::fs::read_to_string(&path)?;
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], PRODUCT_COLUMNS.join(","));
    Ok(())
}

#[test]
fn test_xlsx_export_has_one_row_per_product_plus_header() -> Result<(), CatalogError> {
    let runtime = create_test_runtime()?;
    for form in product_forms() {
        insert(&runtime, form)?;
    }
    let tmp_dir = tempfile::tempdir()?;

    let result = runtime.execute(Operation::Export(tmp_dir.path().join("report.xlsx")))?;
    let summary = match result {
        OperationResult::Exported(summary) => summary,
        other => panic!("Unexpected result {other:?}"),
    };
    assert_eq!(summary.format, ExportFormat::Xlsx);
    assert_eq!(summary.rows, 3);

    let mut workbook: Xlsx<_> = open_workbook(&summary.path).expect("Unable to open workbook");
    assert_eq!(workbook.sheet_names(), [WORKSHEET_NAME]);
    let range = workbook
        .worksheet_range(WORKSHEET_NAME)
        .expect("No products worksheet");
    assert_eq!(range.height(), 4);

    let header: Vec<String> = range
        .rows()
        .next()
        .expect("No header row")
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(header, PRODUCT_COLUMNS);

    let names: Vec<String> = range.rows().skip(1).map(|row| row[1].to_string()).collect();
    let stored: Vec<String> = list(&runtime).into_iter().map(|p| p.name).collect();
    assert_eq!(names, stored);
    Ok(())
}

#[test]
fn test_products_survive_reopening_the_database() -> Result<(), CatalogError> {
    let tmp_dir = tempfile::tempdir()?;
    let path = tmp_dir.path().join("catalog").join("products.db");

    let inserted = {
        let runtime = create_on_disk_runtime(&path)?;
        insert(&runtime, product_form(7, 7, 7))?
    };

    let runtime = create_on_disk_runtime(&path)?;
    assert_eq!(list(&runtime), vec![inserted]);
    Ok(())
}
