use std::path::PathBuf;

use catalog::error::CatalogError;
use catalog::form::ProductForm;
use catalog::{ApplicationRuntime, Operation, OperationResult};

use crate::cli::{Del, Edit, Export, ProductFields};
use crate::table_report::table_report;

pub fn list(runtime: &ApplicationRuntime) -> Result<(), CatalogError> {
    match runtime.execute(Operation::List)? {
        OperationResult::Products(products) => table_report(&products),
        other => unexpected(&other),
    }
    Ok(())
}

pub fn add(runtime: &ApplicationRuntime, fields: ProductFields) -> Result<(), CatalogError> {
    match runtime.execute(Operation::Insert(fields.into()))? {
        OperationResult::Inserted(product) => {
            println!(
                "Added product id: {} name: {} qualification: {}",
                product.id, product.name, product.qualification
            );
            println!("To delete it: catalog-cli del --id {}", product.id);
        }
        other => unexpected(&other),
    }
    Ok(())
}

pub fn edit(runtime: &ApplicationRuntime, edit: Edit) -> Result<(), CatalogError> {
    let operation = Operation::Edit {
        id: edit.id,
        form: edit.fields.into(),
    };
    match runtime.execute(operation)? {
        OperationResult::Edited(product) => {
            println!(
                "Updated product id: {} name: {} qualification: {}",
                product.id, product.name, product.qualification
            );
        }
        other => unexpected(&other),
    }
    Ok(())
}

pub fn delete(runtime: &ApplicationRuntime, del: Del) -> Result<(), CatalogError> {
    match runtime.execute(Operation::Delete(del.id))? {
        OperationResult::Deleted(id) => println!("Product id {id} deleted"),
        other => unexpected(&other),
    }
    Ok(())
}

pub fn export(runtime: &ApplicationRuntime, export: Export) -> Result<(), CatalogError> {
    let path = export
        .output
        .unwrap_or_else(|| PathBuf::from(&runtime.config().export.default_path));
    match runtime.execute(Operation::Export(path))? {
        OperationResult::Exported(summary) => {
            println!(
                "Exported {} products as {} to {}",
                summary.rows,
                summary.format,
                summary.path.to_string_lossy()
            );
        }
        other => unexpected(&other),
    }
    Ok(())
}

fn unexpected(result: &OperationResult) {
    eprintln!("Internal error, unexpected result {result:?}");
}

impl From<ProductFields> for ProductForm {
    fn from(val: ProductFields) -> Self {
        ProductForm {
            name: val.name,
            sector: val.sector,
            released: val.released,
            training: val.training,
            manual_datasheet: val.manual,
            laboratory: val.lab,
        }
    }
}
