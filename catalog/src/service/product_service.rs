//! This module provides the implementation of `ProductService`, the service responsible for
//! managing the products of the catalog. Form submissions are validated here, before anything
//! reaches the repository, so a rejected submission never changes the stored table.
use crate::error::CatalogError;
use crate::form::ProductForm;
use crate::repository::product_repository::ProductRepository;
use crate::types::Product;
use log::{debug, info};
use std::sync::Arc;

pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    /// Creates a new instance of `ProductService`.
    ///
    /// # Arguments
    ///
    /// * `repo` - A shared reference to a type that implements the `ProductRepository` trait.
    pub(crate) fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// Validates the form and stores it as a new product.
    ///
    /// # Returns
    ///
    /// The stored `Product`, with its assigned id and derived qualification.
    ///
    /// # Errors
    ///
    /// `CatalogError::InvalidInput` if the form does not validate, in which case nothing is
    /// written. Any other `CatalogError` if the insert fails.
    pub fn insert(&self, form: &ProductForm) -> Result<Product, CatalogError> {
        let draft = form.validate()?;
        let product = self.repo.add_product(&draft)?;
        info!(
            "Inserted product {} '{}' with qualification {}",
            product.id, product.name, product.qualification
        );
        Ok(product)
    }

    /// Validates the form and replaces every field of the product with the given id.
    ///
    /// # Errors
    ///
    /// `CatalogError::InvalidInput` if the form does not validate, `CatalogError::ProductNotFound`
    /// if there is no such product.
    pub fn edit(&self, id: i64, form: &ProductForm) -> Result<Product, CatalogError> {
        let draft = form.validate()?;
        let product = self.repo.update_product(id, &draft)?;
        info!(
            "Updated product {} '{}', qualification is now {}",
            product.id, product.name, product.qualification
        );
        Ok(product)
    }

    /// Removes the product with the given id.
    ///
    /// # Errors
    ///
    /// `CatalogError::ProductNotFound` if there is no such product.
    pub fn delete(&self, id: i64) -> Result<(), CatalogError> {
        self.repo.remove_product(id)?;
        info!("Deleted product {id}");
        Ok(())
    }

    /// Finds a product by its id.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the query fails.
    pub fn find(&self, id: i64) -> Result<Option<Product>, CatalogError> {
        self.repo.find_product_by_id(id)
    }

    /// Every product, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the query fails.
    pub fn list(&self) -> Result<Vec<Product>, CatalogError> {
        let products = self.repo.find_all_products()?;
        debug!("Retrieved {} products", products.len());
        Ok(products)
    }

    /// # Errors
    ///
    /// Returns a `CatalogError` if the query fails.
    pub fn count(&self) -> Result<i64, CatalogError> {
        self.repo.get_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::product_repository::MockProductRepository;
    use crate::types::{ProductDraft, Scores};
    use mockall::predicate::*;

    fn form(training: &str, released: &str) -> ProductForm {
        ProductForm {
            name: "Intercom".to_string(),
            sector: "Access control".to_string(),
            released: released.to_string(),
            training: training.to_string(),
            manual_datasheet: "4".to_string(),
            laboratory: "7".to_string(),
        }
    }

    #[test]
    fn test_insert_passes_validated_draft() {
        let mut repo = MockProductRepository::new();
        repo.expect_add_product()
            .withf(|draft: &ProductDraft| {
                draft.scores == Scores::new(5, 4, 7) && draft.released.to_string() == "2022-12-01"
            })
            .times(1)
            .returning(|draft| Ok(Product::from_draft(1, draft)));

        let service = ProductService::new(Arc::new(repo));
        let product = service.insert(&form("5", "2022-12-01")).unwrap();
        // (15 + 4 + 14) / 6 = 5.5
        assert_eq!(product.qualification, 6);
    }

    #[test]
    fn test_insert_with_bad_number_never_reaches_repository() {
        let mut repo = MockProductRepository::new();
        repo.expect_add_product().never();

        let service = ProductService::new(Arc::new(repo));
        let err = service.insert(&form("five", "2022-12-01")).unwrap_err();
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_edit_with_bad_date_never_reaches_repository() {
        let mut repo = MockProductRepository::new();
        repo.expect_update_product().never();

        let service = ProductService::new(Arc::new(repo));
        let err = service.edit(3, &form("5", "2022-12-1")).unwrap_err();
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_edit_uses_given_id() {
        let mut repo = MockProductRepository::new();
        repo.expect_update_product()
            .with(eq(9), always())
            .times(1)
            .returning(|id, draft| Ok(Product::from_draft(id, draft)));

        let service = ProductService::new(Arc::new(repo));
        assert_eq!(service.edit(9, &form("1", "2022-12-01")).unwrap().id, 9);
    }

    #[test]
    fn test_delete_propagates_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_remove_product()
            .with(eq(4))
            .times(1)
            .returning(|id| Err(CatalogError::ProductNotFound(id)));

        let service = ProductService::new(Arc::new(repo));
        let err = service.delete(4).unwrap_err();
        assert!(matches!(err, CatalogError::ProductNotFound(4)));
        assert!(!err.is_validation_error());
    }
}
