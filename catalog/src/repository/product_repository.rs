//! A trait for managing products in a storage repository.
//!
//! Writes only accept a validated `ProductDraft`, the qualification is derived from the
//! draft's sub-scores by the implementation and is never supplied by the caller.
use crate::error::CatalogError;
use crate::types::{Product, ProductDraft};

#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    ///
    /// Adds a product to the repository.
    ///
    /// # Arguments
    /// * `draft` - The validated values of the new product.
    ///
    /// # Returns
    /// * `Ok(Product)` - The stored product, holding its newly assigned id.
    /// * `Err(CatalogError)` - If the product could not be written.
    ///
    /// # Errors
    /// * This function returns a `CatalogError` if the operation fails.
    fn add_product(&self, draft: &ProductDraft) -> Result<Product, CatalogError>;

    ///
    /// Replaces every field of an existing product, keeping its id.
    ///
    /// # Errors
    /// * `CatalogError::ProductNotFound` if there is no product with the given id.
    /// * Any other `CatalogError` if the update fails.
    fn update_product(&self, id: i64, draft: &ProductDraft) -> Result<Product, CatalogError>;

    ///
    /// Removes the product with the given id, leaving all other products untouched.
    ///
    /// # Errors
    /// * `CatalogError::ProductNotFound` if there is no product with the given id.
    fn remove_product(&self, id: i64) -> Result<(), CatalogError>;

    /// Finds a product by its id, `Ok(None)` if there is none.
    ///
    /// # Errors
    /// * Returns a `CatalogError` if the query fails.
    fn find_product_by_id(&self, id: i64) -> Result<Option<Product>, CatalogError>;

    /// Retrieves every product, ordered by id.
    ///
    /// # Errors
    /// * Returns a `CatalogError` if the query fails.
    fn find_all_products(&self) -> Result<Vec<Product>, CatalogError>;

    ///
    /// Retrieves the total count of products in the repository.
    ///
    /// # Errors
    /// * Returns a `CatalogError` if the operation fails.
    fn get_count(&self) -> Result<i64, CatalogError>;
}
