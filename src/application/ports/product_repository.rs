use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{Category, Price, Product, ProductAttribute, ProductTranslation};
use crate::domain::value_objects::{LanguageCode, ProductId};
use crate::domain::ProductFilter;
#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// One page of search results
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    /// Number of matches before paging; `None` when the filter is unpaged
    pub total: Option<i64>,
}

/// Port for reading catalog products
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Run the filtered search, plus the count query when paged
    async fn search(&self, filter: &ProductFilter) -> Result<ProductPage, RepositoryError>;

    /// Find a product that is not soft-deleted
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;

    async fn prices(&self, id: ProductId) -> Result<Vec<Price>, RepositoryError>;

    async fn categories(&self, id: ProductId) -> Result<Vec<Category>, RepositoryError>;

    /// All attribute pivot rows of the product, in every language
    async fn attributes(&self, id: ProductId) -> Result<Vec<ProductAttribute>, RepositoryError>;

    async fn translation(
        &self,
        id: ProductId,
        language: &LanguageCode,
    ) -> Result<Option<ProductTranslation>, RepositoryError>;
}
