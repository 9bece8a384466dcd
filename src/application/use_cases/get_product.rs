use std::sync::Arc;

use crate::application::dto::{AttributeDto, CategoryDto, PriceDto, ProductDetailDto, ProductDto};
use crate::application::errors::ProductUseCaseError;
use crate::application::ports::ProductRepository;
use crate::application::validation::{validate_language, validate_product_id};

/// Use case: load one product with its prices, categories and attributes
pub struct GetProductUseCase {
    product_repo: Arc<dyn ProductRepository>,
}

impl GetProductUseCase {
    pub fn new(product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { product_repo }
    }

    /// With a language, name and description come from the matching
    /// translation and attributes are limited to that language or none.
    pub async fn execute(
        &self,
        id: &str,
        language: Option<&str>,
    ) -> Result<ProductDetailDto, ProductUseCaseError> {
        let id = validate_product_id(id)?;
        let language = validate_language(language)?;

        let mut product = self
            .product_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProductUseCaseError::NotFound(id.to_string()))?;

        let mut applied = None;
        if let Some(language) = &language {
            if let Some(translation) = self.product_repo.translation(id, language).await? {
                product.translate(&translation);
                applied = Some(translation.language.to_string());
            }
        }

        let prices = self.product_repo.prices(id).await?;
        let categories = self.product_repo.categories(id).await?;
        let attributes = self
            .product_repo
            .attributes(id)
            .await?
            .into_iter()
            .filter(|attribute| match (&language, &attribute.language) {
                (None, _) | (_, None) => true,
                (Some(wanted), Some(own)) => wanted == own,
            })
            .map(AttributeDto::from)
            .collect();

        Ok(ProductDetailDto {
            product: ProductDto::from(product),
            prices: prices.into_iter().map(PriceDto::from).collect(),
            categories: categories.into_iter().map(CategoryDto::from).collect(),
            attributes,
            language: applied,
        })
    }
}
