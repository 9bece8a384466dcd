use std::sync::Arc;

use crate::application::dto::{ProductDto, SearchRequest, SearchResponse};
use crate::application::errors::ProductUseCaseError;
use crate::application::ports::ProductRepository;
use crate::application::validation::validate_search_request;

/// Use case: filtered, sorted and paged product search
pub struct SearchProductsUseCase {
    product_repo: Arc<dyn ProductRepository>,
    max_page_size: i64,
}

impl SearchProductsUseCase {
    pub fn new(product_repo: Arc<dyn ProductRepository>, max_page_size: i64) -> Self {
        Self {
            product_repo,
            max_page_size,
        }
    }

    pub async fn execute(
        &self,
        request: SearchRequest,
    ) -> Result<SearchResponse, ProductUseCaseError> {
        // 1. Validate everything before touching the store
        let filter = validate_search_request(&request, self.max_page_size)?;

        // 2. Data query, plus the count query when paged
        let page = self.product_repo.search(&filter).await?;

        // 3. Unpaged searches count what they returned
        let count = page.total.unwrap_or(page.products.len() as i64);
        let products: Vec<ProductDto> = page.products.into_iter().map(ProductDto::from).collect();

        tracing::debug!(
            returned = products.len(),
            count,
            paged = filter.pagination().is_some(),
            "Product search completed"
        );

        Ok(SearchResponse { products, count })
    }
}
