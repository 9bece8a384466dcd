//! Request validation shared by the product use cases
//!
//! Raw HTTP parameters arrive as text. These helpers turn them into domain
//! values, so every validation error is reported before a query runs.

use crate::application::dto::SearchRequest;
use crate::application::errors::ProductUseCaseError;
use crate::domain::value_objects::{LanguageCode, Pagination, PriceRange, ProductId, Sku, Sort};
use crate::domain::ProductFilter;

/// Parse an optional integer parameter, naming it in the error
fn parse_int(name: &str, value: Option<&str>) -> Result<Option<i64>, ProductUseCaseError> {
    value
        .map(|raw| {
            raw.trim().parse::<i64>().map_err(|_| {
                ProductUseCaseError::InvalidRequest(format!(
                    "{} must be an integer, got '{}'",
                    name, raw
                ))
            })
        })
        .transpose()
}

/// Build a validated `ProductFilter` from raw search parameters
pub fn validate_search_request(
    request: &SearchRequest,
    max_page_size: i64,
) -> Result<ProductFilter, ProductUseCaseError> {
    let mut filter = ProductFilter::new();

    if let Some(sku) = request.sku.as_deref() {
        filter = filter.with_sku(Sku::new(sku)?);
    }

    let min_price = parse_int("minPrice", request.min_price.as_deref())?;
    let max_price = parse_int("maxPrice", request.max_price.as_deref())?;
    filter = filter.with_price(PriceRange::new(min_price, max_price)?);

    filter = filter.with_categories(request.categories.iter().map(String::as_str))?;
    filter = filter.with_attributes(
        request
            .attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str())),
    )?;

    let sort = Sort::from_params(
        request.sort_by.as_deref(),
        request.sort_direction.as_deref(),
    )?;
    filter = filter.with_sort(sort);

    let page = parse_int("page", request.page.as_deref())?;
    let page_size = parse_int("pageSize", request.page_size.as_deref())?;
    let pagination = Pagination::from_params(page, page_size, max_page_size)?;

    Ok(filter.with_pagination(pagination))
}

/// Validate a product id path segment
pub fn validate_product_id(id: &str) -> Result<ProductId, ProductUseCaseError> {
    ProductId::from_string(id).map_err(|e| ProductUseCaseError::InvalidRequest(e.to_string()))
}

/// Validate an optional language code
pub fn validate_language(
    language: Option<&str>,
) -> Result<Option<LanguageCode>, ProductUseCaseError> {
    language
        .map(|code| LanguageCode::new(code).map_err(ProductUseCaseError::from))
        .transpose()
}
