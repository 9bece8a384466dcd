use axum::{
    extract::{Query, State},
    response::Json,
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::dto::{SearchRequest, SearchResponse};
use crate::application::use_cases::SearchProductsUseCase;

/// Collect raw query pairs into a search request.
///
/// `categories` may repeat (also as `categories[]`); `attributes[key]=value`
/// adds one attribute pair. Scalar parameters keep their last value and
/// unknown parameters are ignored.
pub fn search_request_from_pairs(pairs: Vec<(String, String)>) -> SearchRequest {
    let mut request = SearchRequest::default();

    for (key, value) in pairs {
        match key.as_str() {
            "sku" => request.sku = Some(value),
            "minPrice" => request.min_price = Some(value),
            "maxPrice" => request.max_price = Some(value),
            "categories" | "categories[]" => request.categories.push(value),
            "sortBy" => request.sort_by = Some(value),
            "sortDirection" => request.sort_direction = Some(value),
            "page" => request.page = Some(value),
            "pageSize" => request.page_size = Some(value),
            other => {
                if let Some(name) = other
                    .strip_prefix("attributes[")
                    .and_then(|rest| rest.strip_suffix(']'))
                {
                    request.attributes.push((name.to_string(), value));
                }
            }
        }
    }

    request
}

/// GET /v1/products
/// Search products by SKU, price, categories and attributes
#[utoipa::path(
    get,
    path = "/v1/products",
    tag = "products",
    params(
        ("sku" = Option<String>, Query, description = "Exact SKU match"),
        ("minPrice" = Option<i64>, Query, description = "Inclusive lower price bound in minor units"),
        ("maxPrice" = Option<i64>, Query, description = "Inclusive upper price bound in minor units"),
        ("categories" = Option<Vec<String>>, Query, description = "Category names; products must be in all of them"),
        ("attributes[key]" = Option<String>, Query, description = "Attribute value for `key`; all given pairs must match"),
        ("sortBy" = Option<String>, Query, description = "name, price or category; requires sortDirection"),
        ("sortDirection" = Option<String>, Query, description = "asc, ascending, desc or descending; requires sortBy"),
        ("page" = Option<i64>, Query, description = "Zero-based page; requires pageSize"),
        ("pageSize" = Option<i64>, Query, description = "Page size; requires page")
    ),
    responses(
        (status = 200, description = "Matching products", body = SearchResponse),
        (status = 400, description = "Invalid search parameters"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn search_handler(
    State(use_case): State<Arc<SearchProductsUseCase>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResponse>, ApiError> {
    let request = search_request_from_pairs(pairs);
    let response = use_case.execute(request).await?;

    Ok(Json(response))
}
