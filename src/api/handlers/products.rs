use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::middleware::validation::validate_params;
use crate::application::dto::ProductDetailDto;
use crate::application::use_cases::GetProductUseCase;
use crate::domain::value_objects::LANGUAGE_CODE_REGEX;

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductDetailQuery {
    /// Translation language, e.g. `de` or `de-AT`
    #[validate(regex(
        path = *LANGUAGE_CODE_REGEX,
        message = "language must look like 'en' or 'en-US'"
    ))]
    pub language: Option<String>,
}

/// GET /v1/products/{id}
/// Product with prices, categories, attributes and optional translation
#[utoipa::path(
    get,
    path = "/v1/products/{id}",
    tag = "products",
    params(
        ("id" = i64, Path, description = "Product ID"),
        ProductDetailQuery
    ),
    responses(
        (status = 200, description = "Product found", body = ProductDetailDto),
        (status = 400, description = "Invalid product ID or language"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn product_handler(
    State(use_case): State<Arc<GetProductUseCase>>,
    Path(id): Path<String>,
    Query(query): Query<ProductDetailQuery>,
) -> Result<Json<ProductDetailDto>, ApiError> {
    validate_params(&query)?;

    let detail = use_case.execute(&id, query.language.as_deref()).await?;

    Ok(Json(detail))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_language_query_validation() {
        let ok = ProductDetailQuery {
            language: Some("de-AT".to_string()),
        };
        assert!(validate_params(&ok).is_ok());

        let missing = ProductDetailQuery { language: None };
        assert!(validate_params(&missing).is_ok());

        let bad = ProductDetailQuery {
            language: Some("deutsch".to_string()),
        };
        let err = validate_params(&bad).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.message().contains("language"));
    }
}
