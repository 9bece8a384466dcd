use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::application::dto::{CategoryNodeDto, CategoryTreeResponse};
use crate::application::use_cases::CategoryTreeUseCase;

/// GET /v1/categories/tree
#[utoipa::path(
    get,
    path = "/v1/categories/tree",
    tag = "categories",
    responses(
        (status = 200, description = "Nested category tree", body = CategoryTreeResponse),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn category_tree_handler(
    State(use_case): State<Arc<CategoryTreeUseCase>>,
) -> Result<Json<CategoryTreeResponse>, ApiError> {
    Ok(Json(use_case.tree().await?))
}

/// GET /v1/categories/{id}/tree
#[utoipa::path(
    get,
    path = "/v1/categories/{id}/tree",
    tag = "categories",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Subtree rooted at the category", body = CategoryNodeDto),
        (status = 400, description = "Invalid category ID"),
        (status = 404, description = "Category not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn category_subtree_handler(
    State(use_case): State<Arc<CategoryTreeUseCase>>,
    Path(id): Path<String>,
) -> Result<Json<CategoryNodeDto>, ApiError> {
    let id = id
        .trim()
        .parse::<i64>()
        .map_err(|_| ApiError::bad_request(format!("Invalid category ID: {}", id)))?;

    Ok(Json(use_case.subtree(id).await?))
}
