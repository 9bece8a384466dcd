use axum::{middleware as axum_middleware, routing::get, Router};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;

use crate::api::handlers::{
    category_subtree_handler, category_tree_handler, health_handler, product_handler,
    readiness_handler, search_handler,
};
use crate::api::middleware::{cors, request_log};
use crate::api::openapi::swagger_ui;
use crate::application::use_cases::{
    CategoryTreeUseCase, GetProductUseCase, SearchProductsUseCase,
};

/// Application state container
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub search_use_case: Arc<SearchProductsUseCase>,
    pub product_use_case: Arc<GetProductUseCase>,
    pub category_use_case: Arc<CategoryTreeUseCase>,
    /// CORS origins; empty allows any
    pub allowed_origins: Vec<String>,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let search_state = Arc::clone(&state.search_use_case);
    let product_state = Arc::clone(&state.product_use_case);
    let category_state = Arc::clone(&state.category_use_case);

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/health/ready",
            get(readiness_handler).with_state(Arc::clone(&state.pool)),
        )
        .route("/v1/products", get(search_handler).with_state(search_state))
        .route(
            "/v1/products/{id}",
            get(product_handler).with_state(product_state),
        )
        .route(
            "/v1/categories/tree",
            get(category_tree_handler).with_state(Arc::clone(&category_state)),
        )
        .route(
            "/v1/categories/{id}/tree",
            get(category_subtree_handler).with_state(category_state),
        )
        .merge(swagger_ui())
        .layer(CompressionLayer::new())
        .layer(cors::create_cors_layer(&state.allowed_origins))
        .layer(axum_middleware::from_fn(
            request_log::request_log_middleware,
        ))
}
