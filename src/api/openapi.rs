use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::health::{HealthResponse, ReadinessResponse};
use crate::application::dto::{
    AttributeDto, CategoryDto, CategoryNodeDto, CategoryTreeResponse, PriceDto, ProductDetailDto,
    ProductDto, SearchResponse,
};

/// OpenAPI specification for the product catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Catalog API",
        version = "1.0.0",
        description = "Read-only product catalog with attribute, category and price search"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::health::readiness_handler,
        crate::api::handlers::search::search_handler,
        crate::api::handlers::products::product_handler,
        crate::api::handlers::categories::category_tree_handler,
        crate::api::handlers::categories::category_subtree_handler,
    ),
    components(
        schemas(
            ProductDto,
            SearchResponse,
            PriceDto,
            CategoryDto,
            AttributeDto,
            ProductDetailDto,
            CategoryNodeDto,
            CategoryTreeResponse,
            HealthResponse,
            ReadinessResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "products", description = "Product search and detail"),
        (name = "categories", description = "Category tree")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI route
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
