mod postgres_category_repository;
mod postgres_product_repository;
pub mod query_builder;

pub use postgres_category_repository::PostgresCategoryRepository;
pub use postgres_product_repository::PostgresProductRepository;
