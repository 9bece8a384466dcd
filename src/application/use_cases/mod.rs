mod category_tree;
mod get_product;
mod search_products;

pub use category_tree::CategoryTreeUseCase;
pub use get_product::GetProductUseCase;
pub use search_products::SearchProductsUseCase;
