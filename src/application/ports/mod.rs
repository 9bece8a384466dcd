mod category_repository;
mod product_repository;

pub use category_repository::CategoryRepository;
pub use product_repository::{ProductPage, ProductRepository, RepositoryError};

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use product_repository::MockProductRepository;
