pub mod categories;
pub mod health;
pub mod products;
pub mod search;

pub use categories::{category_subtree_handler, category_tree_handler};
pub use health::{health_handler, readiness_handler};
pub use products::product_handler;
pub use search::search_handler;
