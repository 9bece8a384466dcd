pub mod category_tree;
pub mod entities;
pub mod errors;
pub mod product_filter;
pub mod value_objects;

pub use category_tree::{CategoryNode, CategoryTree};
pub use product_filter::ProductFilter;
