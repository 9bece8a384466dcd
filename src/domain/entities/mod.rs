mod attribute;
mod category;
mod price;
mod product;
mod translation;

pub use attribute::ProductAttribute;
pub use category::Category;
pub use price::Price;
pub use product::Product;
pub use translation::ProductTranslation;
