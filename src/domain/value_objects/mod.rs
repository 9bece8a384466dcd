mod language_code;
mod pagination;
mod price_range;
mod product_id;
mod sku;
mod sort;

pub(crate) use language_code::LANGUAGE_CODE_REGEX;
pub use language_code::LanguageCode;
pub use pagination::Pagination;
pub use price_range::PriceRange;
pub use product_id::ProductId;
pub use sku::Sku;
pub use sort::{Sort, SortDirection, SortField};
