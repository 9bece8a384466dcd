use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid SKU: {0}")]
    InvalidSku(String),

    #[error("Invalid product ID: {0}")]
    InvalidProductId(String),

    #[error("Invalid price range: {0}")]
    InvalidPriceRange(String),

    #[error("Invalid sortBy '{0}'; accepted values are name, price, category")]
    InvalidSortField(String),

    #[error(
        "Invalid sortDirection '{0}'; accepted values are asc, ascending, desc, descending"
    )]
    InvalidSortDirection(String),

    #[error("sortBy and sortDirection must be given together")]
    IncompleteSort,

    #[error("page and pageSize must be given together")]
    IncompletePagination,

    #[error("page must be >= 0, got {0}")]
    InvalidPage(i64),

    #[error("pageSize must be > 0 and at most {max}, got {size}")]
    InvalidPageSize { size: i64, max: i64 },

    #[error("page {page} with pageSize {page_size} overflows the row offset")]
    PaginationOverflow { page: i64, page_size: i64 },

    #[error("Invalid category filter: {0}")]
    InvalidCategoryFilter(String),

    #[error("Invalid attribute filter: {0}")]
    InvalidAttributeFilter(String),

    #[error("Invalid language code: {0}")]
    InvalidLanguage(String),
}
