use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Zero-based page request; the row offset is `page * page_size`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pagination {
    page_size: i64,
    offset: i64,
}

impl Pagination {
    /// Both parameters must be present or both absent. `max_page_size`
    /// bounds `page_size` from above.
    pub fn from_params(
        page: Option<i64>,
        page_size: Option<i64>,
        max_page_size: i64,
    ) -> Result<Option<Self>, DomainError> {
        let (page, page_size) = match (page, page_size) {
            (None, None) => return Ok(None),
            (Some(page), Some(page_size)) => (page, page_size),
            _ => return Err(DomainError::IncompletePagination),
        };

        if page < 0 {
            return Err(DomainError::InvalidPage(page));
        }

        if page_size <= 0 || page_size > max_page_size {
            return Err(DomainError::InvalidPageSize {
                size: page_size,
                max: max_page_size,
            });
        }

        let offset = page
            .checked_mul(page_size)
            .ok_or(DomainError::PaginationOverflow { page, page_size })?;

        Ok(Some(Self {
            page_size,
            offset,
        }))
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }
}
