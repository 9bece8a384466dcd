//! Error types shared by the catalog use cases

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::errors::DomainError;

/// Error type for product use cases (search, detail)
#[derive(Debug, Error)]
pub enum ProductUseCaseError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Product not found: {0}")]
    NotFound(String),
}

/// Error type for category tree use cases
#[derive(Debug, Error)]
pub enum CategoryUseCaseError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Category not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_use_case_error_from_domain_error() {
        let err: ProductUseCaseError = DomainError::IncompletePagination.into();

        assert!(matches!(err, ProductUseCaseError::Domain(_)));
        assert!(err.to_string().contains("Domain error"));
        assert!(err.to_string().contains("page and pageSize"));
    }

    #[test]
    fn test_product_use_case_error_from_repository_error() {
        let repo_err = RepositoryError::Database(sqlx::Error::RowNotFound);
        let err: ProductUseCaseError = repo_err.into();

        assert!(matches!(err, ProductUseCaseError::Repository(_)));
        assert!(err.to_string().contains("Repository error"));
    }

    #[test]
    fn test_product_use_case_error_invalid_request() {
        let err = ProductUseCaseError::InvalidRequest("minPrice must be an integer".to_string());

        assert!(err.to_string().contains("Invalid request"));
        assert!(err.to_string().contains("minPrice"));
    }

    #[test]
    fn test_category_use_case_error_display() {
        let err = CategoryUseCaseError::NotFound("17".to_string());
        assert_eq!(err.to_string(), "Category not found: 17");

        let err: CategoryUseCaseError =
            RepositoryError::SerializationError("bad row".to_string()).into();
        assert!(err.to_string().contains("bad row"));
    }
}
