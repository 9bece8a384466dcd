use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::errors::{CategoryUseCaseError, ProductUseCaseError};
use crate::application::ports::RepositoryError;

/// API error response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
        }));

        (self.status, body).into_response()
    }
}

/// Map a sqlx error to a message safe to return to clients
pub fn sanitize_db_error(error: &sqlx::Error) -> &'static str {
    match error {
        sqlx::Error::Configuration(_) => "Database configuration error",
        sqlx::Error::Database(_) => "Database operation error",
        sqlx::Error::Io(_) => "Database connection error",
        sqlx::Error::Tls(_) => "Database TLS error",
        sqlx::Error::Protocol(_) => "Database protocol error",
        sqlx::Error::RowNotFound => "Record not found",
        sqlx::Error::TypeNotFound { .. } => "Database type error",
        sqlx::Error::ColumnIndexOutOfBounds { .. } | sqlx::Error::ColumnNotFound(_) => {
            "Database column error"
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => "Database decode error",
        sqlx::Error::PoolTimedOut => "Database timeout",
        sqlx::Error::PoolClosed => "Database connection closed",
        sqlx::Error::WorkerCrashed => "Database worker error",
        _ => "Database error",
    }
}

/// Store failures are logged in full; clients get a generic message
fn repository_failure(err: RepositoryError) -> ApiError {
    tracing::error!(error = %err, "Repository failure");
    let message = match &err {
        RepositoryError::Database(e) => sanitize_db_error(e),
        RepositoryError::SerializationError(_) => "Stored data could not be decoded",
        RepositoryError::Internal(_) => "Internal error",
    };
    ApiError::internal_error(message)
}

// Convert use case errors to API errors

impl From<ProductUseCaseError> for ApiError {
    fn from(err: ProductUseCaseError) -> Self {
        match err {
            ProductUseCaseError::InvalidRequest(msg) => ApiError::bad_request(msg),
            ProductUseCaseError::Domain(e) => ApiError::bad_request(e.to_string()),
            ProductUseCaseError::NotFound(id) => {
                ApiError::not_found(format!("Product not found: {}", id))
            }
            ProductUseCaseError::Repository(e) => repository_failure(e),
        }
    }
}

impl From<CategoryUseCaseError> for ApiError {
    fn from(err: CategoryUseCaseError) -> Self {
        match err {
            CategoryUseCaseError::NotFound(id) => {
                ApiError::not_found(format!("Category not found: {}", id))
            }
            CategoryUseCaseError::Repository(e) => repository_failure(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;

    #[test]
    fn test_validation_errors_map_to_bad_request() {
        let err: ApiError = ProductUseCaseError::Domain(DomainError::IncompleteSort).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.message().contains("sortBy and sortDirection"));

        let err: ApiError =
            ProductUseCaseError::InvalidRequest("page must be an integer".to_string()).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err: ApiError = ProductUseCaseError::NotFound("9".to_string()).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Product not found: 9");

        let err: ApiError = CategoryUseCaseError::NotFound("3".to_string()).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_repository_errors_hide_details() {
        let err: ApiError = ProductUseCaseError::Repository(RepositoryError::Database(
            sqlx::Error::Configuration("password=secret".into()),
        ))
        .into();

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Database configuration error");
        assert!(!err.message().contains("secret"));

        let err: ApiError = CategoryUseCaseError::Repository(RepositoryError::Internal(
            "bind failed at $3".to_string(),
        ))
        .into();
        assert_eq!(err.message(), "Internal error");
    }

    #[test]
    fn test_db_error_sanitization() {
        assert_eq!(sanitize_db_error(&sqlx::Error::PoolTimedOut), "Database timeout");
        assert_eq!(sanitize_db_error(&sqlx::Error::RowNotFound), "Record not found");
        let io_err = sqlx::Error::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Connection refused",
        ));
        assert_eq!(sanitize_db_error(&io_err), "Database connection error");
    }
}
