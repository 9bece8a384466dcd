use async_trait::async_trait;

use crate::application::ports::RepositoryError;
use crate::domain::entities::Category;
#[cfg(test)]
use mockall::automock;

/// Port for reading the category table
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Every category row, unordered
    async fn list_all(&self) -> Result<Vec<Category>, RepositoryError>;
}
