use std::sync::Arc;

use crate::application::dto::{CategoryNodeDto, CategoryTreeResponse};
use crate::application::errors::CategoryUseCaseError;
use crate::application::ports::CategoryRepository;
use crate::domain::CategoryTree;

/// Use case: nested category tree
pub struct CategoryTreeUseCase {
    category_repo: Arc<dyn CategoryRepository>,
}

impl CategoryTreeUseCase {
    pub fn new(category_repo: Arc<dyn CategoryRepository>) -> Self {
        Self { category_repo }
    }

    async fn load(&self) -> Result<CategoryTree, CategoryUseCaseError> {
        let categories = self.category_repo.list_all().await?;
        Ok(CategoryTree::build(categories))
    }

    /// Whole tree, roots first
    pub async fn tree(&self) -> Result<CategoryTreeResponse, CategoryUseCaseError> {
        let tree = self.load().await?;
        let count = tree.len();
        let roots = tree.roots().into_iter().map(CategoryNodeDto::from).collect();

        Ok(CategoryTreeResponse { roots, count })
    }

    /// Subtree rooted at `id`
    pub async fn subtree(&self, id: i64) -> Result<CategoryNodeDto, CategoryUseCaseError> {
        let tree = self.load().await?;
        tree.subtree(id)
            .map(CategoryNodeDto::from)
            .ok_or_else(|| CategoryUseCaseError::NotFound(id.to_string()))
    }
}
