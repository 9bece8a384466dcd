use async_trait::async_trait;
use sqlx::PgPool;

use crate::application::ports::{CategoryRepository, RepositoryError};
use crate::domain::entities::Category;

pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn list_all(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, parent_id
            FROM categories
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(count = rows.len(), "Loaded categories");

        Ok(rows
            .into_iter()
            .map(|r| Category::new(r.id, r.name, r.parent_id))
            .collect())
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    parent_id: Option<i64>,
}
