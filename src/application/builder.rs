use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::api::router::AppState;
use crate::application::{
    ports::{CategoryRepository, ProductRepository},
    use_cases::{CategoryTreeUseCase, GetProductUseCase, SearchProductsUseCase},
};
use crate::config::Config;
use crate::infrastructure::persistence::{PostgresCategoryRepository, PostgresProductRepository};

/// Application builder for dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    pool: Option<sqlx::PgPool>,
    product_repo: Option<Arc<dyn ProductRepository>>,
    category_repo: Option<Arc<dyn CategoryRepository>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            pool: None,
            product_repo: None,
            category_repo: None,
        }
    }

    /// Initialize database connection pool with retry logic
    pub async fn with_database(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        info!(
            max_connections = self.config.db_max_connections,
            "Connecting to database"
        );

        // Retry connection with exponential backoff
        let mut retries = 3;
        let mut delay = Duration::from_secs(1);
        let pool = loop {
            match PgPoolOptions::new()
                .max_connections(self.config.db_max_connections)
                .min_connections(self.config.db_min_connections)
                .acquire_timeout(Duration::from_secs(self.config.db_acquire_timeout_secs))
                .idle_timeout(Some(Duration::from_secs(self.config.db_idle_timeout_secs)))
                .max_lifetime(Some(Duration::from_secs(self.config.db_max_lifetime_secs)))
                .connect(&self.config.database_url)
                .await
            {
                Ok(pool) => break pool,
                Err(e) if retries > 0 => {
                    retries -= 1;
                    tracing::warn!(
                        "Database connection failed, retrying in {:?} ({} retries left): {}",
                        delay,
                        retries,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => {
                    tracing::error!("Failed to connect to database after retries: {}", e);
                    return Err(Box::new(e));
                }
            }
        };

        info!(
            "Database pool configured: max={}, min={}, acquire_timeout={}s, idle_timeout={}s, max_lifetime={}s",
            self.config.db_max_connections,
            self.config.db_min_connections,
            self.config.db_acquire_timeout_secs,
            self.config.db_idle_timeout_secs,
            self.config.db_max_lifetime_secs
        );

        self.pool = Some(pool);
        Ok(self)
    }

    /// Use an existing pool instead of connecting
    pub fn with_pool(mut self, pool: sqlx::PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Initialize the Postgres repositories
    pub fn with_infrastructure(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        let pool = self.pool.as_ref().ok_or("Database pool not initialized")?;

        let product_repo: Arc<dyn ProductRepository> =
            Arc::new(PostgresProductRepository::new(pool.clone()));
        let category_repo: Arc<dyn CategoryRepository> =
            Arc::new(PostgresCategoryRepository::new(pool.clone()));

        self.product_repo = Some(product_repo);
        self.category_repo = Some(category_repo);

        info!("Infrastructure layer initialized");
        Ok(self)
    }

    /// Build application state with all use cases
    pub fn build(self) -> Result<AppState, Box<dyn std::error::Error>> {
        let pool = self.pool.ok_or("Database pool not initialized")?;
        let product_repo = self
            .product_repo
            .ok_or("Product repository not initialized")?;
        let category_repo = self
            .category_repo
            .ok_or("Category repository not initialized")?;

        let search_use_case = Arc::new(SearchProductsUseCase::new(
            Arc::clone(&product_repo),
            self.config.max_page_size,
        ));
        let product_use_case = Arc::new(GetProductUseCase::new(Arc::clone(&product_repo)));
        let category_use_case = Arc::new(CategoryTreeUseCase::new(category_repo));

        info!("Application layer initialized");

        Ok(AppState {
            pool: Arc::new(pool),
            search_use_case,
            product_use_case,
            category_use_case,
            allowed_origins: self.config.allowed_origins.clone(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
