//! Shared PostgreSQL fixture for the integration tests

use sqlx::{Executor, PgPool};
use testcontainers_modules::{
    postgres::Postgres,
    testcontainers::{runners::AsyncRunner, ContainerAsync},
};

/// 25 live products in "Shoes", three of them also in "Sale", plus one
/// soft-deleted product linked to both. Product 27 has no price or category
/// and stores `size=M` once per language.
const SEED_SQL: &str = r#"
INSERT INTO products (id, sku, name, description)
SELECT g, 'SKU-' || lpad(g::text, 3, '0'), 'Product ' || lpad(g::text, 3, '0'), 'Description ' || g
FROM generate_series(1, 25) AS g;

INSERT INTO products (id, sku, name, deleted_at)
VALUES (26, 'SKU-026', 'Product 026', now());

INSERT INTO products (id, sku, name)
VALUES (27, 'SKU-027', 'Only size M twice');

INSERT INTO prices (product_id, cents, currency)
SELECT g, (26 - g) * 100, 'EUR' FROM generate_series(1, 26) AS g;
INSERT INTO prices (product_id, cents, currency) VALUES (3, 50, 'EUR');

INSERT INTO categories (id, name, parent_id) VALUES
    (1, 'Clothing', NULL),
    (2, 'Shoes', 1),
    (3, 'Sale', NULL),
    (4, 'Boots', 2);

INSERT INTO product_category (product_id, category_id)
SELECT g, 2 FROM generate_series(1, 26) AS g;
INSERT INTO product_category (product_id, category_id) VALUES (1, 3), (2, 3), (3, 3), (26, 3);

INSERT INTO attributes (id, name) VALUES (1, 'color'), (2, 'size');

INSERT INTO product_attribute (product_id, attribute_id, value, language) VALUES
    (1, 1, 'red', NULL),
    (1, 2, 'M', NULL),
    (1, 1, 'rot', 'de'),
    (2, 1, 'red', NULL),
    (2, 2, 'L', NULL),
    (3, 1, 'blue', NULL),
    (3, 2, 'M', NULL),
    (26, 1, 'red', NULL),
    (26, 2, 'M', NULL),
    (27, 2, 'M', 'en'),
    (27, 2, 'M', 'de');

INSERT INTO product_translations (product_id, language, name) VALUES
    (1, 'de', 'Produkt 001');
"#;

/// Running catalog database; the container stops when this is dropped
pub struct CatalogDb {
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

pub async fn start_catalog() -> CatalogDb {
    let init_sql = include_str!("../../schema.sql");
    let container = Postgres::default()
        .with_init_sql(init_sql.as_bytes().to_vec())
        .start()
        .await
        .expect("Failed to start PostgreSQL container");

    let host = container
        .get_host()
        .await
        .expect("Failed to get container host");
    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get container port");

    let database_url = format!("postgres://postgres:postgres@{host}:{port}/postgres");
    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    pool.execute(SEED_SQL)
        .await
        .expect("Failed to seed catalog");

    CatalogDb {
        pool,
        _container: container,
    }
}

/// Configuration pointing nowhere; tests inject the pool directly
#[allow(dead_code)]
pub fn test_config() -> product_catalog::Config {
    product_catalog::Config {
        database_url: "postgres://unused/catalog".to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
        log_format: product_catalog::config::LogFormat::Pretty,
        allowed_origins: Vec::new(),
        max_page_size: 100,
        db_max_connections: 5,
        db_min_connections: 1,
        db_acquire_timeout_secs: 5,
        db_idle_timeout_secs: 60,
        db_max_lifetime_secs: 300,
    }
}
