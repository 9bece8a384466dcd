//! # product_catalog - Read-only Product Catalog Service
//!
//! REST backend over a PostgreSQL catalog of products, tree-structured
//! categories, pivot-table attributes, translations and prices, built on
//! Clean Architecture principles.
//!
//! ## Architecture Layers
//!
//! - **Domain**: value objects, entities, the validated `ProductFilter` and
//!   the category tree
//! - **Application**: use cases, ports (repository traits) and DTOs
//! - **Infrastructure**: the SQL query compiler and Postgres repositories
//! - **API**: HTTP handlers and middleware
//!
//! ## Query compilation
//!
//! ```
//! use product_catalog::domain::ProductFilter;
//! use product_catalog::infrastructure::persistence::query_builder::{
//!     compile_product_search, Dialect,
//! };
//!
//! let filter = ProductFilter::new()
//!     .with_categories(["Shoes", "Sale"])
//!     .unwrap();
//! let compiled = compile_product_search(&filter, Dialect::Generic);
//!
//! assert!(compiled.query.sql.contains("HAVING COUNT(DISTINCT categories.name) = ?"));
//! assert_eq!(compiled.query.binds.len(), 3);
//! assert!(compiled.count_query.is_none());
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
