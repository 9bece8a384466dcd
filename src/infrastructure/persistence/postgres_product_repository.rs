use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::{Arguments, PgPool};

use crate::application::ports::{ProductPage, ProductRepository, RepositoryError};
use crate::domain::entities::{Category, Price, Product, ProductAttribute, ProductTranslation};
use crate::domain::value_objects::{LanguageCode, ProductId, Sku, SortDirection};
use crate::domain::ProductFilter;

use super::query_builder::{
    compile_product_search, schema, BindValue, Dialect, Join, Predicate, QueryStructure,
};

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Must be the first statement of the search transaction
const SEARCH_ISOLATION: &str = "SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY";

/// Bind compiled values in placeholder order
fn arguments(binds: &[BindValue]) -> Result<PgArguments, RepositoryError> {
    let mut args = PgArguments::default();
    for value in binds {
        let added = match value {
            BindValue::Text(s) => args.add(s.clone()),
            BindValue::Int(i) => args.add(*i),
        };
        added.map_err(|e| RepositoryError::Internal(format!("Failed to bind value: {}", e)))?;
    }
    Ok(args)
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn search(&self, filter: &ProductFilter) -> Result<ProductPage, RepositoryError> {
        let compiled = compile_product_search(filter, Dialect::Postgres);
        tracing::debug!(
            sql = %compiled.query.sql,
            binds = compiled.query.binds.len(),
            "Running product search"
        );

        // Page and count read the same snapshot
        let mut tx = self.pool.begin().await?;
        sqlx::query(SEARCH_ISOLATION).execute(&mut *tx).await?;

        let rows = sqlx::query_as_with::<_, ProductRow, _>(
            &compiled.query.sql,
            arguments(&compiled.query.binds)?,
        )
        .fetch_all(&mut *tx)
        .await?;

        let total = match &compiled.count_query {
            Some(count) => Some(
                sqlx::query_scalar_with::<_, i64, _>(&count.sql, arguments(&count.binds)?)
                    .fetch_one(&mut *tx)
                    .await?,
            ),
            None => None,
        };

        tx.commit().await?;

        let products = rows
            .into_iter()
            .map(|r| r.into_domain())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ProductPage { products, total })
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, sku, name, description, status, created_at, updated_at
            FROM products
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => Ok(Some(r.into_domain()?)),
            None => Ok(None),
        }
    }

    async fn prices(&self, id: ProductId) -> Result<Vec<Price>, RepositoryError> {
        let rows = sqlx::query_as::<_, PriceRow>(
            r#"
            SELECT id, product_id, cents, currency, active, active_from, active_to
            FROM prices
            WHERE product_id = $1
            ORDER BY active DESC, cents ASC, id ASC
            "#,
        )
        .bind(id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PriceRow::into_domain).collect())
    }

    async fn categories(&self, id: ProductId) -> Result<Vec<Category>, RepositoryError> {
        let mut query = QueryStructure::new(schema::CATEGORIES);
        query
            .select("categories.id")
            .select("categories.name")
            .select("categories.parent_id")
            .join(Join::new(
                schema::PRODUCT_CATEGORY,
                "product_category.category_id",
                "categories.id",
            ))
            .filter(Predicate::eq("product_category.product_id", id.as_i64()))
            .order_by("categories.name", SortDirection::Asc)
            .order_by("categories.id", SortDirection::Asc);
        let statement = query.render(Dialect::Postgres);

        let rows = sqlx::query_as_with::<_, CategoryRow, _>(
            &statement.sql,
            arguments(&statement.binds)?,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CategoryRow::into_domain).collect())
    }

    async fn attributes(&self, id: ProductId) -> Result<Vec<ProductAttribute>, RepositoryError> {
        let mut query = QueryStructure::new(schema::PRODUCT_ATTRIBUTE);
        query
            .select("product_attribute.id")
            .select("attributes.name")
            .select("product_attribute.value")
            .select("product_attribute.language")
            .join(Join::new(
                schema::ATTRIBUTES,
                "attributes.id",
                "product_attribute.attribute_id",
            ))
            .filter(Predicate::eq("product_attribute.product_id", id.as_i64()))
            .order_by("attributes.name", SortDirection::Asc)
            .order_by("product_attribute.id", SortDirection::Asc);
        let statement = query.render(Dialect::Postgres);

        let rows = sqlx::query_as_with::<_, AttributeRow, _>(
            &statement.sql,
            arguments(&statement.binds)?,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(AttributeRow::into_domain).collect()
    }

    async fn translation(
        &self,
        id: ProductId,
        language: &LanguageCode,
    ) -> Result<Option<ProductTranslation>, RepositoryError> {
        let row = sqlx::query_as::<_, TranslationRow>(
            r#"
            SELECT language, name, description
            FROM product_translations
            WHERE product_id = $1 AND language = $2
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(id.as_i64())
        .bind(language.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(TranslationRow::into_domain).transpose()
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    sku: String,
    name: String,
    description: Option<String>,
    status: String,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl ProductRow {
    fn into_domain(self) -> Result<Product, RepositoryError> {
        let sku = Sku::new(self.sku).map_err(|e| {
            RepositoryError::SerializationError(format!("Invalid sku on product {}: {}", self.id, e))
        })?;

        Ok(Product::reconstruct(
            ProductId::new(self.id),
            sku,
            self.name,
            self.description,
            self.status,
            self.created_at,
            self.updated_at,
        ))
    }
}

#[derive(sqlx::FromRow)]
struct PriceRow {
    id: i64,
    product_id: i64,
    cents: i64,
    currency: String,
    active: bool,
    active_from: Option<chrono::DateTime<chrono::Utc>>,
    active_to: Option<chrono::DateTime<chrono::Utc>>,
}

impl PriceRow {
    fn into_domain(self) -> Price {
        Price {
            id: self.id,
            product_id: ProductId::new(self.product_id),
            cents: self.cents,
            currency: self.currency,
            active: self.active,
            active_from: self.active_from,
            active_to: self.active_to,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    parent_id: Option<i64>,
}

impl CategoryRow {
    fn into_domain(self) -> Category {
        Category::new(self.id, self.name, self.parent_id)
    }
}

#[derive(sqlx::FromRow)]
struct AttributeRow {
    id: i64,
    name: String,
    value: String,
    language: Option<String>,
}

impl AttributeRow {
    fn into_domain(self) -> Result<ProductAttribute, RepositoryError> {
        // Blank language columns mean "any language"
        let language = match self.language.filter(|l| !l.trim().is_empty()) {
            Some(code) => Some(
                LanguageCode::new(code)
                    .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            ),
            None => None,
        };

        Ok(ProductAttribute {
            id: self.id,
            name: self.name,
            value: self.value,
            language,
        })
    }
}

#[derive(sqlx::FromRow)]
struct TranslationRow {
    language: String,
    name: Option<String>,
    description: Option<String>,
}

impl TranslationRow {
    fn into_domain(self) -> Result<ProductTranslation, RepositoryError> {
        let language = LanguageCode::new(self.language)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        Ok(ProductTranslation {
            language,
            name: self.name,
            description: self.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arguments_accepts_every_bind_kind() {
        let binds = vec![BindValue::from("red"), BindValue::from(3_i64)];
        let args = arguments(&binds).unwrap();
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn test_product_row_rejects_blank_sku() {
        let row = ProductRow {
            id: 5,
            sku: "  ".to_string(),
            name: "Broken".to_string(),
            description: None,
            status: "active".to_string(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };

        let err = row.into_domain().unwrap_err();
        assert!(matches!(err, RepositoryError::SerializationError(msg) if msg.contains("product 5")));
    }

    #[test]
    fn test_attribute_row_maps_blank_language_to_none() {
        let row = AttributeRow {
            id: 1,
            name: "color".to_string(),
            value: "red".to_string(),
            language: Some(String::new()),
        };

        assert!(row.into_domain().unwrap().language.is_none());
    }

    #[test]
    fn test_attribute_row_rejects_malformed_language() {
        let row = AttributeRow {
            id: 1,
            name: "color".to_string(),
            value: "red".to_string(),
            language: Some("english".to_string()),
        };

        assert!(matches!(
            row.into_domain(),
            Err(RepositoryError::SerializationError(_))
        ));
    }
}
