use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    entities::{Category, Price, Product, ProductAttribute},
    CategoryNode,
};

/// DTO for product responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i64,
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id().as_i64(),
            sku: product.sku().to_string(),
            name: product.name().to_string(),
            description: product.description().map(|d| d.to_string()),
            status: product.status().to_string(),
            created_at: product.created_at().to_rfc3339(),
            updated_at: product.updated_at().to_rfc3339(),
        }
    }
}

/// Raw search parameters as received over HTTP. Everything is still text;
/// parsing and validation happen in the search use case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub sku: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub categories: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

/// DTO for search response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub products: Vec<ProductDto>,
    /// Matches before paging
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PriceDto {
    pub id: i64,
    pub cents: i64,
    pub currency: String,
    pub active: bool,
    pub active_from: Option<String>,
    pub active_to: Option<String>,
    /// Active and inside its validity window at response time
    pub effective: bool,
}

impl From<Price> for PriceDto {
    fn from(price: Price) -> Self {
        let effective = price.is_effective_at(Utc::now());
        Self {
            id: price.id,
            cents: price.cents,
            currency: price.currency,
            active: price.active,
            active_from: price.active_from.map(|t| t.to_rfc3339()),
            active_to: price.active_to.map(|t| t.to_rfc3339()),
            effective,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            parent_id: category.parent_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttributeDto {
    pub name: String,
    pub value: String,
    pub language: Option<String>,
}

impl From<ProductAttribute> for AttributeDto {
    fn from(attribute: ProductAttribute) -> Self {
        Self {
            name: attribute.name,
            value: attribute.value,
            language: attribute.language.map(|l| l.to_string()),
        }
    }
}

/// DTO for a single product with its related rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDetailDto {
    #[serde(flatten)]
    pub product: ProductDto,
    pub prices: Vec<PriceDto>,
    pub categories: Vec<CategoryDto>,
    pub attributes: Vec<AttributeDto>,
    /// Language of the applied translation, if any
    pub language: Option<String>,
}

/// Node of the nested category tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryNodeDto {
    pub id: i64,
    pub name: String,
    #[schema(no_recursion)]
    pub children: Vec<CategoryNodeDto>,
}

impl From<CategoryNode> for CategoryNodeDto {
    fn from(node: CategoryNode) -> Self {
        Self {
            id: node.id,
            name: node.name,
            children: node.children.into_iter().map(Self::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryTreeResponse {
    pub roots: Vec<CategoryNodeDto>,
    /// Number of categories in the tree
    pub count: usize,
}
