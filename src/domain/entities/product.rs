use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ProductId, Sku};

use super::ProductTranslation;

/// Product aggregate root as read from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    sku: Sku,
    name: String,
    description: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Product {
    /// Reconstruct from storage (e.g., database)
    pub fn reconstruct(
        id: ProductId,
        sku: Sku,
        name: String,
        description: Option<String>,
        status: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            sku,
            name,
            description,
            status,
            created_at,
            updated_at,
        }
    }

    /// Replace name and description with a translation. Empty translated
    /// fields keep the original text.
    pub fn translate(&mut self, translation: &ProductTranslation) {
        if let Some(name) = translation.name.as_deref().filter(|n| !n.is_empty()) {
            self.name = name.to_string();
        }
        if let Some(description) = translation
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
        {
            self.description = Some(description.to_string());
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::LanguageCode;

    fn product() -> Product {
        let now = Utc::now();
        Product::reconstruct(
            ProductId::new(1),
            Sku::new("SKU-1").unwrap(),
            "Chair".to_string(),
            Some("Wooden chair".to_string()),
            "active".to_string(),
            now,
            now,
        )
    }

    #[test]
    fn test_translate_overrides_fields() {
        let mut p = product();
        p.translate(&ProductTranslation {
            language: LanguageCode::new("de").unwrap(),
            name: Some("Stuhl".to_string()),
            description: Some("Holzstuhl".to_string()),
        });
        assert_eq!(p.name(), "Stuhl");
        assert_eq!(p.description(), Some("Holzstuhl"));
    }

    #[test]
    fn test_translate_keeps_missing_fields() {
        let mut p = product();
        p.translate(&ProductTranslation {
            language: LanguageCode::new("fr").unwrap(),
            name: Some(String::new()),
            description: None,
        });
        assert_eq!(p.name(), "Chair");
        assert_eq!(p.description(), Some("Wooden chair"));
    }
}
