//! Validated product search criteria
//!
//! Every criterion is optional and independent. A `ProductFilter` only ever
//! holds values that already passed validation, so compiling it into SQL
//! cannot fail.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Pagination, PriceRange, Sku, Sort};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    sku: Option<Sku>,
    price: Option<PriceRange>,
    categories: Vec<String>,
    attributes: BTreeMap<String, String>,
    sort: Option<Sort>,
    pagination: Option<Pagination>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sku(mut self, sku: Sku) -> Self {
        self.sku = Some(sku);
        self
    }

    pub fn with_price(mut self, price: Option<PriceRange>) -> Self {
        self.price = price;
        self
    }

    /// Products must be linked to every listed category. Duplicates are
    /// dropped, first occurrence wins the position.
    pub fn with_categories<I, S>(mut self, categories: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        for name in categories {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(DomainError::InvalidCategoryFilter(
                    "category name cannot be empty".to_string(),
                ));
            }
            if !names.contains(&name) {
                names.push(name);
            }
        }
        self.categories = names;
        Ok(self)
    }

    /// Products must carry every key/value pair. Keys are unique; a later
    /// pair with the same key replaces the earlier one.
    pub fn with_attributes<I, K, V>(mut self, attributes: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut pairs = BTreeMap::new();
        for (key, value) in attributes {
            let key = key.into();
            if key.trim().is_empty() {
                return Err(DomainError::InvalidAttributeFilter(
                    "attribute key cannot be empty".to_string(),
                ));
            }
            pairs.insert(key, value.into());
        }
        self.attributes = pairs;
        Ok(self)
    }

    pub fn with_sort(mut self, sort: Option<Sort>) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_pagination(mut self, pagination: Option<Pagination>) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn sku(&self) -> Option<&Sku> {
        self.sku.as_ref()
    }

    pub fn price(&self) -> Option<&PriceRange> {
        self.price.as_ref()
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_deduplicated_in_order() {
        let filter = ProductFilter::new()
            .with_categories(["Chairs", "Outdoor", "Chairs"])
            .unwrap();
        assert_eq!(filter.categories(), &["Chairs", "Outdoor"]);
    }

    #[test]
    fn test_empty_category_rejected() {
        let err = ProductFilter::new().with_categories(["", "x"]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidCategoryFilter(_)));
    }

    #[test]
    fn test_attributes_keyed_uniquely() {
        let filter = ProductFilter::new()
            .with_attributes([("size", "M"), ("color", "red"), ("size", "L")])
            .unwrap();
        let pairs: Vec<_> = filter
            .attributes()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(pairs, vec![("color", "red"), ("size", "L")]);
    }

    #[test]
    fn test_empty_attribute_key_rejected() {
        assert!(ProductFilter::new()
            .with_attributes([(" ", "red")])
            .is_err());
    }

    #[test]
    fn test_attribute_value_may_be_empty() {
        let filter = ProductFilter::new()
            .with_attributes([("engraving", "")])
            .unwrap();
        assert_eq!(filter.attributes().get("engraving").map(String::as_str), Some(""));
    }
}
