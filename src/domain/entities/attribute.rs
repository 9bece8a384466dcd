use serde::{Deserialize, Serialize};

use crate::domain::value_objects::LanguageCode;

/// Attribute attached to a product through the `product_attribute` pivot.
/// `value` comes from the pivot row, `name` from the attribute definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAttribute {
    pub id: i64,
    pub name: String,
    pub value: String,
    pub language: Option<LanguageCode>,
}
