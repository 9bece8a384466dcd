use serde::{Deserialize, Serialize};

use crate::domain::value_objects::LanguageCode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTranslation {
    pub language: LanguageCode,
    pub name: Option<String>,
    pub description: Option<String>,
}
