use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Stock keeping unit, matched exactly by the search filter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sku(String);

impl Sku {
    const MAX_LENGTH: usize = 128;

    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(DomainError::InvalidSku("SKU cannot be empty".to_string()));
        }

        if value.len() > Self::MAX_LENGTH {
            return Err(DomainError::InvalidSku(format!(
                "SKU too long: {} > {}",
                value.len(),
                Self::MAX_LENGTH
            )));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Sku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sku_keeps_value_verbatim() {
        let sku = Sku::new("AB-123 x").unwrap();
        assert_eq!(sku.as_str(), "AB-123 x");
    }

    #[test]
    fn test_sku_rejects_blank() {
        assert!(Sku::new("").is_err());
        assert!(Sku::new("   ").is_err());
    }

    #[test]
    fn test_sku_rejects_too_long() {
        assert!(Sku::new("x".repeat(129)).is_err());
        assert!(Sku::new("x".repeat(128)).is_ok());
    }
}
