use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

pub(crate) static LANGUAGE_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z]{2}(-[A-Z]{2})?$").expect("Invalid language code regex")
});

/// Language tag used by translation and attribute rows (e.g. "en", "de-AT")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if !LANGUAGE_CODE_REGEX.is_match(&value) {
            return Err(DomainError::InvalidLanguage(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for LanguageCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code_valid() {
        assert!(LanguageCode::new("en").is_ok());
        assert!(LanguageCode::new("de-AT").is_ok());
    }

    #[test]
    fn test_language_code_invalid() {
        assert!(LanguageCode::new("").is_err());
        assert!(LanguageCode::new("EN").is_err());
        assert!(LanguageCode::new("eng").is_err());
        assert!(LanguageCode::new("de_at").is_err());
    }
}
