use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Product column a search result can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Price,
    Category,
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::Name => write!(f, "name"),
            SortField::Price => write!(f, "price"),
            SortField::Category => write!(f, "category"),
        }
    }
}

impl std::str::FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "price" => Ok(SortField::Price),
            "category" => Ok(SortField::Category),
            _ => Err(DomainError::InvalidSortField(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(DomainError::InvalidSortDirection(s.to_string())),
        }
    }
}

/// Validated `sortBy` + `sortDirection` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Both parameters must be present or both absent.
    pub fn from_params(
        sort_by: Option<&str>,
        sort_direction: Option<&str>,
    ) -> Result<Option<Self>, DomainError> {
        match (sort_by, sort_direction) {
            (None, None) => Ok(None),
            (Some(field), Some(direction)) => {
                let field = field.parse::<SortField>()?;
                let direction = direction.parse::<SortDirection>()?;
                Ok(Some(Self { field, direction }))
            }
            // A bad value is reported ahead of the missing counterpart
            (Some(field), None) => {
                field.parse::<SortField>()?;
                Err(DomainError::IncompleteSort)
            }
            (None, Some(direction)) => {
                direction.parse::<SortDirection>()?;
                Err(DomainError::IncompleteSort)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_sort_direction_accepts_aliases_case_insensitive() {
        assert_eq!(SortDirection::from_str("asc").unwrap(), SortDirection::Asc);
        assert_eq!(
            SortDirection::from_str("Ascending").unwrap(),
            SortDirection::Asc
        );
        assert_eq!(SortDirection::from_str("DESC").unwrap(), SortDirection::Desc);
        assert_eq!(
            SortDirection::from_str("descending").unwrap(),
            SortDirection::Desc
        );
    }

    #[test]
    fn test_sort_direction_rejects_unknown_and_names_accepted_values() {
        let err = SortDirection::from_str("sideways").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("sideways"));
        for accepted in ["asc", "ascending", "desc", "descending"] {
            assert!(msg.contains(accepted), "message should mention {}", accepted);
        }
    }

    #[test]
    fn test_sort_field_from_str() {
        assert_eq!(SortField::from_str("name").unwrap(), SortField::Name);
        assert_eq!(SortField::from_str("Price").unwrap(), SortField::Price);
        assert_eq!(SortField::from_str("category").unwrap(), SortField::Category);
        assert!(matches!(
            SortField::from_str("weight"),
            Err(DomainError::InvalidSortField(_))
        ));
    }

    #[test]
    fn test_sort_from_params_both_or_neither() {
        assert_eq!(Sort::from_params(None, None).unwrap(), None);
        assert_eq!(
            Sort::from_params(Some("price"), Some("desc")).unwrap(),
            Some(Sort::new(SortField::Price, SortDirection::Desc))
        );
        assert_eq!(
            Sort::from_params(Some("name"), None).unwrap_err(),
            DomainError::IncompleteSort
        );
        assert_eq!(
            Sort::from_params(None, Some("asc")).unwrap_err(),
            DomainError::IncompleteSort
        );
    }

    #[test]
    fn test_sort_from_params_reports_bad_value_first() {
        assert!(matches!(
            Sort::from_params(None, Some("sideways")),
            Err(DomainError::InvalidSortDirection(_))
        ));
        assert!(matches!(
            Sort::from_params(Some("weight"), Some("asc")),
            Err(DomainError::InvalidSortField(_))
        ));
    }

    #[test]
    fn test_sort_direction_sql() {
        assert_eq!(SortDirection::Asc.as_sql(), "ASC");
        assert_eq!(SortDirection::Desc.as_sql(), "DESC");
    }
}
