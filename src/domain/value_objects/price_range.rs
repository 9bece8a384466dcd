use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Inclusive price bounds in minor currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    min: Option<i64>,
    max: Option<i64>,
}

impl PriceRange {
    /// Returns `Ok(None)` when neither bound is given.
    pub fn new(min: Option<i64>, max: Option<i64>) -> Result<Option<Self>, DomainError> {
        for (name, bound) in [("minPrice", min), ("maxPrice", max)] {
            if let Some(value) = bound {
                if value < 0 {
                    return Err(DomainError::InvalidPriceRange(format!(
                        "{} must be >= 0, got {}",
                        name, value
                    )));
                }
            }
        }

        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(DomainError::InvalidPriceRange(format!(
                    "minPrice {} is greater than maxPrice {}",
                    lo, hi
                )));
            }
        }

        if min.is_none() && max.is_none() {
            return Ok(None);
        }

        Ok(Some(Self { min, max }))
    }

    pub fn min(&self) -> Option<i64> {
        self.min
    }

    pub fn max(&self) -> Option<i64> {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_range_absent_when_no_bounds() {
        assert_eq!(PriceRange::new(None, None).unwrap(), None);
    }

    #[test]
    fn test_price_range_single_bound() {
        let range = PriceRange::new(Some(100), None).unwrap().unwrap();
        assert_eq!(range.min(), Some(100));
        assert_eq!(range.max(), None);
    }

    #[test]
    fn test_price_range_equal_bounds_allowed() {
        let range = PriceRange::new(Some(500), Some(500)).unwrap().unwrap();
        assert_eq!(range.min(), range.max());
    }

    #[test]
    fn test_price_range_rejects_inverted_bounds() {
        let err = PriceRange::new(Some(10), Some(5)).unwrap_err();
        assert!(err.to_string().contains("greater than maxPrice"));
    }

    #[test]
    fn test_price_range_rejects_negative() {
        assert!(PriceRange::new(Some(-1), None).is_err());
        assert!(PriceRange::new(None, Some(-20)).is_err());
    }
}
