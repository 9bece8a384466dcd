use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ProductId;

/// A price row of a product, in minor currency units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub id: i64,
    pub product_id: ProductId,
    pub cents: i64,
    pub currency: String,
    pub active: bool,
    pub active_from: Option<DateTime<Utc>>,
    pub active_to: Option<DateTime<Utc>>,
}

impl Price {
    /// Active flag set and `at` inside the optional validity window
    pub fn is_effective_at(&self, at: DateTime<Utc>) -> bool {
        self.active
            && self.active_from.map_or(true, |from| from <= at)
            && self.active_to.map_or(true, |to| at < to)
    }
}
