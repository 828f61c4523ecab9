//! Part line item

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A material line item on a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: Uuid,
    pub name: String,
    pub quantity: u32,
    /// Unit cost in dollars
    pub cost: f64,
}

impl Part {
    /// Create a part line item. Quantity is clamped to at least 1.
    pub fn new(name: impl Into<String>, quantity: u32, cost: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            quantity: quantity.max(1),
            cost,
        }
    }

    /// Line cost = unit cost x quantity
    pub fn line_cost(&self) -> f64 {
        self.cost * self.quantity as f64
    }
}
