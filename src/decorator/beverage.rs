//! Base items at the bottom of a decorator chain

use crate::decorator::Priceable;
use crate::price::Price;
use serde::{Deserialize, Serialize};

/// Undecorated beverage. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beverage {
    description: String,
    cost: Price,
}

impl Beverage {
    pub fn new(description: impl Into<String>, cost: Price) -> Self {
        Self {
            description: description.into(),
            cost,
        }
    }

    pub fn house_blend() -> Self {
        Self::new("House Blend", Price::from_cents(199))
    }

    pub fn dark_roast() -> Self {
        Self::new("Dark Roast", Price::from_cents(310))
    }
}

impl Priceable for Beverage {
    fn description(&self) -> String {
        self.description.clone()
    }

    fn cost(&self) -> Price {
        self.cost
    }
}
