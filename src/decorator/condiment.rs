//! Stock decorator kinds

use crate::price::Price;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Condiments that can be layered onto a beverage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condiment {
    Milk,
    Mocha,
    Soy,
    Whip,
}

impl Condiment {
    pub const ALL: [Condiment; 4] = [
        Condiment::Milk,
        Condiment::Mocha,
        Condiment::Soy,
        Condiment::Whip,
    ];

    /// Fixed amount this condiment adds to the wrapped cost
    pub const fn increment(self) -> Price {
        match self {
            Condiment::Milk => Price::from_cents(20),
            Condiment::Mocha => Price::from_cents(15),
            Condiment::Soy => Price::from_cents(15),
            Condiment::Whip => Price::from_cents(10),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Condiment::Milk => "Milk",
            Condiment::Mocha => "Mocha",
            Condiment::Soy => "Soy",
            Condiment::Whip => "Whip",
        }
    }

    /// Text appended to the wrapped description
    pub const fn suffix(self) -> &'static str {
        match self {
            Condiment::Milk => ", with Milk",
            Condiment::Mocha => ", with Mocha",
            Condiment::Soy => ", with Soy",
            Condiment::Whip => ", with Whip",
        }
    }
}

impl fmt::Display for Condiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
