//! Unit tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LumiraError;

/// A unit with a linear factor relative to its category's base unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitDef {
    pub symbol: &'static str,
    pub name: &'static str,
    /// Multiplier that converts one of this unit into the base unit.
    pub factor: f64,
}

const fn unit(symbol: &'static str, name: &'static str, factor: f64) -> UnitDef {
    UnitDef {
        symbol,
        name,
        factor,
    }
}

/// Length units, base meter.
pub const LENGTH_UNITS: &[UnitDef] = &[
    unit("m", "Meters", 1.0),
    unit("km", "Kilometers", 1000.0),
    unit("cm", "Centimeters", 0.01),
    unit("mm", "Millimeters", 0.001),
    unit("ft", "Feet", 0.3048),
    unit("in", "Inches", 0.0254),
    unit("yd", "Yards", 0.9144),
    unit("mi", "Miles", 1609.34),
];

/// Weight units, base kilogram.
pub const WEIGHT_UNITS: &[UnitDef] = &[
    unit("kg", "Kilograms", 1.0),
    unit("g", "Grams", 0.001),
    unit("lb", "Pounds", 0.453592),
    unit("oz", "Ounces", 0.0283495),
    unit("t", "Tonnes", 1000.0),
];

/// Temperature units. Factors are unused; conversion goes through Celsius.
pub const TEMPERATURE_UNITS: &[UnitDef] = &[
    unit("c", "Celsius", 1.0),
    unit("f", "Fahrenheit", 1.0),
    unit("k", "Kelvin", 1.0),
];

/// A group of mutually convertible units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Length,
    Weight,
    Temperature,
}

impl Category {
    pub const ALL: [Category; 3] = [Self::Length, Self::Weight, Self::Temperature];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Length => "Length",
            Self::Weight => "Weight",
            Self::Temperature => "Temperature",
        }
    }

    pub fn units(&self) -> &'static [UnitDef] {
        match self {
            Self::Length => LENGTH_UNITS,
            Self::Weight => WEIGHT_UNITS,
            Self::Temperature => TEMPERATURE_UNITS,
        }
    }

    /// Look up a unit of this category by symbol (case-insensitive).
    pub fn unit(&self, symbol: &str) -> Option<&'static UnitDef> {
        self.units()
            .iter()
            .find(|u| u.symbol.eq_ignore_ascii_case(symbol))
    }

    /// The category that owns a unit symbol.
    pub fn of_unit(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.unit(symbol).is_some())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = LumiraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| LumiraError::UnknownUnit(format!("category {}", s)))
    }
}
