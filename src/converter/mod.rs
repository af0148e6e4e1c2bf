//! Unit converter widget.
//!
//! Length and weight convert through a per-category base unit; temperature
//! converts through Celsius.

mod units;

pub use units::{Category, LENGTH_UNITS, TEMPERATURE_UNITS, UnitDef, WEIGHT_UNITS};

use crate::calculator::trim_decimal;
use crate::error::{LumiraError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    /// Leading decimal numeral, optionally signed, with an optional exponent.
    static ref LEADING_NUMBER: Regex = Regex::new(
        r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?"
    ).unwrap();
}

/// Read the number at the start of `input`, ignoring anything after it.
///
/// `"12abc"` reads as 12. Input without a leading numeral, or one that
/// overflows, reads as 0.
pub fn parse_input(input: &str) -> f64 {
    LEADING_NUMBER
        .find(input.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Default number of decimals shown for a conversion.
pub const DEFAULT_DECIMALS: usize = 6;

/// Convert `value` between two units of `category`.
pub fn convert(value: f64, category: Category, from: &str, to: &str) -> Result<f64> {
    let from_unit = category
        .unit(from)
        .ok_or_else(|| LumiraError::UnknownUnit(from.to_string()))?;
    let to_unit = category
        .unit(to)
        .ok_or_else(|| LumiraError::UnknownUnit(to.to_string()))?;

    let result = convert_between(value, category, from_unit, to_unit);
    debug!(value, %category, from, to, result, "Converted");
    Ok(result)
}

fn convert_between(value: f64, category: Category, from: &UnitDef, to: &UnitDef) -> f64 {
    match category {
        Category::Temperature => convert_temperature(value, from.symbol, to.symbol),
        _ => (value * from.factor) / to.factor,
    }
}

fn convert_temperature(value: f64, from: &str, to: &str) -> f64 {
    let celsius = match from {
        "f" => (value - 32.0) * 5.0 / 9.0,
        "k" => value - 273.15,
        _ => value,
    };

    match to {
        "f" => celsius * 9.0 / 5.0 + 32.0,
        "k" => celsius + 273.15,
        _ => celsius,
    }
}

/// Format a conversion with a fixed number of decimals, trailing zeros
/// stripped.
pub fn format_conversion(value: f64, decimals: usize) -> String {
    trim_decimal(&format!("{:.*}", decimals, value))
}

/// Converter widget state: chosen category, units and input text.
#[derive(Clone, Debug)]
pub struct Converter {
    category: Category,
    from: &'static UnitDef,
    to: &'static UnitDef,
    input: String,
    decimals: usize,
    default_category: Category,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    pub fn new() -> Self {
        Self::with_decimals(DEFAULT_DECIMALS)
    }

    pub fn with_decimals(decimals: usize) -> Self {
        Self::with_settings(decimals, Category::Length)
    }

    /// Create a converter that opens on `default_category`.
    pub fn with_settings(decimals: usize, default_category: Category) -> Self {
        let first = &default_category.units()[0];
        Self {
            category: default_category,
            from: first,
            to: first,
            input: String::new(),
            decimals,
            default_category,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn from_unit(&self) -> &'static UnitDef {
        self.from
    }

    pub fn to_unit(&self) -> &'static UnitDef {
        self.to
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Switch category. Both units fall back to the category's first unit.
    pub fn set_category(&mut self, category: Category) {
        let first = &category.units()[0];
        self.category = category;
        self.from = first;
        self.to = first;
    }

    /// Select category and both units at once.
    ///
    /// Both units are checked against `category` first; on error the
    /// converter is left untouched.
    pub fn select(&mut self, category: Category, from: &str, to: &str) -> Result<()> {
        let from_unit = category
            .unit(from)
            .ok_or_else(|| LumiraError::UnknownUnit(from.to_string()))?;
        let to_unit = category
            .unit(to)
            .ok_or_else(|| LumiraError::UnknownUnit(to.to_string()))?;

        self.category = category;
        self.from = from_unit;
        self.to = to_unit;
        Ok(())
    }

    pub fn set_from(&mut self, symbol: &str) -> Result<()> {
        self.from = self
            .category
            .unit(symbol)
            .ok_or_else(|| LumiraError::UnknownUnit(symbol.to_string()))?;
        Ok(())
    }

    pub fn set_to(&mut self, symbol: &str) -> Result<()> {
        self.to = self
            .category
            .unit(symbol)
            .ok_or_else(|| LumiraError::UnknownUnit(symbol.to_string()))?;
        Ok(())
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Converted value of the input's leading number.
    pub fn result(&self) -> f64 {
        let value = parse_input(&self.input);
        convert_between(value, self.category, self.from, self.to)
    }

    /// The formatted result as shown in the output field.
    pub fn display(&self) -> String {
        format_conversion(self.result(), self.decimals)
    }

    /// Back to the initial selection with an empty input.
    pub fn reset(&mut self) {
        *self = Self::with_settings(self.decimals, self.default_category);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_length() {
        assert!(approx(convert(1.0, Category::Length, "km", "m").unwrap(), 1000.0));
        assert!(approx(convert(12.0, Category::Length, "in", "ft").unwrap(), 1.0));
        assert!(approx(convert(1.0, Category::Length, "mi", "km").unwrap(), 1.60934));
    }

    #[test]
    fn test_weight() {
        assert!(approx(convert(1000.0, Category::Weight, "g", "kg").unwrap(), 1.0));
        assert!(approx(convert(1.0, Category::Weight, "t", "kg").unwrap(), 1000.0));
    }

    #[test]
    fn test_temperature() {
        assert!(approx(convert(100.0, Category::Temperature, "c", "f").unwrap(), 212.0));
        assert!(approx(convert(0.0, Category::Temperature, "c", "k").unwrap(), 273.15));
        assert!(approx(convert(32.0, Category::Temperature, "f", "c").unwrap(), 0.0));
        assert!(approx(convert(273.15, Category::Temperature, "k", "f").unwrap(), 32.0));
    }

    #[test]
    fn test_unknown_unit() {
        assert!(matches!(
            convert(1.0, Category::Length, "kg", "m"),
            Err(LumiraError::UnknownUnit(u)) if u == "kg"
        ));
    }

    #[test]
    fn test_format_conversion() {
        assert_eq!(format_conversion(1000.0, 6), "1000");
        assert_eq!(format_conversion(1.609340, 6), "1.60934");
        assert_eq!(format_conversion(1.0 / 3.0, 6), "0.333333");
        assert_eq!(format_conversion(0.0000001, 6), "0");
    }

    #[test]
    fn test_widget_defaults_and_input() {
        let mut conv = Converter::new();
        assert_eq!(conv.category(), Category::Length);
        assert_eq!(conv.from_unit().symbol, "m");
        assert_eq!(conv.display(), "0");

        conv.set_input("abc");
        assert_eq!(conv.display(), "0");

        conv.set_input("2.5");
        conv.set_from("km").unwrap();
        conv.set_to("m").unwrap();
        assert_eq!(conv.display(), "2500");
    }

    #[test]
    fn test_widget_category_switch_resets_units() {
        let mut conv = Converter::new();
        conv.set_from("mi").unwrap();
        conv.set_category(Category::Temperature);
        assert_eq!(conv.from_unit().symbol, "c");
        assert_eq!(conv.to_unit().symbol, "c");
        assert!(conv.set_to("km").is_err());

        conv.set_to("f").unwrap();
        conv.set_input("100");
        assert_eq!(conv.display(), "212");
    }

    #[test]
    fn test_widget_reset() {
        let mut conv = Converter::with_decimals(2);
        conv.set_category(Category::Weight);
        conv.set_input("5");
        conv.reset();
        assert_eq!(conv.category(), Category::Length);
        assert_eq!(conv.input(), "");
    }

    #[test]
    fn test_widget_reset_to_configured_category() {
        let mut conv = Converter::with_settings(6, Category::Weight);
        assert_eq!(conv.from_unit().symbol, "kg");
        conv.set_category(Category::Length);
        conv.reset();
        assert_eq!(conv.category(), Category::Weight);
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("12abc"), 12.0);
        assert_eq!(parse_input("  -3.5e2 m"), -350.0);
        assert_eq!(parse_input(".25"), 0.25);
        assert_eq!(parse_input("7."), 7.0);
        assert_eq!(parse_input("inf"), 0.0);
        assert_eq!(parse_input("infinity"), 0.0);
        assert_eq!(parse_input("NaN"), 0.0);
        assert_eq!(parse_input("1e999"), 0.0);
        assert_eq!(parse_input(""), 0.0);
    }

    #[test]
    fn test_widget_non_finite_input_reads_zero() {
        let mut conv = Converter::new();
        conv.set_input("inf");
        assert_eq!(conv.display(), "0");
        conv.set_input("NaN");
        assert_eq!(conv.display(), "0");
    }

    #[test]
    fn test_widget_numeric_prefix() {
        let mut conv = Converter::new();
        conv.select(Category::Length, "km", "m").unwrap();
        conv.set_input("12abc");
        assert_eq!(conv.display(), "12000");
    }

    #[test]
    fn test_select_leaves_state_on_error() {
        let mut conv = Converter::new();
        conv.select(Category::Weight, "lb", "kg").unwrap();

        assert!(conv.select(Category::Temperature, "c", "kg").is_err());
        assert_eq!(conv.category(), Category::Weight);
        assert_eq!(conv.from_unit().symbol, "lb");
        assert_eq!(conv.to_unit().symbol, "kg");
    }
}
