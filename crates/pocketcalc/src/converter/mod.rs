//! Unit conversion for length, weight and temperature
//!
//! Length and weight canonicalize through a factor table (meters, grams).
//! Temperature is formula based and only knows Celsius and Fahrenheit.

mod session;

pub use session::ConverterSession;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::format_general;

/// Placeholder shown when the value text does not parse
pub const UNPARSABLE: &str = "?";

/// Errors raised at the converter's text and request boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Category name not recognized
    #[error("Unknown category: '{0}' (expected length, weight or temperature)")]
    UnknownCategory(String),
    /// Unit name not recognized
    #[error("Unknown unit: '{0}'")]
    UnknownUnit(String),
    /// Unit does not belong to the requested category
    #[error("{unit} is not a {category} unit")]
    UnitMismatch {
        /// Offending unit
        unit: Unit,
        /// Requested category
        category: Category,
    },
}

/// Conversion category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Meter, Kilometer, Centimeter
    Length,
    /// Gram, Kilogram, Pound
    Weight,
    /// Celsius, Fahrenheit
    Temperature,
}

impl Category {
    /// All categories in picker order
    pub const ALL: [Self; 3] = [Self::Length, Self::Weight, Self::Temperature];

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Length => "Length",
            Self::Weight => "Weight",
            Self::Temperature => "Temperature",
        }
    }

    /// Units of this category in picker order
    #[must_use]
    pub const fn units(self) -> &'static [Unit] {
        match self {
            Self::Length => &[Unit::Meter, Unit::Kilometer, Unit::Centimeter],
            Self::Weight => &[Unit::Gram, Unit::Kilogram, Unit::Pound],
            Self::Temperature => &[Unit::Celsius, Unit::Fahrenheit],
        }
    }

    /// Units selected after switching to this category: the first two
    #[must_use]
    pub const fn default_units(self) -> (Unit, Unit) {
        match self {
            Self::Length => (Unit::Meter, Unit::Kilometer),
            Self::Weight => (Unit::Gram, Unit::Kilogram),
            Self::Temperature => (Unit::Celsius, Unit::Fahrenheit),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" | "len" => Ok(Self::Length),
            "weight" | "mass" => Ok(Self::Weight),
            "temperature" | "temp" => Ok(Self::Temperature),
            _ => Err(ConvertError::UnknownCategory(s.to_string())),
        }
    }
}

/// A unit from the fixed unit table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Meter (length base unit)
    Meter,
    /// 1000 meters
    Kilometer,
    /// 0.01 meters
    Centimeter,
    /// Gram (weight base unit)
    Gram,
    /// 1000 grams
    Kilogram,
    /// 453.592 grams
    Pound,
    /// Degrees Celsius
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
}

impl Unit {
    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Meter => "Meter",
            Self::Kilometer => "Kilometer",
            Self::Centimeter => "Centimeter",
            Self::Gram => "Gram",
            Self::Kilogram => "Kilogram",
            Self::Pound => "Pound",
            Self::Celsius => "Celsius",
            Self::Fahrenheit => "Fahrenheit",
        }
    }

    /// Short symbol
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Meter => "m",
            Self::Kilometer => "km",
            Self::Centimeter => "cm",
            Self::Gram => "g",
            Self::Kilogram => "kg",
            Self::Pound => "lb",
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    /// Category this unit belongs to
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::Meter | Self::Kilometer | Self::Centimeter => Category::Length,
            Self::Gram | Self::Kilogram | Self::Pound => Category::Weight,
            Self::Celsius | Self::Fahrenheit => Category::Temperature,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim().to_ascii_lowercase().as_str() {
            "meter" | "meters" | "metre" | "m" => Self::Meter,
            "kilometer" | "kilometers" | "kilometre" | "km" => Self::Kilometer,
            "centimeter" | "centimeters" | "centimetre" | "cm" => Self::Centimeter,
            "gram" | "grams" | "g" => Self::Gram,
            "kilogram" | "kilograms" | "kg" => Self::Kilogram,
            "pound" | "pounds" | "lb" | "lbs" => Self::Pound,
            "celsius" | "c" => Self::Celsius,
            "fahrenheit" | "f" => Self::Fahrenheit,
            _ => return Err(ConvertError::UnknownUnit(s.to_string())),
        };
        Ok(unit)
    }
}

/// A single conversion, checked so both units belong to the category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConversionRequest {
    category: Category,
    from: Unit,
    to: Unit,
    value: f64,
}

impl ConversionRequest {
    /// Builds a request, rejecting units from another category
    pub fn new(category: Category, from: Unit, to: Unit, value: f64) -> Result<Self, ConvertError> {
        for unit in [from, to] {
            if unit.category() != category {
                return Err(ConvertError::UnitMismatch { unit, category });
            }
        }
        Ok(Self {
            category,
            from,
            to,
            value,
        })
    }

    /// Requested category
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Source unit
    #[must_use]
    pub fn from_unit(&self) -> Unit {
        self.from
    }

    /// Target unit
    #[must_use]
    pub fn to_unit(&self) -> Unit {
        self.to
    }

    /// Value in the source unit
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Runs the conversion
    #[must_use]
    pub fn convert(&self) -> f64 {
        let result = match self.category {
            Category::Length => convert_length(self.value, self.from, self.to),
            Category::Weight => convert_weight(self.value, self.from, self.to),
            Category::Temperature => convert_temperature(self.value, self.from, self.to),
        };
        debug!(
            category = %self.category,
            from = %self.from,
            to = %self.to,
            value = self.value,
            result,
            "convert"
        );
        result
    }
}

/// Converts `value` between two units of `category`
pub fn convert(category: Category, from: Unit, to: Unit, value: f64) -> Result<f64, ConvertError> {
    ConversionRequest::new(category, from, to, value).map(|request| request.convert())
}

/// Text boundary: parses `value_text`, converts, and formats the result.
///
/// Unparsable text, or units outside the category, yield [`UNPARSABLE`].
#[must_use]
pub fn convert_text(category: Category, from: Unit, to: Unit, value_text: &str) -> String {
    let Ok(value) = value_text.parse::<f64>() else {
        return UNPARSABLE.to_string();
    };
    match convert(category, from, to, value) {
        Ok(result) => format_general(result),
        Err(err) => {
            warn!(%err, "conversion rejected");
            UNPARSABLE.to_string()
        }
    }
}

/// Meters per unit
fn meters_per(unit: Unit) -> f64 {
    match unit {
        Unit::Kilometer => 1000.0,
        Unit::Centimeter => 0.01,
        _ => 1.0,
    }
}

/// Grams per unit
fn grams_per(unit: Unit) -> f64 {
    match unit {
        Unit::Kilogram => 1000.0,
        Unit::Pound => 453.592,
        _ => 1.0,
    }
}

fn convert_length(value: f64, from: Unit, to: Unit) -> f64 {
    value * meters_per(from) / meters_per(to)
}

fn convert_weight(value: f64, from: Unit, to: Unit) -> f64 {
    value * grams_per(from) / grams_per(to)
}

fn convert_temperature(value: f64, from: Unit, to: Unit) -> f64 {
    let (celsius, fahrenheit) = if from == Unit::Celsius {
        (value, value * 9.0 / 5.0 + 32.0)
    } else {
        ((value - 32.0) * 5.0 / 9.0, value)
    };
    if to == Unit::Celsius {
        celsius
    } else {
        fahrenheit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * b.abs().max(1.0)
    }

    // ===== Length =====

    #[test]
    fn test_meter_to_kilometer() {
        assert_eq!(convert_length(1000.0, Unit::Meter, Unit::Kilometer), 1.0);
    }

    #[test]
    fn test_kilometer_to_meter() {
        assert_eq!(convert_length(1.0, Unit::Kilometer, Unit::Meter), 1000.0);
    }

    #[test]
    fn test_centimeter_to_meter() {
        assert!(approx(convert_length(250.0, Unit::Centimeter, Unit::Meter), 2.5));
    }

    #[test]
    fn test_kilometer_to_centimeter() {
        assert!(approx(
            convert_length(1.5, Unit::Kilometer, Unit::Centimeter),
            150_000.0
        ));
    }

    // ===== Weight =====

    #[test]
    fn test_kilogram_to_gram() {
        assert_eq!(convert_weight(2.0, Unit::Kilogram, Unit::Gram), 2000.0);
    }

    #[test]
    fn test_pound_to_gram() {
        assert_eq!(convert_weight(1.0, Unit::Pound, Unit::Gram), 453.592);
    }

    #[test]
    fn test_kilogram_to_pound() {
        assert!(approx(
            convert_weight(1.0, Unit::Kilogram, Unit::Pound),
            1000.0 / 453.592
        ));
    }

    // ===== Temperature =====

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(convert_temperature(0.0, Unit::Celsius, Unit::Fahrenheit), 32.0);
        assert_eq!(
            convert_temperature(100.0, Unit::Celsius, Unit::Fahrenheit),
            212.0
        );
    }

    #[test]
    fn test_fahrenheit_to_celsius() {
        assert_eq!(
            convert_temperature(212.0, Unit::Fahrenheit, Unit::Celsius),
            100.0
        );
        assert_eq!(convert_temperature(-40.0, Unit::Fahrenheit, Unit::Celsius), -40.0);
    }

    #[test]
    fn test_temperature_identity() {
        assert_eq!(convert_temperature(37.5, Unit::Celsius, Unit::Celsius), 37.5);
        assert_eq!(
            convert_temperature(98.6, Unit::Fahrenheit, Unit::Fahrenheit),
            98.6
        );
    }

    // ===== Requests =====

    #[test]
    fn test_convert_dispatches_by_category() {
        assert_eq!(
            convert(Category::Length, Unit::Meter, Unit::Kilometer, 1000.0),
            Ok(1.0)
        );
        assert_eq!(
            convert(Category::Temperature, Unit::Celsius, Unit::Fahrenheit, 0.0),
            Ok(32.0)
        );
    }

    #[test]
    fn test_request_rejects_unit_mismatch() {
        let err = ConversionRequest::new(Category::Length, Unit::Gram, Unit::Meter, 1.0)
            .unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnitMismatch {
                unit: Unit::Gram,
                category: Category::Length
            }
        );
        assert_eq!(err.to_string(), "Gram is not a Length unit");
    }

    #[test]
    fn test_request_accessors() {
        let request =
            ConversionRequest::new(Category::Weight, Unit::Pound, Unit::Kilogram, 3.0).unwrap();
        assert_eq!(request.category(), Category::Weight);
        assert_eq!(request.from_unit(), Unit::Pound);
        assert_eq!(request.to_unit(), Unit::Kilogram);
        assert_eq!(request.value(), 3.0);
    }

    // ===== Text boundary =====

    #[test]
    fn test_convert_text_formats_general() {
        assert_eq!(
            convert_text(Category::Length, Unit::Kilometer, Unit::Meter, "1"),
            "1000"
        );
        assert_eq!(
            convert_text(Category::Length, Unit::Kilometer, Unit::Centimeter, "12"),
            "1.2e+06"
        );
        assert_eq!(
            convert_text(Category::Temperature, Unit::Fahrenheit, Unit::Celsius, "100"),
            "37.7778"
        );
    }

    #[test]
    fn test_convert_text_unparsable() {
        assert_eq!(
            convert_text(Category::Length, Unit::Meter, Unit::Kilometer, ""),
            UNPARSABLE
        );
        assert_eq!(
            convert_text(Category::Weight, Unit::Gram, Unit::Pound, "12abc"),
            "?"
        );
    }

    #[test]
    fn test_convert_text_mismatch_is_placeholder() {
        assert_eq!(
            convert_text(Category::Weight, Unit::Celsius, Unit::Gram, "1"),
            "?"
        );
    }

    // ===== Names =====

    #[test]
    fn test_category_units() {
        assert_eq!(Category::Length.units().len(), 3);
        assert_eq!(Category::Weight.units().len(), 3);
        assert_eq!(Category::Temperature.units().len(), 2);
        for category in Category::ALL {
            for unit in category.units() {
                assert_eq!(unit.category(), category);
            }
        }
    }

    #[test]
    fn test_default_units_are_first_two() {
        for category in Category::ALL {
            let units = category.units();
            assert_eq!(category.default_units(), (units[0], units[1]));
        }
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("Length".parse(), Ok(Category::Length));
        assert_eq!("TEMP".parse(), Ok(Category::Temperature));
        assert_eq!("mass".parse(), Ok(Category::Weight));
        assert!(matches!(
            "volume".parse::<Category>(),
            Err(ConvertError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("km".parse(), Ok(Unit::Kilometer));
        assert_eq!("Pound".parse(), Ok(Unit::Pound));
        assert_eq!("F".parse(), Ok(Unit::Fahrenheit));
        assert_eq!(
            "furlong".parse::<Unit>(),
            Err(ConvertError::UnknownUnit("furlong".into()))
        );
    }

    #[test]
    fn test_unit_display_and_symbol() {
        assert_eq!(Unit::Centimeter.to_string(), "Centimeter");
        assert_eq!(Unit::Pound.symbol(), "lb");
        assert_eq!(Category::Temperature.to_string(), "Temperature");
    }
}
