//! Pocketcalc - calculator and unit converter engines
//!
//! Two independent, pure engines sit behind a small call/return interface:
//!
//! - [`core::Calculator`]: a keypad state machine. Every [`InputEvent`]
//!   produces the next display string.
//! - [`converter`]: length, weight and temperature conversion.
//!
//! Presentation (grids, colors, pickers) lives with the caller; the
//! [`keypad`] module only carries button titles, roles and layouts.
//!
//! # Example
//!
//! ```rust
//! use pocketcalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! let display = calc.receive_all(parse_keys("2 + 3 × 4 =").unwrap());
//! assert_eq!(display, "20");
//!
//! let km = convert(Category::Length, Unit::Meter, Unit::Kilometer, 1000.0).unwrap();
//! assert_eq!(km, 1.0);
//! assert_eq!(
//!     convert_text(Category::Temperature, Unit::Celsius, Unit::Fahrenheit, "oops"),
//!     "?"
//! );
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod converter;
pub mod core;
pub mod keypad;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use crate::core::InputEvent;

/// Screen the app is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Keypad calculator
    #[default]
    Standard,
    /// Unit converter
    Converter,
}

impl Mode {
    /// Segment title on the mode picker
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Standard => "Calculator",
            Self::Converter => "Convert",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "calc" | "calculator" => Ok(Self::Standard),
            "converter" | "convert" => Ok(Self::Converter),
            other => Err(format!("unknown mode '{other}'")),
        }
    }
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::converter::{
        convert, convert_text, Category, ConversionRequest, ConvertError, ConverterSession, Unit,
        UNPARSABLE,
    };
    pub use crate::core::{
        format_display, format_general, BinaryOp, CalcError, CalcResult, Calculator,
        CalculatorState, EntryMode, InputEvent, PendingOperation, UnaryOp,
    };
    pub use crate::keypad::{parse_keys, ButtonRole, Keypad};
    pub use crate::Mode;
}
