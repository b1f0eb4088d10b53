//! Arithmetic operations with type-safe operation enums
//!
//! Binary and unary operations are separate closed enums so a pending
//! operation can only ever be a binary one.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Binary operation combining a pending operand with the accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryOp {
    /// Addition (+)
    Add,
    /// Subtraction (−)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷), dividing by zero yields zero
    Divide,
    /// Exponentiation (^)
    Power,
}

impl BinaryOp {
    /// All binary operations in keypad order
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
    ];

    /// Returns the keypad glyph for this operation
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }

    /// Combines `lhs` (the pending operand) with `rhs` (the accumulator)
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    0.0
                } else {
                    lhs / rhs
                }
            }
            Self::Power => lhs.powf(rhs),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary operation applied directly to the accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnaryOp {
    /// Sine of an angle in degrees
    Sin,
    /// Cosine of an angle in degrees
    Cos,
    /// Tangent of an angle in degrees
    Tan,
    /// Base-10 logarithm
    Log,
    /// Square root
    Sqrt,
}

impl UnaryOp {
    /// All unary operations in keypad order
    pub const ALL: [Self; 5] = [Self::Sin, Self::Cos, Self::Tan, Self::Log, Self::Sqrt];

    /// Returns the keypad glyph for this operation
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Sqrt => "√",
        }
    }

    /// Returns true for the trigonometric functions, which take degrees
    #[must_use]
    pub const fn takes_degrees(&self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }

    /// Applies the function. Undefined inputs yield NaN or infinity.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Sin => value.to_radians().sin(),
            Self::Cos => value.to_radians().cos(),
            Self::Tan => value.to_radians().tan(),
            Self::Log => value.log10(),
            Self::Sqrt => value.sqrt(),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
