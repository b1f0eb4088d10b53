//! Calculator engine: operations, display formatting and the input state machine

pub mod engine;
pub mod format;
mod operations;

pub use engine::{Calculator, CalculatorState, EntryMode, InputEvent, PendingOperation};
pub use format::{format_display, format_general};
pub use operations::{BinaryOp, UnaryOp};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// The state machine itself never fails; these arise only where text or raw
/// numbers cross into typed input events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A digit value outside 0..=9
    #[error("Invalid digit: {0} (expected 0-9)")]
    InvalidDigit(u8),
    /// A key-script token that names no key
    #[error("Unknown key: '{0}'")]
    UnknownKey(String),
}
