//! Calculator state machine
//!
//! The engine is an explicit [`CalculatorState`] value driven by a pure
//! transition function, [`CalculatorState::apply`]. [`Calculator`] owns one
//! state for a session and hands back the display text after each event.
//!
//! ```text
//!            Digit / Decimal / ToggleSign
//!   ┌─────────┐ ───────────────────────────▶ ┌─────────┐
//!   │ Settled │                              │ Editing │
//!   └─────────┘ ◀─────────────────────────── └─────────┘
//!      Binary / Unary / Equals / Percent / Clear
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::format::format_display;
use super::operations::{BinaryOp, UnaryOp};
use super::{CalcError, CalcResult};

/// A discrete input event from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum InputEvent {
    /// A digit key, 0 through 9
    Digit(u8),
    /// The decimal point key
    Decimal,
    /// Start a binary operation
    Binary(BinaryOp),
    /// Apply a unary function to the accumulator
    Unary(UnaryOp),
    /// Complete the pending operation
    Equals,
    /// Reset everything
    Clear,
    /// Flip the sign of the current value
    ToggleSign,
    /// Divide the accumulator by 100
    Percent,
}

impl InputEvent {
    /// Creates a digit event, rejecting values above 9
    pub fn digit(value: u8) -> CalcResult<Self> {
        if value <= 9 {
            Ok(Self::Digit(value))
        } else {
            Err(CalcError::InvalidDigit(value))
        }
    }
}

impl From<BinaryOp> for InputEvent {
    fn from(op: BinaryOp) -> Self {
        Self::Binary(op)
    }
}

impl From<UnaryOp> for InputEvent {
    fn from(op: UnaryOp) -> Self {
        Self::Unary(op)
    }
}

/// Whether the display holds a literal being typed or a committed value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryMode {
    /// The user is composing digits; new digits append
    Editing,
    /// The display shows a committed value; the next digit starts fresh
    #[default]
    Settled,
}

impl EntryMode {
    /// Returns true while editing
    #[must_use]
    pub const fn is_editing(self) -> bool {
        matches!(self, Self::Editing)
    }
}

/// Operand and operation saved when a binary operation starts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingOperation {
    /// Left-hand operand
    pub operand: f64,
    /// Operation to apply at the next commit
    pub operation: BinaryOp,
}

impl PendingOperation {
    /// Combines the saved operand with the right-hand value
    #[must_use]
    pub fn resolve(self, rhs: f64) -> f64 {
        self.operation.apply(self.operand, rhs)
    }
}

/// Complete arithmetic state of one calculator session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorState {
    display: String,
    accumulator: f64,
    pending: Option<PendingOperation>,
    mode: EntryMode,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            accumulator: 0.0,
            pending: None,
            mode: EntryMode::Settled,
        }
    }
}

impl CalculatorState {
    /// Creates the initial state: display "0", nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently shown
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Last committed numeric value
    #[must_use]
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Pending operand and operation, present together or not at all
    #[must_use]
    pub fn pending(&self) -> Option<PendingOperation> {
        self.pending
    }

    /// Operand saved by the last binary operation
    #[must_use]
    pub fn pending_operand(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    /// Operation waiting for its right-hand value
    #[must_use]
    pub fn pending_operation(&self) -> Option<BinaryOp> {
        self.pending.map(|p| p.operation)
    }

    /// Current entry mode
    #[must_use]
    pub fn mode(&self) -> EntryMode {
        self.mode
    }

    /// True while digits are being composed
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.mode.is_editing()
    }

    /// Pure transition: consumes the state and returns the next one
    #[must_use]
    pub fn apply(mut self, event: InputEvent) -> Self {
        trace!(?event, display = %self.display, mode = ?self.mode, "input");
        match event {
            InputEvent::Digit(digit) => self.push_digit(digit),
            InputEvent::Decimal => self.push_decimal(),
            InputEvent::Binary(op) => self.begin_binary(op),
            InputEvent::Unary(op) => self.apply_unary(op),
            InputEvent::Equals => self.commit(),
            InputEvent::Clear => self = Self::default(),
            InputEvent::ToggleSign => self.toggle_sign(),
            InputEvent::Percent => self.apply_percent(),
        }
        self
    }

    fn push_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            warn!(digit, "ignoring out-of-range digit");
            return;
        };
        if self.mode.is_editing() && self.display != "0" {
            self.display.push(ch);
        } else {
            self.display = ch.to_string();
        }
        self.mode = EntryMode::Editing;
        // Text the parser rejects (a sign-flipped "nan", say) counts as zero
        self.accumulator = self.display.parse().unwrap_or(0.0);
    }

    fn push_decimal(&mut self) {
        if !self.display.contains('.') {
            self.display.push('.');
            self.mode = EntryMode::Editing;
        }
    }

    fn begin_binary(&mut self, operation: BinaryOp) {
        if self.mode.is_editing() {
            self.commit();
        }
        self.pending = Some(PendingOperation {
            operand: self.accumulator,
            operation,
        });
        self.mode = EntryMode::Settled;
    }

    fn apply_unary(&mut self, op: UnaryOp) {
        self.settle(op.apply(self.accumulator));
    }

    /// Resolves the pending operation, if any. Without one this is a no-op.
    fn commit(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        let result = pending.resolve(self.accumulator);
        debug!(
            operand = pending.operand,
            operation = %pending.operation,
            rhs = self.accumulator,
            result,
            "commit"
        );
        self.settle(result);
    }

    fn toggle_sign(&mut self) {
        if self.mode.is_editing() {
            // Textual flip only; the accumulator catches up at the next digit
            if let Some(unsigned) = self.display.strip_prefix('-') {
                self.display = unsigned.to_string();
            } else if self.display != "0" {
                self.display.insert(0, '-');
            }
        } else {
            self.accumulator = -self.accumulator;
            self.display = format_display(self.accumulator);
        }
        self.mode = EntryMode::Editing;
    }

    fn apply_percent(&mut self) {
        self.settle(self.accumulator / 100.0);
    }

    fn settle(&mut self, value: f64) {
        self.accumulator = value;
        self.display = format_display(value);
        self.mode = EntryMode::Settled;
    }
}

/// A calculator session owning its state
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    /// Creates a calculator in the initial state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes a session from an existing state
    #[must_use]
    pub fn from_state(state: CalculatorState) -> Self {
        Self { state }
    }

    /// Applies one event and returns the new display text
    pub fn receive_input(&mut self, event: InputEvent) -> &str {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event);
        self.state.display()
    }

    /// Applies events in order and returns the final display text
    pub fn receive_all<I>(&mut self, events: I) -> &str
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.receive_input(event);
        }
        self.state.display()
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Read-only view of the full state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the calculator to its initial state
    pub fn reset(&mut self) {
        self.state = CalculatorState::default();
    }
}
