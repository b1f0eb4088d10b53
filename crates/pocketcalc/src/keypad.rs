//! Keypad model and key scripts
//!
//! Buttons are [`InputEvent`]s with a title and a [`ButtonRole`]; the two
//! grids mirror the standard and advanced calculator screens. A key script
//! is the text form of a button sequence, e.g. `"12.5 × 4 ="`.

use std::iter::Peekable;
use std::str::CharIndices;

use serde::{Deserialize, Serialize};

use crate::core::{BinaryOp, CalcError, CalcResult, InputEvent, UnaryOp};

/// Visual role of a button, used by presentation layers for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonRole {
    /// Digits and the decimal point
    Digit,
    /// Binary and unary operations
    Operator,
    /// The equals key
    Equals,
    /// AC, ± and %
    Function,
}

impl InputEvent {
    /// Button title as printed on the keypad
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Binary(op) => op.symbol().to_string(),
            Self::Unary(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
            Self::ToggleSign => "±".to_string(),
            Self::Percent => "%".to_string(),
        }
    }

    /// Styling role of the button emitting this event
    #[must_use]
    pub const fn role(&self) -> ButtonRole {
        match self {
            Self::Digit(_) | Self::Decimal => ButtonRole::Digit,
            Self::Binary(_) | Self::Unary(_) => ButtonRole::Operator,
            Self::Equals => ButtonRole::Equals,
            Self::Clear | Self::ToggleSign | Self::Percent => ButtonRole::Function,
        }
    }

    /// Maps a single key character to its event
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        let event = match key {
            '0'..='9' => Self::Digit(key.to_digit(10).map_or(0, |d| d as u8)),
            '.' => Self::Decimal,
            '+' => Self::Binary(BinaryOp::Add),
            '-' | '−' => Self::Binary(BinaryOp::Subtract),
            '*' | '×' => Self::Binary(BinaryOp::Multiply),
            '/' | '÷' => Self::Binary(BinaryOp::Divide),
            '^' => Self::Binary(BinaryOp::Power),
            '√' => Self::Unary(UnaryOp::Sqrt),
            '=' => Self::Equals,
            '±' => Self::ToggleSign,
            '%' => Self::Percent,
            _ => return None,
        };
        Some(event)
    }

    /// Maps a key word (`sin`, `sqrt`, `ac`, `neg`, ...) to its event
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        let event = match word.to_ascii_lowercase().as_str() {
            "sin" => Self::Unary(UnaryOp::Sin),
            "cos" => Self::Unary(UnaryOp::Cos),
            "tan" => Self::Unary(UnaryOp::Tan),
            "log" => Self::Unary(UnaryOp::Log),
            "sqrt" => Self::Unary(UnaryOp::Sqrt),
            "pow" => Self::Binary(BinaryOp::Power),
            "ac" | "c" | "clear" => Self::Clear,
            "neg" => Self::ToggleSign,
            "x" => Self::Binary(BinaryOp::Multiply),
            _ => return None,
        };
        Some(event)
    }
}

/// A grid of buttons; empty cells are `None`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    cells: Vec<Option<InputEvent>>,
    rows: usize,
    cols: usize,
}

impl Keypad {
    /// Standard calculator grid
    ///
    /// ```text
    /// [ AC ] [ ± ] [ % ] [ ÷ ]
    /// [ 7  ] [ 8 ] [ 9 ] [ × ]
    /// [ 4  ] [ 5 ] [ 6 ] [ − ]
    /// [ 1  ] [ 2 ] [ 3 ] [ + ]
    /// [ 0  ] [ . ] [ = ] [   ]
    /// ```
    ///
    /// The empty cell hosts the advanced-mode toggle.
    #[must_use]
    pub fn standard() -> Self {
        use InputEvent::{Binary, Clear, Decimal, Digit, Equals, Percent, ToggleSign};
        let cells = vec![
            Some(Clear),
            Some(ToggleSign),
            Some(Percent),
            Some(Binary(BinaryOp::Divide)),
            Some(Digit(7)),
            Some(Digit(8)),
            Some(Digit(9)),
            Some(Binary(BinaryOp::Multiply)),
            Some(Digit(4)),
            Some(Digit(5)),
            Some(Digit(6)),
            Some(Binary(BinaryOp::Subtract)),
            Some(Digit(1)),
            Some(Digit(2)),
            Some(Digit(3)),
            Some(Binary(BinaryOp::Add)),
            Some(Digit(0)),
            Some(Decimal),
            Some(Equals),
            None,
        ];
        Self {
            cells,
            rows: 5,
            cols: 4,
        }
    }

    /// Scientific functions grid
    ///
    /// ```text
    /// [ sin ] [ cos ] [ tan ] [ ^ ]
    /// [ log ] [ √   ] [     ] [   ]
    /// ```
    #[must_use]
    pub fn advanced() -> Self {
        let cells = vec![
            Some(InputEvent::Unary(UnaryOp::Sin)),
            Some(InputEvent::Unary(UnaryOp::Cos)),
            Some(InputEvent::Unary(UnaryOp::Tan)),
            Some(InputEvent::Binary(BinaryOp::Power)),
            Some(InputEvent::Unary(UnaryOp::Log)),
            Some(InputEvent::Unary(UnaryOp::Sqrt)),
            None,
            None,
        ];
        Self {
            cells,
            rows: 2,
            cols: 4,
        }
    }

    /// Grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Button at a grid position, `None` for empty or out-of-range cells
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<InputEvent> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col).copied().flatten()
        } else {
            None
        }
    }

    /// Number of non-empty cells
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Buttons with their positions, in row-major order
    pub fn buttons(&self) -> impl Iterator<Item = (usize, usize, InputEvent)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            cell.map(|event| (i / self.cols, i % self.cols, event))
        })
    }

    /// Rows of cells, for rendering
    pub fn rows(&self) -> impl Iterator<Item = &[Option<InputEvent>]> {
        self.cells.chunks(self.cols)
    }

    /// Position of the button with the given title
    #[must_use]
    pub fn find(&self, title: &str) -> Option<(usize, usize)> {
        self.buttons()
            .find(|(_, _, event)| event.title() == title)
            .map(|(row, col, _)| (row, col))
    }
}

/// Parses a key script into input events.
///
/// Numbers expand into digit and decimal keys, operator glyphs and key
/// words map to their buttons, whitespace separates tokens.
pub fn parse_keys(script: &str) -> CalcResult<Vec<InputEvent>> {
    KeyScanner::new(script).collect()
}

/// Iterator over the events of a key script
#[derive(Debug)]
struct KeyScanner<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> KeyScanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    fn read_word(&mut self, start: usize) -> &'a str {
        let mut end = self.input.len();
        while let Some(&(i, c)) = self.chars.peek() {
            if !c.is_ascii_alphabetic() {
                end = i;
                break;
            }
            self.chars.next();
        }
        &self.input[start..end]
    }
}

impl Iterator for KeyScanner<'_> {
    type Item = CalcResult<InputEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, ch) = loop {
            let (i, c) = self.chars.next()?;
            if !c.is_whitespace() {
                break (i, c);
            }
        };

        if ch.is_ascii_alphabetic() {
            let word = self.read_word(start);
            return Some(
                InputEvent::from_word(word).ok_or_else(|| CalcError::UnknownKey(word.to_string())),
            );
        }

        Some(InputEvent::from_key(ch).ok_or_else(|| CalcError::UnknownKey(ch.to_string())))
    }
}
