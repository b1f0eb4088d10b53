//! Converter screen state: input text, category and unit selection

use serde::Serialize;

use super::{convert_text, Category, ConvertError, Unit};

/// State behind a converter screen
///
/// Switching category resets both units to that category's defaults, so the
/// selected units always belong to the selected category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConverterSession {
    input: String,
    category: Category,
    from: Unit,
    to: Unit,
}

impl Default for ConverterSession {
    fn default() -> Self {
        Self::new(Category::Length)
    }
}

impl ConverterSession {
    /// Creates a session on `category` with its default units and no input
    #[must_use]
    pub fn new(category: Category) -> Self {
        let (from, to) = category.default_units();
        Self {
            input: String::new(),
            category,
            from,
            to,
        }
    }

    /// Current input text
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Selected category
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Selected source unit
    #[must_use]
    pub fn from_unit(&self) -> Unit {
        self.from
    }

    /// Selected target unit
    #[must_use]
    pub fn to_unit(&self) -> Unit {
        self.to
    }

    /// Replaces the input text
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Switches category and resets the units to its defaults
    pub fn set_category(&mut self, category: Category) {
        if category == self.category {
            return;
        }
        self.category = category;
        (self.from, self.to) = category.default_units();
    }

    /// Selects the source unit
    pub fn set_from(&mut self, unit: Unit) -> Result<(), ConvertError> {
        self.check(unit)?;
        self.from = unit;
        Ok(())
    }

    /// Selects the target unit
    pub fn set_to(&mut self, unit: Unit) -> Result<(), ConvertError> {
        self.check(unit)?;
        self.to = unit;
        Ok(())
    }

    /// Exchanges source and target units
    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    /// Converted result text, or `"?"` when the input does not parse
    #[must_use]
    pub fn result(&self) -> String {
        convert_text(self.category, self.from, self.to, &self.input)
    }

    fn check(&self, unit: Unit) -> Result<(), ConvertError> {
        if unit.category() == self.category {
            Ok(())
        } else {
            Err(ConvertError::UnitMismatch {
                unit,
                category: self.category,
            })
        }
    }
}
