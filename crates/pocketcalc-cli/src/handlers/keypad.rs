//! Keypad command handler

use std::io::Write;

use pocketcalc::keypad::{ButtonRole, Keypad};
use serde::Serialize;

use crate::commands::KeypadArgs;
use crate::error::CliResult;
use crate::output::Printer;

/// Width of one rendered cell
const CELL_WIDTH: usize = 5;

#[derive(Debug, Serialize)]
struct ButtonReport {
    row: usize,
    col: usize,
    title: String,
    role: ButtonRole,
}

/// Renders one keypad row as padded titles; empty cells stay blank
#[must_use]
pub fn render_row(cells: &[Option<pocketcalc::InputEvent>]) -> String {
    let line: String = cells
        .iter()
        .map(|cell| {
            let title = cell.map(|event| event.title()).unwrap_or_default();
            format!("{title:^CELL_WIDTH$}")
        })
        .collect();
    line.trim_end().to_string()
}

/// Execute the keypad command
pub fn execute_keypad<W: Write>(printer: &mut Printer<W>, args: &KeypadArgs) -> CliResult<()> {
    let (keypad, title) = if args.advanced {
        (Keypad::advanced(), "Advanced")
    } else {
        (Keypad::standard(), "Standard")
    };

    if printer.is_json() {
        let buttons: Vec<_> = keypad
            .buttons()
            .map(|(row, col, event)| ButtonReport {
                row,
                col,
                title: event.title(),
                role: event.role(),
            })
            .collect();
        return printer.json(&buttons);
    }

    printer.header(title)?;
    for row in keypad.rows() {
        printer.line(&render_row(row))?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use crate::output::tests::{buffer_printer, output};
    use crate::output::OutputFormat;

    #[test]
    fn test_render_first_standard_row() {
        let keypad = Keypad::standard();
        let first = keypad.rows().next().unwrap();
        assert_eq!(render_row(first), " AC    ±    %    ÷");
    }

    #[test]
    fn test_render_row_with_gap() {
        let keypad = Keypad::standard();
        let last = keypad.rows().last().unwrap();
        assert_eq!(render_row(last), "  0    .    =");
    }

    #[test]
    fn test_execute_text_standard() {
        let mut printer = buffer_printer(&CliConfig::new());
        execute_keypad(&mut printer, &KeypadArgs { advanced: false }).unwrap();
        let text = output(printer);
        assert!(text.starts_with("=== Standard ===\n"));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn test_execute_json_advanced() {
        let config = CliConfig::new().with_format(OutputFormat::Json);
        let mut printer = buffer_printer(&config);
        execute_keypad(&mut printer, &KeypadArgs { advanced: true }).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output(printer)).unwrap();
        let buttons = value.as_array().unwrap();
        assert_eq!(buttons.len(), 6);
        assert_eq!(buttons[0]["title"], "sin");
        assert_eq!(buttons[5]["title"], "√");
        assert_eq!(buttons[5]["row"], 1);
    }
}
