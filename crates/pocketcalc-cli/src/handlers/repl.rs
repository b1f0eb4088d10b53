//! Interactive session handler
//!
//! Reads one line at a time. In standard mode a line is a key script fed to a
//! calculator that lives for the whole session; in converter mode a line is
//! either a converter command or the input value.

use std::io::{BufRead, Write};

use pocketcalc::converter::{Category, ConverterSession, Unit};
use pocketcalc::core::Calculator;
use pocketcalc::keypad::parse_keys;
use pocketcalc::Mode;
use tracing::{debug, info};

use crate::error::{CliError, CliResult};
use crate::output::Printer;

/// What the loop should do after a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplOutcome {
    /// Print this result
    Show(String),
    /// Mode switched
    Switched(Mode),
    /// Nothing to print
    Silent,
    /// End the session
    Quit,
}

/// Both engines plus the active screen
#[derive(Debug, Default)]
pub struct ReplSession {
    mode: Mode,
    calculator: Calculator,
    converter: ConverterSession,
}

impl ReplSession {
    /// New session in standard mode
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Active mode
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Calculator engine
    #[must_use]
    pub const fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Converter engine
    #[must_use]
    pub const fn converter(&self) -> &ConverterSession {
        &self.converter
    }

    /// Handles one input line.
    ///
    /// A line that fails to parse leaves both engines untouched.
    pub fn handle_line(&mut self, line: &str) -> CliResult<ReplOutcome> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(ReplOutcome::Silent);
        }

        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(c, r)| (c, r.trim()));

        match command.to_ascii_lowercase().as_str() {
            "quit" | "exit" => return Ok(ReplOutcome::Quit),
            "mode" => {
                let mode = rest.parse::<Mode>().map_err(CliError::invalid_argument)?;
                info!(%mode, "switching mode");
                self.mode = mode;
                return Ok(ReplOutcome::Switched(mode));
            }
            _ => {}
        }

        match self.mode {
            Mode::Standard => self.handle_keys(line),
            Mode::Converter => self.handle_converter(command, rest, line),
        }
    }

    fn handle_keys(&mut self, line: &str) -> CliResult<ReplOutcome> {
        let events = parse_keys(line)?;
        debug!(keys = events.len(), "applying key line");
        let display = self.calculator.receive_all(events);
        Ok(ReplOutcome::Show(display.to_string()))
    }

    fn handle_converter(&mut self, command: &str, rest: &str, line: &str) -> CliResult<ReplOutcome> {
        match command.to_ascii_lowercase().as_str() {
            "category" => self.converter.set_category(rest.parse::<Category>()?),
            "from" => self.converter.set_from(rest.parse::<Unit>()?)?,
            "to" => self.converter.set_to(rest.parse::<Unit>()?)?,
            "swap" => self.converter.swap_units(),
            _ => self.converter.set_input(line),
        }
        Ok(ReplOutcome::Show(self.converter.result()))
    }
}

/// Execute the repl command over `input` until EOF or `quit`
pub fn execute_repl<R: BufRead, W: Write>(printer: &mut Printer<W>, input: R) -> CliResult<()> {
    let mut session = ReplSession::new();
    printer.header(session.mode().title())?;

    for line in input.lines() {
        let line = line?;
        match session.handle_line(&line) {
            Ok(ReplOutcome::Quit) => break,
            Ok(ReplOutcome::Silent) => {}
            Ok(ReplOutcome::Switched(mode)) => printer.header(mode.title())?,
            Ok(ReplOutcome::Show(text)) if printer.is_json() => match session.mode() {
                Mode::Standard => printer.json(session.calculator().state())?,
                Mode::Converter => printer.json(&serde_json::json!({
                    "session": session.converter(),
                    "result": text,
                }))?,
            },
            Ok(ReplOutcome::Show(text)) => printer.result(&text)?,
            Err(err @ (CliError::Io(_) | CliError::Json(_))) => return Err(err),
            Err(err) => printer.warning(&err.to_string())?,
        }
    }
    Ok(())
}
