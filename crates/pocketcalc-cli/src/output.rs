//! Output formatting

use std::io::Write;

use console::style;
use serde::{Deserialize, Serialize};

use crate::config::CliConfig;
use crate::error::CliResult;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Writes results and messages to a sink, honoring color and quiet settings
#[derive(Debug)]
pub struct Printer<W: Write> {
    out: W,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode: only results are written
    pub quiet: bool,
    /// Result format
    pub format: OutputFormat,
}

impl<W: Write> Printer<W> {
    /// Create a printer writing to `out`
    pub fn new(out: W, config: &CliConfig) -> Self {
        Self {
            out,
            use_color: config.use_color(),
            quiet: config.verbosity.is_quiet(),
            format: config.format,
        }
    }

    /// True when results should be JSON
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Print a result value; always written, even in quiet mode
    pub fn result(&mut self, value: &str) -> CliResult<()> {
        let text = if self.use_color {
            style(value).bold().to_string()
        } else {
            value.to_string()
        };
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    /// Print a labelled value
    pub fn field(&mut self, label: &str, value: &str) -> CliResult<()> {
        if self.use_color {
            writeln!(self.out, "{} {}", style(label).cyan(), style(value).bold())?;
        } else {
            writeln!(self.out, "{label} {value}")?;
        }
        Ok(())
    }

    /// Print a plain line
    pub fn line(&mut self, text: &str) -> CliResult<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    /// Print a section header
    pub fn header(&mut self, title: &str) -> CliResult<()> {
        if self.quiet {
            return Ok(());
        }
        if self.use_color {
            writeln!(self.out, "{}", style(title).bold().underlined())?;
        } else {
            writeln!(self.out, "=== {title} ===")?;
        }
        Ok(())
    }

    /// Print a warning message
    pub fn warning(&mut self, message: &str) -> CliResult<()> {
        if self.quiet {
            return Ok(());
        }
        let prefix = if self.use_color {
            style("⚠").yellow().bold().to_string()
        } else {
            "WARN".to_string()
        };
        writeln!(self.out, "{prefix} {message}")?;
        Ok(())
    }

    /// Print a value as pretty JSON
    pub fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> CliResult<()> {
        let text = serde_json::to_string_pretty(value)?;
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    /// Flush and return the sink
    pub fn into_inner(mut self) -> CliResult<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
pub(crate) mod tests {
    use super::*;
    use crate::config::{ColorChoice, Verbosity};

    /// Plain-text printer over a byte buffer
    pub(crate) fn buffer_printer(config: &CliConfig) -> Printer<Vec<u8>> {
        Printer::new(Vec::new(), &config.clone().with_color(ColorChoice::Never))
    }

    pub(crate) fn output(printer: Printer<Vec<u8>>) -> String {
        String::from_utf8(printer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_default_format() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_result_plain() {
        let mut printer = buffer_printer(&CliConfig::new());
        printer.result("42").unwrap();
        assert_eq!(output(printer), "42\n");
    }

    #[test]
    fn test_field_plain() {
        let mut printer = buffer_printer(&CliConfig::new());
        printer.field("Result:", "1000").unwrap();
        assert_eq!(output(printer), "Result: 1000\n");
    }

    #[test]
    fn test_header_plain() {
        let mut printer = buffer_printer(&CliConfig::new());
        printer.header("Length").unwrap();
        assert_eq!(output(printer), "=== Length ===\n");
    }

    #[test]
    fn test_quiet_suppresses_messages_not_results() {
        let config = CliConfig::new().with_verbosity(Verbosity::Quiet);
        let mut printer = buffer_printer(&config);
        printer.header("ignored").unwrap();
        printer.warning("ignored").unwrap();
        printer.result("7").unwrap();
        assert_eq!(output(printer), "7\n");
    }

    #[test]
    fn test_warning_plain() {
        let mut printer = buffer_printer(&CliConfig::new());
        printer.warning("careful").unwrap();
        assert_eq!(output(printer), "WARN careful\n");
    }

    #[test]
    fn test_json() {
        let config = CliConfig::new().with_format(OutputFormat::Json);
        let mut printer = buffer_printer(&config);
        assert!(printer.is_json());
        printer.json(&serde_json::json!({"display": "5"})).unwrap();
        let text = output(printer);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["display"], "5");
    }
}
