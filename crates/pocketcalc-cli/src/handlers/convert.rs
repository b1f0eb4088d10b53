//! Convert command handler

use std::io::Write;

use pocketcalc::converter::{Category, ConverterSession, Unit, UNPARSABLE};
use serde::Serialize;

use crate::commands::ConvertArgs;
use crate::error::CliResult;
use crate::output::Printer;

/// JSON report for one conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertReport {
    /// Conversion category
    pub category: Category,
    /// Source unit
    pub from: Unit,
    /// Target unit
    pub to: Unit,
    /// Input text as given
    pub input: String,
    /// Result text; `?` when the input does not parse
    pub result: String,
}

/// Builds a session from the arguments, filling in default units
pub fn session_for(args: &ConvertArgs) -> CliResult<ConverterSession> {
    let mut session = ConverterSession::new(args.category);
    if let Some(from) = args.from {
        session.set_from(from)?;
    }
    if let Some(to) = args.to {
        session.set_to(to)?;
    }
    session.set_input(args.value.trim());
    Ok(session)
}

/// Execute the convert command
pub fn execute_convert<W: Write>(printer: &mut Printer<W>, args: &ConvertArgs) -> CliResult<()> {
    let session = session_for(args)?;
    let report = ConvertReport {
        category: session.category(),
        from: session.from_unit(),
        to: session.to_unit(),
        input: session.input().to_string(),
        result: session.result(),
    };

    if printer.is_json() {
        return printer.json(&report);
    }

    if report.result == UNPARSABLE {
        printer.warning(&format!("'{}' is not a number", report.input))?;
    } else if !printer.quiet {
        printer.line(&format!(
            "{} {} = {} {}",
            report.input,
            report.from.symbol(),
            report.result,
            report.to.symbol()
        ))?;
        return Ok(());
    }
    printer.result(&report.result)
}
