//! Calc command handler

use std::io::Write;

use pocketcalc::core::{BinaryOp, Calculator};
use pocketcalc::keypad::parse_keys;
use serde::Serialize;
use tracing::info;

use crate::commands::CalcArgs;
use crate::error::CliResult;
use crate::output::Printer;

/// Display after one key press
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalcStep {
    /// Button title of the key
    pub key: String,
    /// Display after the key
    pub display: String,
}

/// JSON report for a key script
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalcReport {
    /// Final display text
    pub display: String,
    /// Final accumulator value
    pub accumulator: f64,
    /// Operation still waiting for its right-hand operand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<BinaryOp>,
    /// Per-key displays, when requested
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<CalcStep>,
}

/// Runs a key script through a fresh calculator
pub fn run_script(script: &str, record_steps: bool) -> CliResult<CalcReport> {
    let events = parse_keys(script)?;
    info!(keys = events.len(), "running key script");

    let mut calc = Calculator::new();
    let mut steps = Vec::new();
    for event in events {
        let display = calc.receive_input(event);
        if record_steps {
            steps.push(CalcStep {
                key: event.title(),
                display: display.to_string(),
            });
        }
    }

    let state = calc.state();
    Ok(CalcReport {
        display: state.display().to_string(),
        accumulator: state.accumulator(),
        pending: state.pending_operation(),
        steps,
    })
}

/// Execute the calc command
pub fn execute_calc<W: Write>(printer: &mut Printer<W>, args: &CalcArgs) -> CliResult<()> {
    let report = run_script(&args.script(), args.steps)?;

    if printer.is_json() {
        return printer.json(&report);
    }

    for step in &report.steps {
        printer.field(&format!("{:>4}", step.key), &step.display)?;
    }
    if let Some(op) = report.pending {
        printer.warning(&format!("'{op}' is still waiting for an operand"))?;
    }
    printer.result(&report.display)
}
