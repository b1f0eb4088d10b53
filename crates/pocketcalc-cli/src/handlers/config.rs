//! Config command handler

use std::io::Write;

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::Printer;

/// Environment variables read at startup
pub const ENV_VARS: [&str; 3] = ["POCKETCALC_COLOR", "POCKETCALC_FORMAT", "RUST_LOG"];

/// Execute the config command
pub fn execute_config<W: Write>(printer: &mut Printer<W>, config: &CliConfig) -> CliResult<()> {
    if printer.is_json() {
        return printer.json(config);
    }

    printer.header("Configuration")?;
    printer.field("Verbosity:", &format!("{:?}", config.verbosity))?;
    printer.field("Color:", &format!("{:?}", config.color))?;
    printer.field("Format:", &format!("{:?}", config.format))?;
    printer.field("Log filter:", config.verbosity.log_directive())?;
    for var in ENV_VARS {
        let value = std::env::var(var).unwrap_or_else(|_| "(unset)".to_string());
        printer.field(&format!("{var}:"), &value)?;
    }
    Ok(())
}
