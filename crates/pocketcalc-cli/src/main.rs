//! Pocketcalc CLI: keypad calculator and unit converter
//!
//! ## Usage
//!
//! ```bash
//! pocketcalc calc "2 + 3 × 4 ="             # 20
//! pocketcalc calc --steps 9 √               # display after each key
//! pocketcalc convert length 1000 --to km    # 1000 m = 1 km
//! pocketcalc units temperature
//! pocketcalc keypad --advanced
//! pocketcalc repl                           # one key line per input line
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use pocketcalc_cli::{
    handlers, init_logging, Cli, CliConfig, CliResult, ColorChoice, Commands, OutputFormat,
    Printer, Verbosity,
};
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = build_config(&cli);
    init_logging(config.verbosity);
    debug!(?config, "starting");

    let stdout = io::stdout();
    let mut printer = Printer::new(stdout.lock(), &config);

    match cli.command {
        Commands::Calc(args) => handlers::execute_calc(&mut printer, &args)?,
        Commands::Convert(args) => handlers::execute_convert(&mut printer, &args)?,
        Commands::Units(args) => handlers::execute_units(&mut printer, &args)?,
        Commands::Keypad(args) => handlers::execute_keypad(&mut printer, &args)?,
        Commands::Repl => handlers::execute_repl(&mut printer, io::stdin().lock())?,
        Commands::Config => handlers::execute_config(&mut printer, &config)?,
    }

    printer.into_inner()?;
    Ok(())
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.clone().into();
    let format: OutputFormat = cli.format.clone().into();

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_format(format)
}
