//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use pocketcalc::converter::{Category, Unit};

use crate::output::OutputFormat;

/// Pocketcalc: keypad calculator and unit converter
#[derive(Parser, Debug)]
#[command(name = "pocketcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (results only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true, env = "POCKETCALC_COLOR")]
    pub color: ColorArg,

    /// Result format (text, json)
    #[arg(long, default_value = "text", global = true, env = "POCKETCALC_FORMAT")]
    pub format: FormatArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press a sequence of calculator keys and print the display
    ///
    /// Keys: digits and `.`, `+ - * / ^` (or `− × ÷`), `sin cos tan log sqrt`,
    /// `=`, `AC`, `±` (or `neg`), `%`.
    Calc(CalcArgs),

    /// Convert a value between two units
    Convert(ConvertArgs),

    /// List the units of one or all categories
    Units(UnitsArgs),

    /// Show the keypad layout
    Keypad(KeypadArgs),

    /// Interactive session reading key lines from stdin
    Repl,

    /// Show configuration
    Config,
}

/// Arguments for the calc command
#[derive(Parser, Debug)]
pub struct CalcArgs {
    /// Key script; several arguments are joined with spaces
    #[arg(required = true, allow_hyphen_values = true)]
    pub keys: Vec<String>,

    /// Print the display after every key
    #[arg(long)]
    pub steps: bool,
}

impl CalcArgs {
    /// The full key script
    #[must_use]
    pub fn script(&self) -> String {
        self.keys.join(" ")
    }
}

/// Arguments for the convert command
#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Category (length, weight, temperature)
    pub category: Category,

    /// Value to convert; unparsable text prints `?`
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Source unit (defaults to the category's first unit)
    #[arg(long)]
    pub from: Option<Unit>,

    /// Target unit (defaults to the category's second unit)
    #[arg(long)]
    pub to: Option<Unit>,
}

/// Arguments for the units command
#[derive(Parser, Debug)]
pub struct UnitsArgs {
    /// Restrict to one category
    pub category: Option<Category>,
}

/// Arguments for the keypad command
#[derive(Parser, Debug)]
pub struct KeypadArgs {
    /// Show the scientific function grid
    #[arg(long)]
    pub advanced: bool,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Format argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}
