//! Command handlers
//!
//! Each handler writes through a [`Printer`](crate::output::Printer) so the
//! same code path serves stdout and the in-memory buffers used by tests.

pub mod calc;
pub mod config;
pub mod convert;
pub mod keypad;
pub mod repl;
pub mod units;

pub use calc::{execute_calc, CalcReport, CalcStep};
pub use config::execute_config;
pub use convert::{execute_convert, ConvertReport};
pub use keypad::execute_keypad;
pub use repl::execute_repl;
pub use units::{execute_units, UnitsReport};
