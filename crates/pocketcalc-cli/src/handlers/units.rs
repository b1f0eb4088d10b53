//! Units command handler

use std::io::Write;

use pocketcalc::converter::{Category, Unit};
use serde::Serialize;

use crate::commands::UnitsArgs;
use crate::error::CliResult;
use crate::output::Printer;

/// Units of one category, in picker order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitsReport {
    /// Category
    pub category: Category,
    /// Units
    pub units: Vec<Unit>,
}

/// Lists the categories to show
#[must_use]
pub fn collect_units(category: Option<Category>) -> Vec<UnitsReport> {
    let categories = category.map_or_else(|| Category::ALL.to_vec(), |c| vec![c]);
    categories
        .into_iter()
        .map(|category| UnitsReport {
            category,
            units: category.units().to_vec(),
        })
        .collect()
}

/// Execute the units command
pub fn execute_units<W: Write>(printer: &mut Printer<W>, args: &UnitsArgs) -> CliResult<()> {
    let reports = collect_units(args.category);
    if printer.is_json() {
        return printer.json(&reports);
    }

    for report in &reports {
        printer.header(report.category.name())?;
        for unit in &report.units {
            printer.field(&format!("{:<4}", unit.symbol()), unit.name())?;
        }
    }
    Ok(())
}
