//! CLI commands for reports

use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::reports::{SpendingBreakdown, Summary};
use crate::storage::Storage;

/// Print the financial summary
pub fn handle_summary_command(storage: &Storage, settings: &Settings) -> BudgetResult<()> {
    let summary = Summary::generate(storage)?;
    print!("{}", summary.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Print the spending breakdown by category
pub fn handle_breakdown_command(storage: &Storage, settings: &Settings) -> BudgetResult<()> {
    let breakdown = SpendingBreakdown::generate(storage)?;
    print!("{}", breakdown.format_terminal(&settings.currency_symbol));
    Ok(())
}
