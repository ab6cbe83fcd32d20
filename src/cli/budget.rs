//! Budget CLI commands
//!
//! Setting per-category limits and checking spending against them. Every
//! command seeds the zero limits first, so a new user always sees all
//! expense categories.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Amount, ExpenseCategory};
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the spending limit for an expense category
    Set {
        /// Expense category (e.g. Groceries)
        category: String,
        /// Limit amount (e.g. "400" or "400.00")
        #[arg(allow_hyphen_values = true)]
        limit: String,
    },

    /// List all budget limits
    List,

    /// Show spending against each limit
    Progress,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> BudgetResult<()> {
    let service = BudgetService::new(storage);
    service.ensure_defaults()?;

    match cmd {
        BudgetCommands::Set { category, limit } => {
            let category: ExpenseCategory = category
                .parse()
                .map_err(|e| BudgetError::Validation(format!("{}", e)))?;

            let limit = Amount::parse(&limit).map_err(|e| {
                BudgetError::Validation(format!("Invalid limit: '{}'. Error: {}", limit, e))
            })?;

            let budget = service.set_limit(category, limit)?;
            println!(
                "Set {} limit to {}",
                budget.category,
                budget.limit.format_with_symbol(&settings.currency_symbol)
            );
        }

        BudgetCommands::List => {
            let limits = service.list()?;

            println!("Budget Limits");
            println!("{}", "=".repeat(32));
            for budget in limits {
                println!(
                    "  {:<16} {:>12}",
                    budget.category,
                    budget.limit.format_with_symbol(&settings.currency_symbol)
                );
            }
        }

        BudgetCommands::Progress => {
            let report = service.progress()?;
            print!("{}", report.format_terminal(&settings.currency_symbol));
        }
    }

    Ok(())
}
