//! Transaction CLI commands
//!
//! Recording income and expenses, and listing what has been recorded.

use chrono::{NaiveDate, Utc};
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::transaction::format_transaction_register;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Amount, TransactionCategory, TransactionType};
use crate::services::{NewTransaction, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Transaction type (income or expense)
        kind: String,
        /// Category name (e.g. Salary, Groceries, Rent)
        category: String,
        /// Amount (e.g. "12.50" or "1,200")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Description
        description: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions, most recent first
    List {
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> BudgetResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            kind,
            category,
            amount,
            description,
            date,
        } => {
            let kind: TransactionType = kind
                .parse()
                .map_err(|e| BudgetError::Validation(format!("{}", e)))?;

            let category = TransactionCategory::parse(kind, &category)
                .map_err(|e| BudgetError::Validation(format!("{}", e)))?;

            let amount = Amount::parse(&amount).map_err(|e| {
                BudgetError::Validation(format!(
                    "Invalid amount: '{}'. Use a format like '12.50' or '1,200'. Error: {}",
                    amount, e
                ))
            })?;

            let date = match date {
                Some(date_str) => NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
                    BudgetError::Validation(format!(
                        "Invalid date format: '{}'. Use YYYY-MM-DD",
                        date_str
                    ))
                })?,
                None => Utc::now().date_naive(),
            };

            let txn = service.add(NewTransaction {
                category,
                amount,
                date,
                description,
            })?;

            println!("Recorded transaction:");
            println!("  ID:          {}", txn.id);
            println!("  Date:        {}", txn.date.format(&settings.date_format));
            println!("  Type:        {}", txn.kind());
            println!("  Category:    {}", txn.category);
            println!(
                "  Amount:      {}",
                txn.amount.format_with_symbol(&settings.currency_symbol)
            );
            println!("  Description: {}", txn.description);
        }

        TransactionCommands::List { limit } => {
            let transactions = service.list(Some(limit))?;
            print!(
                "{}",
                format_transaction_register(
                    &transactions,
                    &settings.currency_symbol,
                    &settings.date_format
                )
            );

            let total = storage.transactions.count()?;
            if total > transactions.len() {
                println!();
                println!(
                    "Showing {} of {} transactions. Use --limit to see more.",
                    transactions.len(),
                    total
                );
            }
        }
    }

    Ok(())
}
