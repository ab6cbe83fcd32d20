//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod history;
pub mod report;
pub mod tips;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use history::handle_history_command;
pub use report::{handle_breakdown_command, handle_summary_command};
pub use tips::{handle_tips_command, TipsOutcome};
pub use transaction::{handle_transaction_command, TransactionCommands};
