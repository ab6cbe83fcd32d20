//! Service layer for budget-tracker
//!
//! Entry-time validation, persistence and audit on top of the storage layer.
//! Stored data is trusted as-is; only new input is checked here.

pub mod budget;
pub mod transaction;

pub use budget::BudgetService;
pub use transaction::{NewTransaction, TransactionService};
