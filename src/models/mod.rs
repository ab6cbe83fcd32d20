//! Core data models for budget-tracker
//!
//! Transactions, categories, budget limits and the amount type they share.

pub mod amount;
pub mod budget;
pub mod category;
pub mod ids;
pub mod transaction;

pub use amount::{Amount, AmountParseError};
pub use budget::BudgetLimit;
pub use category::{
    CategoryParseError, ExpenseCategory, IncomeCategory, TransactionCategory, TransactionType,
};
pub use ids::{TransactionId, UserId, UserIdError};
pub use transaction::Transaction;
