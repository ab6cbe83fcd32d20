//! Transaction model
//!
//! A single recorded income or expense event. Transactions are immutable
//! once created; there is no edit or delete path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::category::{ExpenseCategory, IncomeCategory, TransactionCategory, TransactionType};
use super::ids::TransactionId;

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Type and category, flattened into `type` / `category` fields
    #[serde(flatten)]
    pub category: TransactionCategory,

    /// Amount (never signed by direction; the type says which way it went)
    pub amount: Amount,

    /// When the transaction happened
    pub date: DateTime<Utc>,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// When the transaction was recorded
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        category: TransactionCategory,
        amount: Amount,
        date: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            category,
            amount,
            date,
            description: description.into(),
            created_at: Utc::now(),
        }
    }

    /// Shorthand for an income transaction
    pub fn income(
        category: IncomeCategory,
        amount: Amount,
        date: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(TransactionCategory::Income(category), amount, date, description)
    }

    /// Shorthand for an expense transaction
    pub fn expense(
        category: ExpenseCategory,
        amount: Amount,
        date: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(TransactionCategory::Expense(category), amount, date, description)
    }

    pub fn kind(&self) -> TransactionType {
        self.category.kind()
    }

    pub fn is_income(&self) -> bool {
        self.kind() == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind() == TransactionType::Expense
    }

    /// The expense category, if this is an expense
    pub fn expense_category(&self) -> Option<ExpenseCategory> {
        match self.category {
            TransactionCategory::Expense(c) => Some(c),
            TransactionCategory::Income(_) => None,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount,
            self.description
        )
    }
}
