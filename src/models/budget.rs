//! Budget limit model
//!
//! One spending ceiling per expense category. The category is the key; only
//! the limit changes after creation.

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::category::ExpenseCategory;

/// A user-set ceiling on spending for one expense category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetLimit {
    pub category: ExpenseCategory,
    pub limit: Amount,
}

impl BudgetLimit {
    pub fn new(category: ExpenseCategory, limit: Amount) -> Self {
        Self { category, limit }
    }

    /// A zero limit for every expense category, in display order
    pub fn defaults() -> Vec<BudgetLimit> {
        ExpenseCategory::ALL
            .iter()
            .map(|&category| Self::new(category, Amount::zero()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_expense_category() {
        let defaults = BudgetLimit::defaults();
        assert_eq!(defaults.len(), ExpenseCategory::ALL.len());
        assert!(defaults.iter().all(|b| b.limit.is_zero()));
        assert_eq!(defaults[0].category, ExpenseCategory::Groceries);
        assert_eq!(defaults[6].category, ExpenseCategory::Other);
    }

    #[test]
    fn test_json_shape() {
        let limit = BudgetLimit::new(ExpenseCategory::Rent, Amount::new(1200.0));
        let json = serde_json::to_value(limit).unwrap();
        assert_eq!(json, serde_json::json!({"category": "Rent", "limit": 1200.0}));
    }
}
