//! Tips request and response shapes
//!
//! The request lists every transaction individually (not aggregated) and
//! every budget limit, in the camelCase layout the prompt expects.

use serde::{Deserialize, Serialize};

use crate::models::{
    Amount, BudgetLimit, ExpenseCategory, IncomeCategory, Transaction, TransactionCategory,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeEntry {
    pub category: IncomeCategory,
    pub amount: Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub category: ExpenseCategory,
    pub amount: Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimitEntry {
    pub category: ExpenseCategory,
    pub limit: Amount,
}

/// What the model is shown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipsRequest {
    pub income: Vec<IncomeEntry>,
    pub expenses: Vec<ExpenseEntry>,
    pub budget_limits: Vec<LimitEntry>,
}

impl TipsRequest {
    /// Build a request from a storage snapshot
    pub fn from_snapshot(transactions: &[Transaction], limits: &[BudgetLimit]) -> Self {
        let mut request = Self::default();

        for txn in transactions {
            match txn.category {
                TransactionCategory::Income(category) => request.income.push(IncomeEntry {
                    category,
                    amount: txn.amount,
                }),
                TransactionCategory::Expense(category) => request.expenses.push(ExpenseEntry {
                    category,
                    amount: txn.amount,
                }),
            }
        }

        request.budget_limits = limits
            .iter()
            .map(|b| LimitEntry {
                category: b.category,
                limit: b.limit,
            })
            .collect();

        request
    }
}

/// What the model answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipsResponse {
    pub recommendations: Vec<String>,
    pub summary: String,
}

impl TipsResponse {
    /// Format the tips for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str("Your Personalized Summary & Tips\n\n");
        output.push_str(self.summary.trim());
        output.push_str("\n\n");
        for (i, rec) in self.recommendations.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, rec.trim()));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_from_snapshot_keeps_every_transaction() {
        let date = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let txns = vec![
            Transaction::income(IncomeCategory::Salary, Amount::new(1000.0), date, "Pay"),
            Transaction::expense(ExpenseCategory::Groceries, Amount::new(50.0), date, "A"),
            Transaction::expense(ExpenseCategory::Groceries, Amount::new(30.0), date, "B"),
        ];
        let limits = vec![BudgetLimit::new(ExpenseCategory::Groceries, Amount::new(100.0))];

        let request = TipsRequest::from_snapshot(&txns, &limits);

        assert_eq!(request.income.len(), 1);
        assert_eq!(request.expenses.len(), 2);
        assert_eq!(request.budget_limits.len(), 1);
    }

    #[test]
    fn test_wire_shape() {
        let request = TipsRequest {
            income: vec![IncomeEntry {
                category: IncomeCategory::Gift,
                amount: Amount::new(20.0),
            }],
            expenses: vec![],
            budget_limits: vec![LimitEntry {
                category: ExpenseCategory::Rent,
                limit: Amount::new(900.0),
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["income"][0]["category"], "Gift");
        assert_eq!(json["budgetLimits"][0]["limit"], 900.0);
    }

    #[test]
    fn test_response_format_terminal() {
        let response = TipsResponse {
            recommendations: vec!["Cook at home".into(), "Cancel unused streaming".into()],
            summary: "You spend most on dining.".into(),
        };

        let output = response.format_terminal();
        assert!(output.contains("You spend most on dining."));
        assert!(output.contains("1. Cook at home"));
        assert!(output.contains("2. Cancel unused streaming"));
    }
}
