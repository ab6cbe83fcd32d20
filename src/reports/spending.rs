//! Spending breakdown
//!
//! The per-category expense breakdown shaped for a pie-style presentation:
//! only categories with positive, finite spending get a slice, and each
//! slice knows its share of the whole. The summary still reports non-finite
//! totals as they are.

use std::cmp::Ordering;

use crate::display::{format_bar, format_percentage, separator};
use crate::error::BudgetResult;
use crate::models::{Amount, ExpenseCategory, Transaction};
use crate::storage::Storage;

use super::summary::expenses_by_category;

/// One slice of the breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingSlice {
    pub category: ExpenseCategory,
    pub amount: Amount,
    /// Share of the positive total, 0-100
    pub percentage: f64,
}

/// Expense breakdown by category
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingBreakdown {
    /// Largest first
    pub slices: Vec<SpendingSlice>,
    /// Sum of the slices
    pub total: Amount,
}

impl SpendingBreakdown {
    /// Build the breakdown from a snapshot
    pub fn compute(transactions: &[Transaction]) -> Self {
        let mut positive: Vec<(ExpenseCategory, Amount)> = expenses_by_category(transactions)
            .into_iter()
            .filter(|(_, amount)| amount.is_finite() && amount.value() > 0.0)
            .collect();

        positive.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });

        let total: Amount = positive.iter().map(|(_, amount)| *amount).sum();

        let slices = positive
            .into_iter()
            .map(|(category, amount)| SpendingSlice {
                category,
                amount,
                percentage: if total.value() > 0.0 {
                    amount.value() / total.value() * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        Self { slices, total }
    }

    /// Build the breakdown from everything in storage
    pub fn generate(storage: &Storage) -> BudgetResult<Self> {
        let transactions = storage.transactions.snapshot()?;
        Ok(Self::compute(&transactions))
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        if self.is_empty() {
            return "No expenses recorded.\n".to_string();
        }

        let mut output = String::new();
        output.push_str("Spending by Category\n");
        output.push_str(&separator(60));
        output.push('\n');

        let largest = self.slices[0].amount.value();
        for slice in &self.slices {
            output.push_str(&format!(
                "{:<14} {:>12} {:>6}  {}\n",
                slice.category,
                slice.amount.format_with_symbol(currency_symbol),
                format_percentage(slice.percentage),
                format_bar(slice.amount.value(), largest, 20)
            ));
        }

        output.push_str(&separator(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<14} {:>12}\n",
            "Total",
            self.total.format_with_symbol(currency_symbol)
        ));

        output
    }
}
