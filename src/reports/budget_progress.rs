//! Budget progress
//!
//! Each budget limit next to what has been spent in its category.

use crate::display::{format_bar, separator};
use crate::error::BudgetResult;
use crate::models::{Amount, BudgetLimit, ExpenseCategory, Transaction};
use crate::storage::Storage;

use super::summary::spent_amount;

/// Progress of one category against its limit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetProgress {
    pub category: ExpenseCategory,
    pub limit: Amount,
    pub spent: Amount,
}

impl BudgetProgress {
    /// Percentage of the limit used; 0 when no limit is set
    pub fn progress_percent(&self) -> f64 {
        if self.limit.value() > 0.0 {
            self.spent.value() / self.limit.value() * 100.0
        } else {
            0.0
        }
    }

    /// Progress clamped to 100 for bars
    pub fn display_percent(&self) -> f64 {
        self.progress_percent().min(100.0)
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.limit
    }

    /// How far spending exceeds the limit, zero when within it
    pub fn overage(&self) -> Amount {
        if self.is_over_budget() {
            self.spent - self.limit
        } else {
            Amount::zero()
        }
    }

    /// What is left to spend, zero when over
    pub fn remaining(&self) -> Amount {
        if self.is_over_budget() {
            Amount::zero()
        } else {
            self.limit - self.spent
        }
    }

    /// "$x of $y spent" or "$z over budget"
    pub fn status_line(&self, currency_symbol: &str) -> String {
        if self.is_over_budget() {
            format!(
                "{} over budget",
                self.overage().format_with_symbol(currency_symbol)
            )
        } else {
            format!(
                "{} of {} spent",
                self.spent.format_with_symbol(currency_symbol),
                self.limit.format_with_symbol(currency_symbol)
            )
        }
    }
}

/// Progress for every recorded budget limit
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProgressReport {
    /// In category display order
    pub rows: Vec<BudgetProgress>,
}

impl BudgetProgressReport {
    /// Pair each limit with the spending in its category
    pub fn compute(limits: &[BudgetLimit], transactions: &[Transaction]) -> Self {
        let rows = limits
            .iter()
            .map(|budget| BudgetProgress {
                category: budget.category,
                limit: budget.limit,
                spent: spent_amount(transactions, budget.category),
            })
            .collect();

        Self { rows }
    }

    pub fn generate(storage: &Storage) -> BudgetResult<Self> {
        let limits = storage.budgets.snapshot()?;
        let transactions = storage.transactions.snapshot()?;
        Ok(Self::compute(&limits, &transactions))
    }

    pub fn over_budget_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_over_budget()).count()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        if self.rows.is_empty() {
            return "No budget limits set. Run 'budget init' or 'budget budget set'.\n"
                .to_string();
        }

        let mut output = String::new();
        output.push_str("Budget Progress\n");
        output.push_str(&separator(72));
        output.push('\n');

        for row in &self.rows {
            let marker = if row.is_over_budget() { "!" } else { " " };
            output.push_str(&format!(
                "{} {:<14} {} {:>5.0}%  {}\n",
                marker,
                row.category,
                format_bar(row.display_percent(), 100.0, 20),
                row.progress_percent(),
                row.status_line(currency_symbol)
            ));
        }

        let over = self.over_budget_count();
        if over > 0 {
            output.push_str(&separator(72));
            output.push('\n');
            let noun = if over == 1 { "category" } else { "categories" };
            output.push_str(&format!("{} {} over budget\n", over, noun));
        }

        output
    }
}
