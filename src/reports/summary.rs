//! Financial summary
//!
//! The aggregation core: totals, net balance and the per-category expense
//! breakdown, computed from a snapshot of transactions. Everything here is a
//! pure function of its input. Nothing is validated or rounded; whatever
//! amounts were stored (negative, NaN, infinite) flow through the sums.

use std::collections::HashMap;

use crate::error::BudgetResult;
use crate::models::{Amount, ExpenseCategory, Transaction, TransactionCategory};
use crate::storage::Storage;

/// Expense amounts paired with their category, in snapshot order
fn expense_amounts(
    transactions: &[Transaction],
) -> impl Iterator<Item = (ExpenseCategory, Amount)> + '_ {
    transactions.iter().filter_map(|txn| match txn.category {
        TransactionCategory::Expense(category) => Some((category, txn.amount)),
        TransactionCategory::Income(_) => None,
    })
}

/// Sum of expense amounts per category
///
/// Only categories that appear on at least one expense are present.
pub fn expenses_by_category(transactions: &[Transaction]) -> HashMap<ExpenseCategory, Amount> {
    let mut breakdown: HashMap<ExpenseCategory, Amount> = HashMap::new();
    for (category, amount) in expense_amounts(transactions) {
        *breakdown.entry(category).or_insert_with(Amount::zero) += amount;
    }
    breakdown
}

/// Total spent in one expense category; zero when nothing was spent there
pub fn spent_amount(transactions: &[Transaction], category: ExpenseCategory) -> Amount {
    expense_amounts(transactions)
        .filter(|(c, _)| *c == category)
        .map(|(_, amount)| amount)
        .sum()
}

/// Aggregate view of one user's transactions
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_income: Amount,
    pub total_expenses: Amount,
    /// `total_income - total_expenses`
    pub net_balance: Amount,
    pub expenses_by_category: HashMap<ExpenseCategory, Amount>,
    pub transaction_count: usize,
}

impl Summary {
    /// Compute the summary of a snapshot
    pub fn compute(transactions: &[Transaction]) -> Self {
        let mut total_income = Amount::zero();
        let mut total_expenses = Amount::zero();

        for txn in transactions {
            match txn.category {
                TransactionCategory::Income(_) => total_income += txn.amount,
                TransactionCategory::Expense(_) => total_expenses += txn.amount,
            }
        }

        Self {
            total_income,
            total_expenses,
            net_balance: total_income - total_expenses,
            expenses_by_category: expenses_by_category(transactions),
            transaction_count: transactions.len(),
        }
    }

    /// Compute the summary of everything in storage
    pub fn generate(storage: &Storage) -> BudgetResult<Self> {
        let transactions = storage.transactions.snapshot()?;
        Ok(Self::compute(&transactions))
    }

    /// Amount spent in a category, from the precomputed breakdown
    pub fn spent(&self, category: ExpenseCategory) -> Amount {
        self.expenses_by_category
            .get(&category)
            .copied()
            .unwrap_or_default()
    }

    /// Breakdown entries in category display order
    pub fn breakdown_rows(&self) -> Vec<(ExpenseCategory, Amount)> {
        ExpenseCategory::ALL
            .iter()
            .filter_map(|c| self.expenses_by_category.get(c).map(|a| (*c, *a)))
            .collect()
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let fmt = |a: Amount| a.format_with_symbol(currency_symbol);
        let mut output = String::new();

        output.push_str("Financial Summary\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("{:<20} {:>19}\n", "Total Income:", fmt(self.total_income)));
        output.push_str(&format!(
            "{:<20} {:>19}\n",
            "Total Expenses:",
            fmt(self.total_expenses)
        ));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!("{:<20} {:>19}\n", "Net Balance:", fmt(self.net_balance)));
        output.push_str(&format!("{:<20} {:>19}\n", "Transactions:", self.transaction_count));

        let rows = self.breakdown_rows();
        if !rows.is_empty() {
            output.push_str("\nExpenses by Category\n");
            for (category, amount) in rows {
                output.push_str(&format!("  {:<18} {:>19}\n", category, fmt(amount)));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IncomeCategory;
    use chrono::{TimeZone, Utc};

    fn income(category: IncomeCategory, amount: f64) -> Transaction {
        let date = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        Transaction::income(category, Amount::new(amount), date, "in")
    }

    fn expense(category: ExpenseCategory, amount: f64) -> Transaction {
        let date = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        Transaction::expense(category, Amount::new(amount), date, "out")
    }

    fn mixed() -> Vec<Transaction> {
        vec![
            income(IncomeCategory::Salary, 2500.0),
            expense(ExpenseCategory::Groceries, 150.0),
            income(IncomeCategory::Other, 12.25),
            expense(ExpenseCategory::Other, 0.5),
            expense(ExpenseCategory::Groceries, 62.75),
            expense(ExpenseCategory::Transport, 40.0),
            income(IncomeCategory::Gift, 100.0),
        ]
    }

    #[test]
    fn test_salary_groceries_rent() {
        let txns = vec![
            income(IncomeCategory::Salary, 1000.0),
            expense(ExpenseCategory::Groceries, 150.0),
            expense(ExpenseCategory::Rent, 800.0),
        ];
        let summary = Summary::compute(&txns);

        assert_eq!(summary.total_income, Amount::new(1000.0));
        assert_eq!(summary.total_expenses, Amount::new(950.0));
        assert_eq!(summary.net_balance, Amount::new(50.0));
        assert_eq!(
            summary.expenses_by_category,
            HashMap::from([
                (ExpenseCategory::Groceries, Amount::new(150.0)),
                (ExpenseCategory::Rent, Amount::new(800.0)),
            ])
        );
    }

    #[test]
    fn test_empty_snapshot() {
        let summary = Summary::compute(&[]);

        assert_eq!(summary.total_income, Amount::zero());
        assert_eq!(summary.total_expenses, Amount::zero());
        assert_eq!(summary.net_balance, Amount::zero());
        assert!(summary.expenses_by_category.is_empty());
        assert_eq!(spent_amount(&[], ExpenseCategory::Rent), Amount::zero());
    }

    #[test]
    fn test_same_category_accumulates() {
        let txns = vec![
            expense(ExpenseCategory::Groceries, 50.0),
            expense(ExpenseCategory::Groceries, 30.0),
        ];

        assert_eq!(
            expenses_by_category(&txns),
            HashMap::from([(ExpenseCategory::Groceries, Amount::new(80.0))])
        );
    }

    #[test]
    fn test_other_is_classified_by_type() {
        let txns = vec![
            income(IncomeCategory::Other, 200.0),
            expense(ExpenseCategory::Other, 75.0),
        ];
        let summary = Summary::compute(&txns);

        assert_eq!(summary.total_income, Amount::new(200.0));
        assert_eq!(summary.total_expenses, Amount::new(75.0));
        assert_eq!(summary.spent(ExpenseCategory::Other), Amount::new(75.0));
    }

    #[test]
    fn test_totals_account_for_every_amount() {
        let txns = mixed();
        let summary = Summary::compute(&txns);
        let all: Amount = txns.iter().map(|t| t.amount).sum();

        assert_eq!(summary.total_income + summary.total_expenses, all);
        assert_eq!(
            summary.net_balance,
            summary.total_income - summary.total_expenses
        );
    }

    #[test]
    fn test_breakdown_sums_to_total_expenses() {
        let summary = Summary::compute(&mixed());
        let breakdown_total: Amount = summary.expenses_by_category.values().sum();

        assert_eq!(breakdown_total, summary.total_expenses);
    }

    #[test]
    fn test_breakdown_omits_unused_categories() {
        let breakdown = expenses_by_category(&mixed());

        assert_eq!(breakdown.len(), 3);
        assert!(!breakdown.contains_key(&ExpenseCategory::Rent));
        assert!(!breakdown.contains_key(&ExpenseCategory::Health));
    }

    #[test]
    fn test_spent_amount_matches_breakdown() {
        let txns = mixed();
        let breakdown = expenses_by_category(&txns);

        for category in ExpenseCategory::ALL {
            let expected = breakdown.get(&category).copied().unwrap_or(Amount::zero());
            assert_eq!(spent_amount(&txns, category), expected, "{}", category);
        }
        assert_eq!(
            spent_amount(&txns, ExpenseCategory::Groceries),
            Amount::new(212.75)
        );
    }

    #[test]
    fn test_repeated_computation_is_identical() {
        let txns = vec![
            expense(ExpenseCategory::Groceries, 0.1),
            expense(ExpenseCategory::Groceries, 0.2),
            income(IncomeCategory::Salary, 0.3),
        ];

        let first = Summary::compute(&txns);
        let second = Summary::compute(&txns);

        assert_eq!(
            first.total_expenses.value().to_bits(),
            second.total_expenses.value().to_bits()
        );
        assert_eq!(
            first.net_balance.value().to_bits(),
            second.net_balance.value().to_bits()
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_unvalidated_amounts_propagate() {
        let txns = vec![
            income(IncomeCategory::Salary, -100.0),
            expense(ExpenseCategory::Health, f64::INFINITY),
            expense(ExpenseCategory::Rent, f64::NAN),
        ];
        let summary = Summary::compute(&txns);

        assert_eq!(summary.total_income, Amount::new(-100.0));
        assert!(summary.total_expenses.value().is_nan());
        assert!(summary.net_balance.value().is_nan());
        assert_eq!(summary.spent(ExpenseCategory::Health), Amount::new(f64::INFINITY));
        assert!(spent_amount(&txns, ExpenseCategory::Rent).value().is_nan());
    }

    #[test]
    fn test_no_expenses_means_positive_net() {
        let summary = Summary::compute(&[income(IncomeCategory::Investments, 300.0)]);

        assert_eq!(summary.net_balance, Amount::new(300.0));
        assert!(summary.expenses_by_category.is_empty());
        assert_eq!(summary.spent(ExpenseCategory::Groceries), Amount::zero());
    }

    #[test]
    fn test_breakdown_rows_in_display_order() {
        let summary = Summary::compute(&mixed());
        let order: Vec<_> = summary.breakdown_rows().into_iter().map(|(c, _)| c).collect();

        assert_eq!(
            order,
            vec![
                ExpenseCategory::Groceries,
                ExpenseCategory::Transport,
                ExpenseCategory::Other
            ]
        );
    }

    #[test]
    fn test_format_terminal() {
        let txns = vec![
            income(IncomeCategory::Salary, 1000.0),
            expense(ExpenseCategory::Groceries, 150.0),
            expense(ExpenseCategory::Rent, 800.0),
        ];
        let output = Summary::compute(&txns).format_terminal("$");

        assert!(output.contains("Total Income:"));
        assert!(output.contains("$1,000.00"));
        assert!(output.contains("$950.00"));
        assert!(output.contains("$50.00"));
        assert!(output.contains("Groceries"));
        assert!(output.contains("$800.00"));
    }
}
