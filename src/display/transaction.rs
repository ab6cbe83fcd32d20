//! Transaction register formatting

use crate::models::Transaction;

use super::report::truncate;

/// Format a single transaction as a register row
///
/// Expenses are shown with a leading minus so the column reads as a ledger.
pub fn format_transaction_row(txn: &Transaction, currency_symbol: &str, date_format: &str) -> String {
    let signed = if txn.is_expense() { -txn.amount } else { txn.amount };

    format!(
        "{:<10} {:<8} {:<13} {:<28} {:>12}",
        txn.date.format(date_format),
        txn.kind().as_str(),
        txn.category,
        truncate(&txn.description, 28),
        signed.format_with_symbol(currency_symbol)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(
    transactions: &[Transaction],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10} {:<8} {:<13} {:<28} {:>12}\n",
        "Date", "Type", "Category", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(75));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, currency_symbol, date_format));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, ExpenseCategory, IncomeCategory};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_expense_row_is_negative() {
        let txn = Transaction::expense(
            ExpenseCategory::Groceries,
            Amount::new(50.0),
            Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap(),
            "Test Store",
        );

        let row = format_transaction_row(&txn, "$", "%Y-%m-%d");
        assert!(row.starts_with("2025-01-15"));
        assert!(row.contains("expense"));
        assert!(row.contains("Groceries"));
        assert!(row.contains("Test Store"));
        assert!(row.contains("-$50.00"));
    }

    #[test]
    fn test_income_row_honours_settings() {
        let txn = Transaction::income(
            IncomeCategory::Salary,
            Amount::new(1200.0),
            Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap(),
            "Pay",
        );

        let row = format_transaction_row(&txn, "€", "%d/%m/%Y");
        assert!(row.starts_with("01/02/2025"));
        assert!(row.contains("€1,200.00"));
        assert!(!row.contains("-€"));
    }

    #[test]
    fn test_format_empty_register() {
        let formatted = format_transaction_register(&[], "$", "%Y-%m-%d");
        assert!(formatted.contains("No transactions found"));
    }
}
