//! Transaction categories
//!
//! Income and expense categories are separate enumerations. They share the
//! literal "Other", so code that needs to know whether money came in or went
//! out must look at the [`TransactionCategory`] variant, never at the name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a transaction is money in or money out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            _ => Err(CategoryParseError::UnknownType(s.to_string())),
        }
    }
}

/// Categories available for income transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IncomeCategory {
    Salary,
    Investments,
    Gift,
    Other,
}

impl IncomeCategory {
    pub const ALL: [IncomeCategory; 4] = [
        IncomeCategory::Salary,
        IncomeCategory::Investments,
        IncomeCategory::Gift,
        IncomeCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Investments => "Investments",
            Self::Gift => "Gift",
            Self::Other => "Other",
        }
    }
}

/// Categories available for expense transactions and budget limits
///
/// Declaration order is the display order used for budget listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Groceries,
    Rent,
    Utilities,
    Transport,
    Entertainment,
    Health,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 7] = [
        ExpenseCategory::Groceries,
        ExpenseCategory::Rent,
        ExpenseCategory::Utilities,
        ExpenseCategory::Transport,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Health,
        ExpenseCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Rent => "Rent",
            Self::Utilities => "Utilities",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Other => "Other",
        }
    }
}

macro_rules! impl_category_text {
    ($ty:ident, $kind:expr) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = CategoryParseError;

            /// Case-insensitive match against the category names
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|c| c.as_str().eq_ignore_ascii_case(needle))
                    .ok_or_else(|| CategoryParseError::UnknownCategory {
                        kind: $kind,
                        name: s.to_string(),
                    })
            }
        }
    };
}

impl_category_text!(IncomeCategory, TransactionType::Income);
impl_category_text!(ExpenseCategory, TransactionType::Expense);

/// The category of a transaction, tagged with its type
///
/// Serialized adjacently tagged, so a transaction record carries
/// `"type": "expense", "category": "Groceries"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "category", rename_all = "lowercase")]
pub enum TransactionCategory {
    Income(IncomeCategory),
    Expense(ExpenseCategory),
}

impl TransactionCategory {
    /// Parse a category name within the given transaction type
    pub fn parse(kind: TransactionType, name: &str) -> Result<Self, CategoryParseError> {
        match kind {
            TransactionType::Income => name.parse().map(Self::Income),
            TransactionType::Expense => name.parse().map(Self::Expense),
        }
    }

    pub fn kind(&self) -> TransactionType {
        match self {
            Self::Income(_) => TransactionType::Income,
            Self::Expense(_) => TransactionType::Expense,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Income(c) => c.as_str(),
            Self::Expense(c) => c.as_str(),
        }
    }
}

impl fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error type for category and type parsing
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryParseError {
    UnknownType(String),
    UnknownCategory { kind: TransactionType, name: String },
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownType(s) => {
                write!(f, "Unknown transaction type '{}' (expected income or expense)", s)
            }
            Self::UnknownCategory { kind, name } => {
                let valid: Vec<&str> = match kind {
                    TransactionType::Income => {
                        IncomeCategory::ALL.iter().map(|c| c.as_str()).collect()
                    }
                    TransactionType::Expense => {
                        ExpenseCategory::ALL.iter().map(|c| c.as_str()).collect()
                    }
                };
                write!(
                    f,
                    "Unknown {} category '{}' (expected one of: {})",
                    kind,
                    name,
                    valid.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("groceries".parse::<ExpenseCategory>(), Ok(ExpenseCategory::Groceries));
        assert_eq!(" SALARY ".parse::<IncomeCategory>(), Ok(IncomeCategory::Salary));
    }

    #[test]
    fn test_wrong_side_category_rejected() {
        assert!(TransactionCategory::parse(TransactionType::Income, "Rent").is_err());
        assert!(TransactionCategory::parse(TransactionType::Expense, "Salary").is_err());
    }

    #[test]
    fn test_other_is_distinct_per_type() {
        let income = TransactionCategory::parse(TransactionType::Income, "Other").unwrap();
        let expense = TransactionCategory::parse(TransactionType::Expense, "Other").unwrap();
        assert_eq!(income.name(), expense.name());
        assert_ne!(income, expense);
        assert_eq!(income.kind(), TransactionType::Income);
        assert_eq!(expense.kind(), TransactionType::Expense);
    }

    #[test]
    fn test_unknown_category_message_lists_options() {
        let err = TransactionCategory::parse(TransactionType::Expense, "Yachts").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Yachts"));
        assert!(msg.contains("Groceries"));
        assert!(msg.contains("Health"));
    }

    #[test]
    fn test_transaction_type_parse() {
        assert_eq!("Income".parse::<TransactionType>(), Ok(TransactionType::Income));
        assert_eq!("expense".parse::<TransactionType>(), Ok(TransactionType::Expense));
        assert!("transfer".parse::<TransactionType>().is_err());
    }

    #[test]
    fn test_adjacently_tagged_json() {
        let cat = TransactionCategory::Expense(ExpenseCategory::Rent);
        let json = serde_json::to_value(cat).unwrap();
        assert_eq!(json, serde_json::json!({"type": "expense", "category": "Rent"}));

        let back: TransactionCategory =
            serde_json::from_value(serde_json::json!({"type": "income", "category": "Gift"}))
                .unwrap();
        assert_eq!(back, TransactionCategory::Income(IncomeCategory::Gift));
    }

    #[test]
    fn test_expense_order_matches_all() {
        let mut sorted = ExpenseCategory::ALL;
        sorted.sort();
        assert_eq!(sorted, ExpenseCategory::ALL);
    }
}
