//! Transaction service
//!
//! Recording and listing transactions. There is no edit or delete path.

use chrono::{NaiveDate, NaiveTime, Utc};
use tracing::info;

use crate::audit::EntityType;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Amount, Transaction, TransactionCategory};
use crate::storage::Storage;

/// Smallest amount accepted for a new transaction
pub const MIN_AMOUNT: f64 = 0.01;

/// Input for recording a new transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub category: TransactionCategory,
    pub amount: Amount,
    pub date: NaiveDate,
    pub description: String,
}

/// Earliest date a transaction may carry
fn earliest_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

impl NewTransaction {
    /// Check the input against `today`
    pub fn validate(&self, today: NaiveDate) -> BudgetResult<()> {
        if !self.amount.is_finite() || self.amount.value() < MIN_AMOUNT {
            return Err(BudgetError::Validation(
                "Amount must be greater than 0.".into(),
            ));
        }

        if self.description.trim().is_empty() {
            return Err(BudgetError::Validation("Description is required.".into()));
        }

        if self.date > today {
            return Err(BudgetError::Validation(format!(
                "Date {} is in the future",
                self.date
            )));
        }

        if self.date < earliest_date() {
            return Err(BudgetError::Validation(format!(
                "Date {} is before {}",
                self.date,
                earliest_date()
            )));
        }

        Ok(())
    }
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate, persist and audit a new transaction
    pub fn add(&self, input: NewTransaction) -> BudgetResult<Transaction> {
        input.validate(Utc::now().date_naive())?;

        let txn = Transaction::new(
            input.category,
            input.amount,
            input.date.and_time(NaiveTime::MIN).and_utc(),
            input.description.trim(),
        );

        self.storage.transactions.insert(txn.clone())?;
        self.storage.transactions.save()?;

        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(format!("{} {}", txn.category, txn.description)),
            &txn,
        )?;

        info!(
            user = %self.storage.user(),
            id = %txn.id,
            kind = %txn.kind(),
            category = txn.category.name(),
            "transaction recorded"
        );
        Ok(txn)
    }

    /// Transactions, most recent first, optionally capped at `limit`
    pub fn list(&self, limit: Option<usize>) -> BudgetResult<Vec<Transaction>> {
        let mut transactions = self.storage.transactions.snapshot()?;
        if let Some(limit) = limit {
            transactions.truncate(limit);
        }
        Ok(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::TrackerPaths;
    use crate::models::{ExpenseCategory, IncomeCategory, UserId};
    use chrono::Duration;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::open(paths, UserId::parse("alice").unwrap()).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn groceries(amount: f64, date: NaiveDate) -> NewTransaction {
        NewTransaction {
            category: TransactionCategory::Expense(ExpenseCategory::Groceries),
            amount: Amount::new(amount),
            date,
            description: "Market".into(),
        }
    }

    #[test]
    fn test_add_persists_and_audits() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service.add(groceries(42.5, day(2025, 1, 10))).unwrap();

        assert_eq!(txn.amount, Amount::new(42.5));
        assert_eq!(txn.date.date_naive(), day(2025, 1, 10));
        assert_eq!(storage.transactions.get(txn.id).unwrap(), Some(txn.clone()));
        assert!(storage.paths().transactions_file(storage.user()).exists());

        let audit = storage.audit().read_all().unwrap();
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].operation, Operation::Create);
        assert_eq!(audit[0].entity_id, txn.id.to_string());
    }

    #[test]
    fn test_description_is_trimmed() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let mut input = groceries(10.0, day(2025, 1, 10));
        input.description = "  Corner shop \n".into();

        assert_eq!(service.add(input).unwrap().description, "Corner shop");
    }

    #[test]
    fn test_rejects_bad_amounts() {
        let today = day(2025, 6, 1);

        for bad in [0.0, 0.001, -5.0, f64::NAN, f64::INFINITY] {
            let err = groceries(bad, day(2025, 1, 1)).validate(today).unwrap_err();
            assert!(err.is_validation(), "{} should be rejected", bad);
        }
        assert!(groceries(0.01, day(2025, 1, 1)).validate(today).is_ok());
    }

    #[test]
    fn test_rejects_blank_description() {
        let mut input = groceries(10.0, day(2025, 1, 1));
        input.description = "   ".into();

        assert!(input.validate(day(2025, 6, 1)).unwrap_err().is_validation());
    }

    #[test]
    fn test_date_bounds() {
        let today = day(2025, 6, 1);

        assert!(groceries(1.0, today).validate(today).is_ok());
        assert!(groceries(1.0, day(1900, 1, 1)).validate(today).is_ok());
        assert!(groceries(1.0, day(2025, 6, 2)).validate(today).is_err());
        assert!(groceries(1.0, day(1899, 12, 31)).validate(today).is_err());
    }

    #[test]
    fn test_rejected_input_is_not_stored() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        let tomorrow = Utc::now().date_naive() + Duration::days(1);

        assert!(service.add(groceries(10.0, tomorrow)).is_err());
        assert_eq!(storage.transactions.count().unwrap(), 0);
        assert!(storage.audit().read_all().unwrap().is_empty());
    }

    #[test]
    fn test_list_most_recent_first_with_limit() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service.add(groceries(1.0, day(2025, 1, 1))).unwrap();
        service
            .add(NewTransaction {
                category: TransactionCategory::Income(IncomeCategory::Salary),
                amount: Amount::new(1000.0),
                date: day(2025, 3, 1),
                description: "Pay".into(),
            })
            .unwrap();
        service.add(groceries(2.0, day(2025, 2, 1))).unwrap();

        let all = service.list(None).unwrap();
        let dates: Vec<_> = all.iter().map(|t| t.date.date_naive()).collect();
        assert_eq!(dates, vec![day(2025, 3, 1), day(2025, 2, 1), day(2025, 1, 1)]);

        assert_eq!(service.list(Some(2)).unwrap().len(), 2);
    }
}
