//! Transaction repository for JSON storage
//!
//! One `transactions.json` per user. Records are normalized on load (see
//! [`super::timestamp`]) and always written back in canonical form.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::BudgetError;
use crate::models::{Amount, Transaction, TransactionCategory, TransactionId};

use super::file_io::{read_json, write_json_atomic};
use super::timestamp::WireTimestamp;

/// File layout as written
#[derive(Serialize)]
struct TransactionData<'a> {
    transactions: Vec<&'a Transaction>,
}

/// File layout as read, tolerant of records written elsewhere
#[derive(Debug, Default, Deserialize)]
struct StoredTransactionData {
    #[serde(default)]
    transactions: Vec<StoredTransaction>,
}

#[derive(Debug, Deserialize)]
struct StoredTransaction {
    #[serde(default)]
    id: Option<TransactionId>,
    #[serde(flatten)]
    category: TransactionCategory,
    amount: Amount,
    date: WireTimestamp,
    #[serde(default)]
    description: String,
    #[serde(default)]
    created_at: Option<WireTimestamp>,
}

impl StoredTransaction {
    fn into_transaction(self) -> Result<Transaction, BudgetError> {
        let date = self.date.into_utc()?;
        let created_at = match self.created_at {
            Some(wire) => wire.into_utc()?,
            None => date,
        };

        Ok(Transaction {
            id: self.id.unwrap_or_default(),
            category: self.category,
            amount: self.amount,
            date,
            description: self.description,
            created_at,
        })
    }
}

/// Newest first; same-day entries by recording time, newest first
fn newest_first(a: &Transaction, b: &Transaction) -> std::cmp::Ordering {
    b.date
        .cmp(&a.date)
        .then(b.created_at.cmp(&a.created_at))
        .then(a.id.cmp(&b.id))
}

/// Repository for one user's transactions
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk, replacing anything in memory
    ///
    /// Records stored without an id get one here, and the file is written
    /// back so the id stays the same on the next load.
    pub fn load(&self) -> Result<(), BudgetError> {
        let file_data: StoredTransactionData = read_json(&self.path)?;
        let assigned = file_data
            .transactions
            .iter()
            .filter(|stored| stored.id.is_none())
            .count();

        {
            let mut data = self.data.write().map_err(|e| {
                BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;

            data.clear();
            for stored in file_data.transactions {
                let txn = stored.into_transaction()?;
                data.insert(txn.id, txn);
            }

            debug!(count = data.len(), path = %self.path.display(), "loaded transactions");
        }

        if assigned > 0 {
            debug!(assigned, path = %self.path.display(), "persisting assigned transaction ids");
            self.save()?;
        }

        Ok(())
    }

    /// Save transactions to disk, newest first
    pub fn save(&self) -> Result<(), BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions: Vec<&Transaction> = data.values().collect();
        transactions.sort_by(|a, b| newest_first(a, b));

        write_json_atomic(&self.path, &TransactionData { transactions })
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Point-in-time copy of every transaction, newest first
    pub fn snapshot(&self) -> Result<Vec<Transaction>, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions: Vec<Transaction> = data.values().cloned().collect();
        transactions.sort_by(newest_first);
        Ok(transactions)
    }

    /// Add a new transaction; existing records are never overwritten
    pub fn insert(&self, txn: Transaction) -> Result<(), BudgetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if data.contains_key(&txn.id) {
            return Err(BudgetError::Duplicate {
                entity_type: "Transaction",
                identifier: txn.id.to_string(),
            });
        }

        data.insert(txn.id, txn);
        Ok(())
    }

    /// Number of stored transactions
    pub fn count(&self) -> Result<usize, BudgetError> {
        let data = self
            .data
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
