//! Budget limit repository for JSON storage
//!
//! One `budgets.json` per user, keyed by expense category so each category
//! has at most one limit.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::BudgetError;
use crate::models::{Amount, BudgetLimit, ExpenseCategory};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct BudgetData {
    #[serde(default)]
    budgets: Vec<BudgetLimit>,
}

/// Repository for one user's budget limits
pub struct BudgetRepository {
    path: PathBuf,
    limits: RwLock<BTreeMap<ExpenseCategory, BudgetLimit>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            limits: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load limits from disk; a later record for the same category wins
    pub fn load(&self) -> Result<(), BudgetError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let mut limits = self
            .limits
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        limits.clear();
        for budget in file_data.budgets {
            limits.insert(budget.category, budget);
        }

        debug!(count = limits.len(), path = %self.path.display(), "loaded budget limits");
        Ok(())
    }

    /// Save limits to disk in category order
    pub fn save(&self) -> Result<(), BudgetError> {
        let limits = self
            .limits
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = BudgetData {
            budgets: limits.values().copied().collect(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get the limit for a category, if one is recorded
    pub fn get(&self, category: ExpenseCategory) -> Result<Option<BudgetLimit>, BudgetError> {
        let limits = self
            .limits
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(limits.get(&category).copied())
    }

    /// Point-in-time copy of every recorded limit, in category order
    pub fn snapshot(&self) -> Result<Vec<BudgetLimit>, BudgetError> {
        let limits = self
            .limits
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(limits.values().copied().collect())
    }

    /// Set the limit for a category, creating the record if needed
    ///
    /// Returns the previous record, if any.
    pub fn set_limit(
        &self,
        category: ExpenseCategory,
        limit: Amount,
    ) -> Result<Option<BudgetLimit>, BudgetError> {
        let mut limits = self
            .limits
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(limits.insert(category, BudgetLimit::new(category, limit)))
    }

    /// Record a zero limit for every expense category if none are recorded
    ///
    /// Returns true if defaults were written into memory.
    pub fn seed_defaults_if_empty(&self) -> Result<bool, BudgetError> {
        let mut limits = self
            .limits
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if !limits.is_empty() {
            return Ok(false);
        }

        for budget in BudgetLimit::defaults() {
            limits.insert(budget.category, budget);
        }

        info!(count = limits.len(), "seeded default budget limits");
        Ok(true)
    }
}
