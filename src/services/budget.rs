//! Budget service
//!
//! Budget limits: seeding the zero defaults, setting a limit, and progress
//! against spending.

use tracing::info;

use crate::audit::EntityType;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Amount, BudgetLimit, ExpenseCategory};
use crate::reports::BudgetProgressReport;
use crate::storage::Storage;

/// Service for budget limit management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Seed a zero limit for every expense category if the user has none
    ///
    /// Returns true if defaults were created.
    pub fn ensure_defaults(&self) -> BudgetResult<bool> {
        if !self.storage.budgets.seed_defaults_if_empty()? {
            return Ok(false);
        }

        self.storage.budgets.save()?;

        for budget in self.storage.budgets.snapshot()? {
            self.storage.log_create(
                EntityType::BudgetLimit,
                budget.category.as_str(),
                None,
                &budget,
            )?;
        }

        info!(user = %self.storage.user(), "default budget limits created");
        Ok(true)
    }

    /// Set the limit for a category
    pub fn set_limit(&self, category: ExpenseCategory, limit: Amount) -> BudgetResult<BudgetLimit> {
        if !limit.is_finite() || limit.is_negative() {
            return Err(BudgetError::Validation(format!(
                "Budget limit must be zero or more, got {}",
                limit.value()
            )));
        }

        self.ensure_defaults()?;

        let previous = self.storage.budgets.set_limit(category, limit)?;
        self.storage.budgets.save()?;

        let budget = BudgetLimit::new(category, limit);
        match previous {
            Some(before) => self.storage.log_update(
                EntityType::BudgetLimit,
                category.as_str(),
                None,
                &before,
                &budget,
                Some(format!("limit: {} -> {}", before.limit, budget.limit)),
            )?,
            None => self.storage.log_create(
                EntityType::BudgetLimit,
                category.as_str(),
                None,
                &budget,
            )?,
        }

        info!(
            user = %self.storage.user(),
            category = category.as_str(),
            limit = limit.value(),
            "budget limit set"
        );
        Ok(budget)
    }

    /// All recorded limits, in category order
    pub fn list(&self) -> BudgetResult<Vec<BudgetLimit>> {
        self.storage.budgets.snapshot()
    }

    /// Each limit against what has been spent in its category
    pub fn progress(&self) -> BudgetResult<BudgetProgressReport> {
        BudgetProgressReport::generate(self.storage)
    }
}
