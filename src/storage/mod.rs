//! Storage layer for budget-tracker
//!
//! Per-user JSON collections with atomic writes, plus the shared audit log.
//! Callers load a snapshot, work on it in memory, and save explicitly.

pub mod budgets;
pub mod file_io;
pub mod timestamp;
pub mod transactions;

pub use budgets::BudgetRepository;
pub use file_io::{read_json, write_json_atomic};
pub use transactions::TransactionRepository;

use serde::Serialize;
use tracing::debug;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::TrackerPaths;
use crate::error::BudgetError;
use crate::models::UserId;

/// Storage coordinator for one user's data
pub struct Storage {
    paths: TrackerPaths,
    user: UserId,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Open storage for a user, creating their directories if needed
    ///
    /// Nothing is read until [`Storage::load_all`] is called.
    pub fn open(paths: TrackerPaths, user: UserId) -> Result<Self, BudgetError> {
        paths.ensure_directories(&user)?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file(&user)),
            budgets: BudgetRepository::new(paths.budgets_file(&user)),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
            user,
        })
    }

    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    /// The user whose data this storage holds
    pub fn user(&self) -> &UserId {
        &self.user
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all collections from disk
    pub fn load_all(&mut self) -> Result<(), BudgetError> {
        self.transactions.load()?;
        self.budgets.load()?;
        debug!(user = %self.user, "storage loaded");
        Ok(())
    }

    /// Save all collections to disk
    pub fn save_all(&self) -> Result<(), BudgetError> {
        self.transactions.save()?;
        self.budgets.save()?;
        Ok(())
    }

    /// Record a created entity in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), BudgetError> {
        let entry = AuditEntry::create(&self.user, entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }

    /// Record a changed entity in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), BudgetError> {
        let entry = AuditEntry::update(
            &self.user,
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        );
        self.audit.log(&entry)
    }
}
