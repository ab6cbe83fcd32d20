//! Audit trail for budget-tracker
//!
//! Every transaction recorded and every budget limit set is appended to a
//! line-delimited JSON log (`audit.log`) with before/after values. The log is
//! shared by all users; each entry carries the user it belongs to.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
