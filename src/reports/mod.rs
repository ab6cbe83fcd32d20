//! Reports module for budget-tracker
//!
//! The financial summary (totals and per-category expenses), the spending
//! breakdown, and budget progress. All three are computed from a storage
//! snapshot on every call.

pub mod budget_progress;
pub mod spending;
pub mod summary;

pub use budget_progress::{BudgetProgress, BudgetProgressReport};
pub use spending::{SpendingBreakdown, SpendingSlice};
pub use summary::{expenses_by_category, spent_amount, Summary};
