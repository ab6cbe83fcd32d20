//! budget-tracker - personal budget tracking from the terminal
//!
//! This library provides the core of the budget tracker: recording income
//! and expense transactions, per-category budget limits, aggregate reports,
//! and AI-generated savings tips.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, budget limits)
//! - `storage`: Per-user JSON file storage
//! - `audit`: Audit logging of every change
//! - `services`: Validation and business logic
//! - `reports`: Summary, spending breakdown and budget progress
//! - `tips`: AI savings tips over HTTP
//! - `display`: Terminal formatting helpers
//! - `cli`: Command handlers for the `budget` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::config::paths::TrackerPaths;
//! use budget_tracker::reports::Summary;
//! use budget_tracker::storage::Storage;
//!
//! let paths = TrackerPaths::new()?;
//! let mut storage = Storage::open(paths, "alice".parse()?)?;
//! storage.load_all()?;
//! let summary = Summary::generate(&storage)?;
//! println!("Net balance: {}", summary.net_balance);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tips;

pub use error::BudgetError;
