//! Configuration module for budget-tracker
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution with a per-user data layout
//! - User settings persistence
//! - AI tips backend selection

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::{AiSettings, Settings, TipsBackendKind};
