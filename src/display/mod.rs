//! Display formatting for terminal output
//!
//! Register tables, coloured amounts, percentages and text bars.

pub mod report;
pub mod transaction;

pub use report::{format_amount_colored, format_bar, format_percentage, separator, truncate};
pub use transaction::{format_transaction_register, format_transaction_row};
