//! Audit history command

use crate::error::BudgetResult;
use crate::storage::Storage;

/// Print the most recent audit entries for the current user
pub fn handle_history_command(storage: &Storage, count: usize) -> BudgetResult<()> {
    let entries = storage.audit().read_recent(storage.user(), count)?;

    if entries.is_empty() {
        println!("No audit entries found.");
        return Ok(());
    }

    println!("Recent changes for {}", storage.user());
    println!("{}", "=".repeat(40));
    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
