//! AI savings tips command

use tracing::{debug, error};

use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::storage::Storage;
use crate::tips::{TipsBackend, TipsClient, TipsRequest, FAILURE_MESSAGE};

/// Whether the tips command succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipsOutcome {
    Success,
    Failure,
}

/// Build a request from the current snapshot and ask the configured model
///
/// Backend failures are not returned as errors: the cause is logged and the
/// user sees the fixed failure message. With `check` set, only reports
/// whether the backend is reachable.
pub async fn handle_tips_command(
    storage: &Storage,
    settings: &Settings,
    check: bool,
) -> BudgetResult<TipsOutcome> {
    let ai = settings.ai.clone().with_env_overrides();
    let client = TipsClient::from_settings(&ai)?;

    if check {
        let healthy = client.health_check().await;
        println!("Backend: {}", client.kind());
        println!("Host:    {}", client.host());
        println!("Model:   {}", client.model());
        println!("Status:  {}", if healthy { "reachable" } else { "unreachable" });
        return Ok(if healthy {
            TipsOutcome::Success
        } else {
            TipsOutcome::Failure
        });
    }

    let transactions = storage.transactions.snapshot()?;
    let limits = storage.budgets.snapshot()?;
    let request = TipsRequest::from_snapshot(&transactions, &limits);

    debug!(
        backend = client.kind(),
        income = request.income.len(),
        expenses = request.expenses.len(),
        limits = request.budget_limits.len(),
        "requesting budget tips"
    );

    match client.generate_tips(&request).await {
        Ok(response) => {
            print!("{}", response.format_terminal());
            Ok(TipsOutcome::Success)
        }
        Err(e) => {
            error!(error = %e, backend = client.kind(), "tip generation failed");
            eprintln!("{}", FAILURE_MESSAGE);
            Ok(TipsOutcome::Failure)
        }
    }
}
