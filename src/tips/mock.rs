//! Mock backend
//!
//! Answers without a model: flags categories over their limit and summarizes
//! income against spending. Deterministic for a given request.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Amount, ExpenseCategory};

use super::request::{TipsRequest, TipsResponse};
use super::TipsBackend;

/// Offline tips backend
#[derive(Debug, Clone)]
pub struct MockBackend {
    /// When false, health checks fail and requests error
    pub healthy: bool,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self { healthy: true }
    }

    pub fn unhealthy() -> Self {
        Self { healthy: false }
    }
}

#[async_trait]
impl TipsBackend for MockBackend {
    async fn generate_tips(&self, request: &TipsRequest) -> BudgetResult<TipsResponse> {
        if !self.healthy {
            return Err(BudgetError::Ai("mock backend is unavailable".into()));
        }

        let income: Amount = request.income.iter().map(|e| e.amount).sum();
        let spent: Amount = request.expenses.iter().map(|e| e.amount).sum();

        let mut by_category: BTreeMap<ExpenseCategory, Amount> = BTreeMap::new();
        for entry in &request.expenses {
            *by_category.entry(entry.category).or_default() += entry.amount;
        }

        let mut recommendations = Vec::new();
        for limit in &request.budget_limits {
            let used = by_category.get(&limit.category).copied().unwrap_or_default();
            if limit.limit.is_positive() && used > limit.limit {
                recommendations.push(format!(
                    "Cut back on {}: you spent {} against a {} limit.",
                    limit.category, used, limit.limit
                ));
            } else if limit.limit.is_zero() && used.is_positive() {
                recommendations.push(format!(
                    "Set a budget limit for {}; you have spent {} there so far.",
                    limit.category, used
                ));
            }
        }

        if recommendations.is_empty() {
            recommendations
                .push("You are within every budget limit. Move the surplus into savings.".into());
        }

        Ok(TipsResponse {
            recommendations,
            summary: format!(
                "You earned {} and spent {}, leaving {}.",
                income,
                spent,
                income - spent
            ),
        })
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }

    fn model(&self) -> &str {
        "mock"
    }

    fn host(&self) -> &str {
        "mock://local"
    }
}
