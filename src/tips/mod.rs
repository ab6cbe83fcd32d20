//! AI savings tips
//!
//! Sends the user's income, expenses and budget limits to a language model
//! and reads back numbered recommendations plus a short summary.
//!
//! - `TipsBackend` trait: what every backend can do
//! - `TipsClient` enum: concrete dispatch over the configured backend
//! - `OllamaBackend`: HTTP client for an Ollama server
//! - `MockBackend`: deterministic offline answers, for tests and demos

mod mock;
mod ollama;
pub mod parsing;
pub mod prompt;
pub mod request;

pub use mock::MockBackend;
pub use ollama::OllamaBackend;
pub use request::{ExpenseEntry, IncomeEntry, LimitEntry, TipsRequest, TipsResponse};

use async_trait::async_trait;

use crate::config::{AiSettings, TipsBackendKind};
use crate::error::BudgetResult;

/// Shown to the user whenever tip generation fails; the cause goes to the log
pub const FAILURE_MESSAGE: &str =
    "An error occurred while generating AI budget tips. Please try again.";

/// Interface shared by all tips backends
#[async_trait]
pub trait TipsBackend: Send + Sync {
    /// Ask the model for recommendations on this snapshot
    async fn generate_tips(&self, request: &TipsRequest) -> BudgetResult<TipsResponse>;

    /// Whether the backend is reachable
    async fn health_check(&self) -> bool;

    fn model(&self) -> &str;

    fn host(&self) -> &str;
}

/// The configured tips backend
#[derive(Clone)]
pub enum TipsClient {
    Ollama(OllamaBackend),
    Mock(MockBackend),
}

impl TipsClient {
    /// Build the client described by the settings
    pub fn from_settings(settings: &AiSettings) -> BudgetResult<Self> {
        match settings.backend {
            TipsBackendKind::Ollama => Ok(TipsClient::Ollama(OllamaBackend::new(
                &settings.host,
                &settings.model,
                settings.timeout_secs,
            )?)),
            TipsBackendKind::Mock => Ok(TipsClient::Mock(MockBackend::new())),
        }
    }

    /// Short backend name for display
    pub fn kind(&self) -> &'static str {
        match self {
            TipsClient::Ollama(_) => "ollama",
            TipsClient::Mock(_) => "mock",
        }
    }
}

#[async_trait]
impl TipsBackend for TipsClient {
    async fn generate_tips(&self, request: &TipsRequest) -> BudgetResult<TipsResponse> {
        match self {
            TipsClient::Ollama(b) => b.generate_tips(request).await,
            TipsClient::Mock(b) => b.generate_tips(request).await,
        }
    }

    async fn health_check(&self) -> bool {
        match self {
            TipsClient::Ollama(b) => b.health_check().await,
            TipsClient::Mock(b) => b.health_check().await,
        }
    }

    fn model(&self) -> &str {
        match self {
            TipsClient::Ollama(b) => b.model(),
            TipsClient::Mock(b) => b.model(),
        }
    }

    fn host(&self) -> &str {
        match self {
            TipsClient::Ollama(b) => b.host(),
            TipsClient::Mock(b) => b.host(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_follows_settings() {
        let mut settings = AiSettings::default();
        let client = TipsClient::from_settings(&settings).unwrap();
        assert_eq!(client.kind(), "ollama");
        assert_eq!(client.host(), "http://localhost:11434");
        assert_eq!(client.model(), "llama3.2");

        settings.backend = TipsBackendKind::Mock;
        let client = TipsClient::from_settings(&settings).unwrap();
        assert_eq!(client.kind(), "mock");
    }

    #[tokio::test]
    async fn test_client_dispatches_to_mock() {
        let settings = AiSettings {
            backend: TipsBackendKind::Mock,
            ..AiSettings::default()
        };
        let client = TipsClient::from_settings(&settings).unwrap();

        assert!(client.health_check().await);
        let response = client.generate_tips(&TipsRequest::default()).await.unwrap();
        assert!(!response.recommendations.is_empty());
    }
}
