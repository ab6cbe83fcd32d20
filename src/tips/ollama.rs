//! Ollama backend
//!
//! Non-streaming calls to `POST {host}/api/generate` with JSON output mode.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{BudgetError, BudgetResult};

use super::parsing::parse_tips_response;
use super::prompt::render_prompt;
use super::request::{TipsRequest, TipsResponse};
use super::TipsBackend;

/// HTTP client for an Ollama server
#[derive(Clone)]
pub struct OllamaBackend {
    http_client: Client,
    base_url: String,
    model: String,
}

impl OllamaBackend {
    /// Create a backend for `base_url`, timing requests out after `timeout_secs`
    pub fn new(base_url: &str, model: &str, timeout_secs: u64) -> BudgetResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }
}

#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    response: String,
}

#[async_trait]
impl TipsBackend for OllamaBackend {
    async fn generate_tips(&self, request: &TipsRequest) -> BudgetResult<TipsResponse> {
        let body = OllamaRequest {
            model: &self.model,
            prompt: render_prompt(request),
            stream: false,
            format: "json",
        };

        debug!(
            host = %self.base_url,
            model = %self.model,
            income = request.income.len(),
            expenses = request.expenses.len(),
            "requesting budget tips"
        );

        let response = self
            .http_client
            .post(self.generate_url())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, "Ollama request failed");
            return Err(BudgetError::Ai(format!(
                "Ollama returned HTTP {}: {}",
                status,
                text.trim()
            )));
        }

        let ollama_response: OllamaResponse = response.json().await?;
        debug!("Ollama response: {}", ollama_response.response);

        parse_tips_response(&ollama_response.response)
    }

    async fn health_check(&self) -> bool {
        match self
            .http_client
            .get(format!("{}/api/tags", self.base_url))
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn host(&self) -> &str {
        &self.base_url
    }
}
