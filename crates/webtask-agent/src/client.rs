//! Anthropic API client backing the autonomous agent
//!
//! Each run is completely stateless: one prompt in, one completion out. No
//! conversation history is kept and no retries are attempted; a failed call
//! surfaces directly in the caller's error event.

use crate::auth;
use crate::types::{AgentRunResult, AnthropicMessage, AnthropicRequest, AnthropicResponse, Model};
use chrono::Utc;
use webtask_core::{Result, WebtaskError};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MAX_TOKENS: usize = 4000;

/// Client for single-shot agent runs against the Anthropic API
#[derive(Debug, Clone)]
pub struct AgentClient {
    model: Model,
    max_tokens: usize,
}

impl AgentClient {
    /// Create a new agent client
    pub fn new(model: Model) -> Self {
        Self {
            model,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Set max tokens for responses
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Run the agent once with the given task text
    pub async fn run(&self, task: &str) -> Result<AgentRunResult> {
        tracing::info!("Running agent with model {:?}", self.model);

        let api_key = auth::api_key()?;

        let request = AnthropicRequest {
            model: self.model.api_name().to_string(),
            max_tokens: self.max_tokens,
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: task.to_string(),
            }],
        };

        let client = reqwest::Client::new();
        let response = client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| WebtaskError::Api(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown".to_string());
            return Err(WebtaskError::Api(format!(
                "Anthropic API error {}: {}",
                status, error_text
            )));
        }

        let anthropic_response: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| WebtaskError::Api(format!("Failed to parse response: {}", e)))?;

        let output = anthropic_response
            .content
            .first()
            .ok_or_else(|| WebtaskError::Api("No content in response".to_string()))?
            .text
            .clone();

        tracing::info!("Agent run complete ({} chars)", output.len());

        Ok(AgentRunResult {
            output,
            timestamp: Utc::now(),
        })
    }
}

impl Default for AgentClient {
    fn default() -> Self {
        Self::new(Model::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = AgentClient::new(Model::Haiku).with_max_tokens(1000);
        assert_eq!(client.model, Model::Haiku);
        assert_eq!(client.max_tokens, 1000);
    }
}
