use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, info, instrument, warn};

use super::{ClaudeRequest, ClaudeResponse};
use crate::clients::TextGenerator;
use crate::config::KeyFromEnv;
use crate::error::{AIError, ClaudeError, ConfigError};

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

#[allow(clippy::module_name_repetitions)]
#[derive(Clone)]
pub struct AnthropicProvider {
    api_key: String,
    client: Client,
    max_tokens: u32,
}

impl std::fmt::Debug for AnthropicProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicProvider")
            .field("api_key", &"<redacted>")
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl KeyFromEnv for AnthropicProvider {
    const KEY_NAME: &'static str = "ANTHROPIC_API_KEY";
}

impl AnthropicProvider {
    #[must_use]
    pub fn new(api_key: String, max_tokens: u32) -> Self {
        Self { api_key, client: Client::new(), max_tokens }
    }

    pub fn from_env(max_tokens: u32) -> Result<Self, ConfigError> {
        let api_key = Self::find_key().ok_or(ConfigError::Missing(Self::KEY_NAME))?;
        Ok(Self::new(api_key, max_tokens))
    }
}

#[async_trait]
impl TextGenerator for AnthropicProvider {
    #[instrument(skip(self, prompt), fields(model = %model_id, prompt_len = prompt.len()))]
    async fn generate(&self, model_id: &str, prompt: &str) -> Result<String, AIError> {
        let request = ClaudeRequest::anthropic(model_id, prompt, self.max_tokens);
        debug!(model = %model_id, "Preparing Anthropic API request");

        let response = self
            .client
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "HTTP request failed");
                AIError::Claude(ClaudeError::Http(e.to_string()))
            })?;

        debug!(status = %response.status(), "Received response from Anthropic API");

        if response.status() == 429 {
            warn!("Anthropic API rate limit exceeded");
            return Err(AIError::Claude(ClaudeError::RateLimit));
        }

        if response.status() == 401 {
            error!("Anthropic API authentication failed");
            return Err(AIError::Claude(ClaudeError::Authentication));
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = %status, error = %error_text, "Anthropic API error");
            return Err(AIError::Claude(ClaudeError::Api(error_text)));
        }

        let claude_response: ClaudeResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse Anthropic response JSON");
            AIError::Claude(ClaudeError::Http(e.to_string()))
        })?;

        let text = claude_response.first_text()?;
        info!(response_len = text.len(), "Successfully received Anthropic response");
        Ok(text)
    }
}
