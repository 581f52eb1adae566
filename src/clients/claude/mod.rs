pub mod models;
pub mod providers;

pub use models::*;
pub use providers::*;

use async_trait::async_trait;
use aws_config::SdkConfig;
use tracing::info;

use super::TextGenerator;
use crate::config::{AppConfig, Provider};
use crate::error::{AIError, ConfigError};

/// Claude reached through one of the supported hosts, chosen at startup.
#[derive(Clone, Debug)]
pub enum ClaudeClient {
    Bedrock(BedrockProvider),
    #[cfg(feature = "anthropic")]
    Anthropic(AnthropicProvider),
}

impl ClaudeClient {
    /// Build the provider selected by `config`.
    pub fn from_config(config: &AppConfig, sdk_config: &SdkConfig) -> Result<Self, ConfigError> {
        info!(provider = %config.provider, max_tokens = config.max_tokens, "Creating Claude client");
        match config.provider {
            Provider::Bedrock => Ok(Self::Bedrock(BedrockProvider::from_sdk_config(
                sdk_config,
                &config.bedrock_region,
                config.max_tokens,
            ))),
            #[cfg(feature = "anthropic")]
            Provider::Anthropic => Ok(Self::Anthropic(AnthropicProvider::from_env(config.max_tokens)?)),
        }
    }
}

#[async_trait]
impl TextGenerator for ClaudeClient {
    async fn generate(&self, model_id: &str, prompt: &str) -> Result<String, AIError> {
        match self {
            Self::Bedrock(provider) => provider.generate(model_id, prompt).await,
            #[cfg(feature = "anthropic")]
            Self::Anthropic(provider) => provider.generate(model_id, prompt).await,
        }
    }
}
