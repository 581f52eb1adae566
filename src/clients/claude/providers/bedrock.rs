use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_bedrockruntime as bedrockrt;
use aws_smithy_types::error::display::DisplayErrorContext;
use aws_smithy_types::Blob;
use tracing::{debug, error, info, instrument};

use super::{ClaudeRequest, ClaudeResponse};
use crate::clients::TextGenerator;
use crate::error::AIError;

#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Debug)]
pub struct BedrockProvider {
    client: bedrockrt::Client,
    max_tokens: u32,
}

impl BedrockProvider {
    #[must_use]
    pub const fn new(client: bedrockrt::Client, max_tokens: u32) -> Self {
        Self { client, max_tokens }
    }

    /// Build a Bedrock Runtime client from shared AWS config, pinned to `region`.
    #[must_use]
    pub fn from_sdk_config(sdk_config: &SdkConfig, region: &str, max_tokens: u32) -> Self {
        let conf = bedrockrt::config::Builder::from(sdk_config)
            .region(bedrockrt::config::Region::new(region.to_string()))
            .build();
        Self::new(bedrockrt::Client::from_conf(conf), max_tokens)
    }
}

#[async_trait]
impl TextGenerator for BedrockProvider {
    #[instrument(skip(self, prompt), fields(model = %model_id, prompt_len = prompt.len()))]
    async fn generate(&self, model_id: &str, prompt: &str) -> Result<String, AIError> {
        let request = ClaudeRequest::bedrock(prompt, self.max_tokens);
        let body = serde_json::to_vec(&request).map_err(|e| AIError::Bedrock(e.to_string()))?;

        debug!(model = %model_id, max_tokens = self.max_tokens, "Calling AWS Bedrock InvokeModel");
        let resp = self
            .client
            .invoke_model()
            .model_id(model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                error!(model = %model_id, error = %message, "Bedrock InvokeModel failed");
                AIError::Bedrock(message)
            })?;

        let parsed: ClaudeResponse = serde_json::from_slice(resp.body().as_ref()).map_err(|e| {
            error!(error = %e, "Failed to parse Bedrock response JSON");
            AIError::Bedrock(format!("invalid response body: {e}"))
        })?;

        let text = parsed.first_text()?;
        info!(model = %model_id, response_len = text.len(), "Received Bedrock response");
        Ok(text)
    }
}
