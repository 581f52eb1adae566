#[cfg(feature = "anthropic")]
pub mod anthropic;
pub mod bedrock;

#[cfg(feature = "anthropic")]
pub use anthropic::*;
pub use bedrock::*;

use serde::{Deserialize, Serialize};

use crate::error::ClaudeError;

/// Protocol marker Bedrock expects in the body of Anthropic model invocations.
pub const BEDROCK_ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Messages API request. Bedrock takes the model in the URL and the version in
/// the body; the Anthropic API takes the model in the body and the version as a header.
#[derive(Debug, Clone, Serialize)]
pub struct ClaudeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anthropic_version: Option<String>,
    pub max_tokens: u32,
    pub messages: Vec<ClaudeMessage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClaudeMessage {
    pub role: String,
    pub content: Vec<ClaudeContentBlock>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClaudeContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ClaudeResponse {
    #[serde(default)]
    pub content: Vec<ClaudeContent>,
}

#[derive(Debug, Deserialize)]
pub struct ClaudeContent {
    #[serde(rename = "type", default)]
    pub block_type: String,
    #[serde(default)]
    pub text: Option<String>,
}

impl ClaudeRequest {
    #[must_use]
    pub fn bedrock(prompt: &str, max_tokens: u32) -> Self {
        Self {
            model: None,
            anthropic_version: Some(BEDROCK_ANTHROPIC_VERSION.to_string()),
            max_tokens,
            messages: vec![ClaudeMessage::user(prompt)],
        }
    }

    #[must_use]
    pub fn anthropic(model: &str, prompt: &str, max_tokens: u32) -> Self {
        Self {
            model: Some(model.to_string()),
            anthropic_version: None,
            max_tokens,
            messages: vec![ClaudeMessage::user(prompt)],
        }
    }
}

impl ClaudeMessage {
    #[must_use]
    pub fn user(text: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: vec![ClaudeContentBlock {
                block_type: "text".to_string(),
                text: text.to_string(),
            }],
        }
    }
}

impl ClaudeResponse {
    /// Text of the first content block.
    pub fn first_text(self) -> Result<String, ClaudeError> {
        let first = self
            .content
            .into_iter()
            .next()
            .ok_or_else(|| ClaudeError::Api("No content in response".to_string()))?;
        first.text.ok_or_else(|| {
            ClaudeError::Api(format!("First content block is `{}`, not text", first.block_type))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bedrock_body_carries_version_and_no_model() {
        let body = serde_json::to_value(ClaudeRequest::bedrock("hi", 4096)).unwrap();
        assert_eq!(
            body,
            json!({
                "anthropic_version": "bedrock-2023-05-31",
                "max_tokens": 4096,
                "messages": [{"role": "user", "content": [{"type": "text", "text": "hi"}]}]
            })
        );
    }

    #[test]
    fn anthropic_body_carries_model() {
        let body = serde_json::to_value(ClaudeRequest::anthropic("claude-x", "hi", 10)).unwrap();
        assert_eq!(body["model"], "claude-x");
        assert!(body.get("anthropic_version").is_none());
    }

    #[test]
    fn first_text_requires_text_block() {
        let ok: ClaudeResponse =
            serde_json::from_value(json!({"content": [{"type": "text", "text": "{}"}]})).unwrap();
        assert_eq!(ok.first_text().unwrap(), "{}");

        let empty: ClaudeResponse = serde_json::from_value(json!({"content": []})).unwrap();
        assert!(empty.first_text().is_err());

        let tool: ClaudeResponse =
            serde_json::from_value(json!({"content": [{"type": "tool_use", "id": "t"}]})).unwrap();
        assert!(tool.first_text().is_err());
    }
}
