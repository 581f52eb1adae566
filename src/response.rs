use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::error::QuizError;
use crate::model::QuizBatch;

/// API Gateway proxy response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
    ])
}

impl ApiResponse {
    pub fn json<T: Serialize>(status_code: u16, body: &T) -> Self {
        match serde_json::to_string(body) {
            Ok(body) => Self { status_code, headers: default_headers(), body },
            Err(e) => {
                error!(error = %e, "Failed to serialize response body");
                Self::error(500, format!("failed to serialize response: {e}"))
            }
        }
    }

    pub fn ok(batch: &QuizBatch) -> Self {
        Self::json(200, batch)
    }

    pub fn error(status_code: u16, message: impl Into<String>) -> Self {
        let body = json!({ "error": message.into() }).to_string();
        Self { status_code, headers: default_headers(), body }
    }

    /// Client errors keep their message; server errors are prefixed with a generic one.
    pub fn from_error(err: &QuizError) -> Self {
        if err.is_client_error() {
            Self::error(err.status_code(), err.to_string())
        } else {
            Self::error(err.status_code(), format!("failed to generate or save quiz: {err}"))
        }
    }

    /// Decode `body` back into JSON.
    pub fn body_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
