use thiserror::Error;

/// Top-level failure of one quiz-generation request.
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("no candidate models configured")]
    NoCandidates,
    #[error("all {attempts} candidate models failed; last error from {model}: {source}")]
    ModelsExhausted {
        attempts: usize,
        model: String,
        #[source]
        source: AIError,
    },
    #[error("no JSON object found in model response: {0}")]
    NoJsonFound(String),
    #[error("failed to parse model response as JSON: {0}. Raw response: {1}")]
    JsonParse(#[source] serde_json::Error, String),
    #[error("persistence error: {0}")]
    Persistence(#[from] StoreError),
}

impl QuizError {
    /// HTTP status the handler reports for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest(_) => 400,
            _ => 500,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

#[derive(Error, Debug)]
pub enum AIError {
    #[error("Bedrock error: {0}")]
    Bedrock(String),
    #[error("Claude API error: {0}")]
    Claude(#[from] ClaudeError),
    #[error("Mock error: {0}")]
    Mock(String),
}

#[derive(Error, Debug)]
pub enum ClaudeError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("API error: {0}")]
    Api(String),
    #[error("Rate limit exceeded")]
    RateLimit,
    #[error("Authentication failed")]
    Authentication,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to write quiz {id}: {message}")]
    Write { id: String, message: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
}
