//! Ordered model fallback: try each candidate once, return the first success.

use tracing::{info, instrument, warn};

use crate::clients::TextGenerator;
use crate::error::{AIError, QuizError};

/// A successful generation and the model that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub model_id: String,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct FallbackInvoker<G: TextGenerator> {
    generator: G,
    model_ids: Vec<String>,
}

impl<G: TextGenerator> FallbackInvoker<G> {
    pub fn new(generator: G, model_ids: Vec<String>) -> Self {
        info!(candidates = model_ids.len(), "Creating model fallback chain");
        Self { generator, model_ids }
    }

    pub fn model_ids(&self) -> &[String] {
        &self.model_ids
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Run `prompt` against each candidate in order until one answers.
    #[instrument(target = "quizgen::invoker", skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn invoke(&self, prompt: &str) -> Result<Generation, QuizError> {
        let mut last: Option<(String, AIError)> = None;

        for (attempt, model_id) in self.model_ids.iter().enumerate() {
            info!(attempt = attempt + 1, model = %model_id, "Trying candidate model");
            match self.generator.generate(model_id, prompt).await {
                Ok(text) => {
                    info!(model = %model_id, response_len = text.len(), "Candidate model succeeded");
                    return Ok(Generation { model_id: model_id.clone(), text });
                }
                Err(e) => {
                    warn!(model = %model_id, error = %e, "Candidate model failed");
                    last = Some((model_id.clone(), e));
                }
            }
        }

        match last {
            Some((model, source)) => Err(QuizError::ModelsExhausted {
                attempts: self.model_ids.len(),
                model,
                source,
            }),
            None => Err(QuizError::NoCandidates),
        }
    }
}
