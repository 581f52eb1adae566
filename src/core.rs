//! Request orchestration: prompt → model fallback → sanitize → persist.
//!
//! `QuizService` owns its collaborators so the entry point can build the
//! AWS clients once per process and tests can swap in mocks.

use serde_json::Value;
use tracing::{error, info, instrument, warn};

use crate::clients::TextGenerator;
use crate::error::QuizError;
use crate::invoker::FallbackInvoker;
use crate::json_utils::parse_quiz_response;
use crate::model::QuizBatch;
use crate::prompt::build_prompt;
use crate::request::QuizRequest;
use crate::response::ApiResponse;
use crate::store::{persist_candidates, QuizStore};

#[derive(Debug, Clone)]
pub struct QuizService<G: TextGenerator, S: QuizStore> {
    invoker: FallbackInvoker<G>,
    store: S,
}

impl<G: TextGenerator, S: QuizStore> QuizService<G, S> {
    pub fn new(generator: G, model_ids: Vec<String>, store: S) -> Self {
        Self::from_parts(FallbackInvoker::new(generator, model_ids), store)
    }

    pub fn from_parts(invoker: FallbackInvoker<G>, store: S) -> Self {
        Self { invoker, store }
    }

    pub fn invoker(&self) -> &FallbackInvoker<G> {
        &self.invoker
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Generate, parse, and persist a quiz for a validated request.
    #[instrument(
        target = "quizgen::service",
        skip(self, request),
        fields(note_len = request.note.len(), num_questions = request.num_questions, format = %request.format)
    )]
    pub async fn generate(&self, request: &QuizRequest) -> Result<QuizBatch, QuizError> {
        let prompt = build_prompt(&request.prompt_params());
        let generation = self.invoker.invoke(&prompt).await?;
        let candidates = parse_quiz_response(&generation.text)?;
        info!(model = %generation.model_id, candidates = candidates.len(), "Model produced quiz");
        let quizzies = persist_candidates(&self.store, candidates, &request.note_ids).await?;
        Ok(QuizBatch { quizzies })
    }

    /// Handle one inbound event end to end. Never fails: errors become 4xx/5xx envelopes.
    pub async fn handle_event(&self, event: Value) -> ApiResponse {
        let result = match QuizRequest::from_event(event) {
            Ok(request) => self.generate(&request).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(batch) => {
                info!(saved = batch.quizzies.len(), "Quiz request completed");
                ApiResponse::ok(&batch)
            }
            Err(e) if e.is_client_error() => {
                warn!(error = %e, "Rejected quiz request");
                ApiResponse::from_error(&e)
            }
            Err(e) => {
                error!(error = %e, "Quiz request failed");
                ApiResponse::from_error(&e)
            }
        }
    }
}
