pub mod claude;
pub mod mock;

pub use claude::*;
pub use mock::*;

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AIError;

/// Low-level text-generation service.
///
/// Implementors run one single-turn prompt against the named model and return
/// the text of the first content block. Fallback across models is handled by
/// `FallbackInvoker`, not here.
#[async_trait]
pub trait TextGenerator: Send + Sync + Debug {
    async fn generate(&self, model_id: &str, prompt: &str) -> Result<String, AIError>;
}

#[async_trait]
impl TextGenerator for Box<dyn TextGenerator> {
    async fn generate(&self, model_id: &str, prompt: &str) -> Result<String, AIError> {
        self.as_ref().generate(model_id, prompt).await
    }
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Arc<T> {
    async fn generate(&self, model_id: &str, prompt: &str) -> Result<String, AIError> {
        self.as_ref().generate(model_id, prompt).await
    }
}
