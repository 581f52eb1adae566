//! Quiz persistence. Every write is an unconditional insert keyed by a fresh id.

pub mod dynamo;
pub mod memory;

pub use dynamo::DynamoQuizStore;
pub use memory::MemoryQuizStore;

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::error::{QuizError, StoreError};
use crate::model::{QuizCandidate, QuizRecord};

#[async_trait]
pub trait QuizStore: Send + Sync + Debug {
    async fn put_quiz(&self, record: &QuizRecord) -> Result<(), StoreError>;
}

#[async_trait]
impl QuizStore for Box<dyn QuizStore> {
    async fn put_quiz(&self, record: &QuizRecord) -> Result<(), StoreError> {
        self.as_ref().put_quiz(record).await
    }
}

#[async_trait]
impl<T: QuizStore + ?Sized> QuizStore for Arc<T> {
    async fn put_quiz(&self, record: &QuizRecord) -> Result<(), StoreError> {
        self.as_ref().put_quiz(record).await
    }
}

/// Give each candidate an id, attach `note_ids`, and write it.
///
/// Writes are sequential. A failure stops the batch; earlier writes stay in the store.
#[instrument(target = "quizgen::store", skip(store, candidates, note_ids), fields(count = candidates.len()))]
pub async fn persist_candidates<S>(
    store: &S,
    candidates: Vec<QuizCandidate>,
    note_ids: &[String],
) -> Result<Vec<QuizRecord>, QuizError>
where
    S: QuizStore + ?Sized,
{
    let mut saved = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let record =
            QuizRecord::from_candidate(Uuid::new_v4().to_string(), note_ids.to_vec(), candidate);
        store.put_quiz(&record).await?;
        debug!(quiz_id = %record.id, "Stored quiz");
        saved.push(record);
    }
    info!(saved = saved.len(), "Persisted quiz batch");
    Ok(saved)
}
