use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::QuizStore;
use crate::error::StoreError;
use crate::model::QuizRecord;

/// In-process store for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryQuizStore {
    records: Mutex<Vec<QuizRecord>>,
    fail_after: Option<usize>,
}

impl MemoryQuizStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `writes` records, then reject every later write.
    pub fn failing_after(writes: usize) -> Self {
        Self { records: Mutex::default(), fail_after: Some(writes) }
    }

    fn guard(&self) -> MutexGuard<'_, Vec<QuizRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn records(&self) -> Vec<QuizRecord> {
        self.guard().clone()
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }
}

#[async_trait]
impl QuizStore for MemoryQuizStore {
    async fn put_quiz(&self, record: &QuizRecord) -> Result<(), StoreError> {
        let mut records = self.guard();
        if self.fail_after.is_some_and(|limit| records.len() >= limit) {
            return Err(StoreError::Write {
                id: record.id.clone(),
                message: "simulated write failure".to_string(),
            });
        }
        records.push(record.clone());
        Ok(())
    }
}
