//! Delete Question Use Case

use std::sync::Arc;

use kernel::id::QuestionId;

use crate::domain::repository::QuestionRepository;
use crate::error::{QuestionError, QuestionResult};

/// Delete question use case
pub struct DeleteQuestionUseCase<R>
where
    R: QuestionRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteQuestionUseCase<R>
where
    R: QuestionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, raw_id: &str) -> QuestionResult<()> {
        let question_id = QuestionId::parse(raw_id).ok_or(QuestionError::NotFound)?;

        if !self.repo.delete(&question_id).await? {
            return Err(QuestionError::NotFound);
        }

        tracing::info!(question_id = %question_id, "Question deleted");

        Ok(())
    }
}
