//! Update Question Use Case

use std::sync::Arc;

use kernel::id::QuestionId;

use crate::domain::entities::Question;
use crate::domain::repository::QuestionRepository;
use crate::domain::services::{QuestionDraft, validate_patch};
use crate::error::{QuestionError, QuestionResult};

/// Update question use case
pub struct UpdateQuestionUseCase<R>
where
    R: QuestionRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateQuestionUseCase<R>
where
    R: QuestionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Order: resolve id, validate present fields, composite-key check
    /// (only when a key field is sent), then write.
    pub async fn execute(&self, raw_id: &str, draft: QuestionDraft) -> QuestionResult<Question> {
        let question_id = QuestionId::parse(raw_id).ok_or(QuestionError::NotFound)?;

        let mut question = self
            .repo
            .find_by_id(&question_id)
            .await?
            .ok_or(QuestionError::NotFound)?;

        let patch = validate_patch(draft).map_err(QuestionError::Validation)?;

        if patch.touches_key() {
            let key = question.prospective_key(&patch);
            if self.repo.exists_by_key(&key, Some(&question_id)).await? {
                return Err(QuestionError::DuplicateCombination);
            }
        }

        question.apply(patch);

        // Deleted between the lookup and the write
        if !self.repo.update(&question).await? {
            return Err(QuestionError::NotFound);
        }

        tracing::info!(question_id = %question_id, "Question updated");

        Ok(question)
    }
}
