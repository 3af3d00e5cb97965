//! Create Question Use Case

use std::sync::Arc;

use crate::domain::entities::Question;
use crate::domain::repository::QuestionRepository;
use crate::domain::services::{QuestionDraft, validate_new};
use crate::error::{QuestionError, QuestionResult};

/// Create question use case
pub struct CreateQuestionUseCase<R>
where
    R: QuestionRepository,
{
    repo: Arc<R>,
}

impl<R> CreateQuestionUseCase<R>
where
    R: QuestionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate, reject a title that already exists, then insert.
    ///
    /// The title check is only a fast path; the composite unique
    /// constraint in the store is what actually prevents duplicates.
    pub async fn execute(&self, draft: QuestionDraft) -> QuestionResult<Question> {
        let input = validate_new(draft).map_err(QuestionError::Validation)?;

        if self.repo.exists_by_title(&input.title).await? {
            return Err(QuestionError::DuplicateTitle);
        }

        let question = Question::new(input);
        self.repo.insert(&question).await?;

        tracing::info!(
            question_id = %question.question_id,
            title = %question.title,
            "Question created"
        );

        Ok(question)
    }
}
