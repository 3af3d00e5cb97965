//! Get Question Use Case

use std::sync::Arc;

use kernel::id::QuestionId;

use crate::domain::entities::Question;
use crate::domain::repository::QuestionRepository;
use crate::error::{QuestionError, QuestionResult};

/// Get question use case
pub struct GetQuestionUseCase<R>
where
    R: QuestionRepository,
{
    repo: Arc<R>,
}

impl<R> GetQuestionUseCase<R>
where
    R: QuestionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// `raw_id` is the path segment; malformed ids are simply not found.
    pub async fn execute(&self, raw_id: &str) -> QuestionResult<Question> {
        let question_id = QuestionId::parse(raw_id).ok_or(QuestionError::NotFound)?;

        self.repo
            .find_by_id(&question_id)
            .await?
            .ok_or(QuestionError::NotFound)
    }
}
