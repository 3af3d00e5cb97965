//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::QuestionId;

use crate::domain::entities::{CountGroup, Question, QuestionKey, QuestionPage, RecentQuestion};
use crate::domain::value_objects::{Pagination, QuestionFilter};
use crate::error::QuestionResult;

/// Question persistence
#[trait_variant::make(QuestionRepository: Send)]
pub trait LocalQuestionRepository {
    /// Filtered, newest-first page plus the total number of matches
    async fn list(&self, filter: &QuestionFilter, page: &Pagination) -> QuestionResult<QuestionPage>;

    /// Find question by ID
    async fn find_by_id(&self, question_id: &QuestionId) -> QuestionResult<Option<Question>>;

    /// Whether any question has exactly this title
    async fn exists_by_title(&self, title: &str) -> QuestionResult<bool>;

    /// Whether a question other than `exclude` has this composite key
    async fn exists_by_key(
        &self,
        key: &QuestionKey,
        exclude: Option<&QuestionId>,
    ) -> QuestionResult<bool>;

    /// Insert a new question
    ///
    /// A composite-key collision fails with `QuestionError::DuplicateRecord`.
    async fn insert(&self, question: &Question) -> QuestionResult<()>;

    /// Overwrite a stored question; `false` if it no longer exists
    async fn update(&self, question: &Question) -> QuestionResult<bool>;

    /// Delete by ID; `false` if nothing was deleted
    async fn delete(&self, question_id: &QuestionId) -> QuestionResult<bool>;
}

/// Read-only aggregate queries for the dashboard
#[trait_variant::make(AnalyticsRepository: Send)]
pub trait LocalAnalyticsRepository {
    async fn count_total(&self) -> QuestionResult<i64>;

    /// Grouped by difficulty, label ascending
    async fn count_by_difficulty(&self) -> QuestionResult<Vec<CountGroup>>;

    /// Grouped by platform, count descending
    async fn count_by_platform(&self) -> QuestionResult<Vec<CountGroup>>;

    /// Top categories, count descending
    async fn top_categories(&self, limit: i64) -> QuestionResult<Vec<CountGroup>>;

    /// Top non-empty companies, count descending
    async fn top_companies(&self, limit: i64) -> QuestionResult<Vec<CountGroup>>;

    /// Most recently created questions
    async fn recent(&self, limit: i64) -> QuestionResult<Vec<RecentQuestion>>;
}
