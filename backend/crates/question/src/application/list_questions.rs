//! List Questions Use Case
//!
//! Public search / filter / paginate over the catalog.

use std::sync::Arc;

use crate::domain::entities::Question;
use crate::domain::repository::QuestionRepository;
use crate::domain::value_objects::{Pagination, QuestionFilter};
use crate::error::QuestionResult;

/// List output
#[derive(Debug)]
pub struct ListQuestionsOutput {
    pub items: Vec<Question>,
    pub total: i64,
    pub total_pages: i64,
    pub current_page: i64,
}

/// List questions use case
pub struct ListQuestionsUseCase<R>
where
    R: QuestionRepository,
{
    repo: Arc<R>,
}

impl<R> ListQuestionsUseCase<R>
where
    R: QuestionRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// A page past the end yields no items but the same totals.
    pub async fn execute(
        &self,
        filter: QuestionFilter,
        pagination: Pagination,
    ) -> QuestionResult<ListQuestionsOutput> {
        let filter = filter.normalized();
        let page = self.repo.list(&filter, &pagination).await?;

        Ok(ListQuestionsOutput {
            total_pages: pagination.total_pages(page.total),
            current_page: pagination.page(),
            total: page.total,
            items: page.items,
        })
    }
}
