//! Dashboard Use Case
//!
//! Aggregate counts and a recent-activity list over the whole catalog.

use std::sync::Arc;

use crate::application::config::QuestionConfig;
use crate::domain::entities::DashboardStats;
use crate::domain::repository::AnalyticsRepository;
use crate::error::QuestionResult;

/// Dashboard use case
pub struct DashboardUseCase<R>
where
    R: AnalyticsRepository,
{
    repo: Arc<R>,
    config: Arc<QuestionConfig>,
}

impl<R> DashboardUseCase<R>
where
    R: AnalyticsRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<QuestionConfig>) -> Self {
        Self { repo, config }
    }

    /// Six independent reads; they are not taken from one snapshot.
    pub async fn execute(&self) -> QuestionResult<DashboardStats> {
        let top_n = self.config.dashboard_top_n;

        let (total_questions, by_difficulty, by_platform, by_category, by_company, recent) = tokio::try_join!(
            self.repo.count_total(),
            self.repo.count_by_difficulty(),
            self.repo.count_by_platform(),
            self.repo.top_categories(top_n),
            self.repo.top_companies(top_n),
            self.repo.recent(self.config.dashboard_recent),
        )?;

        Ok(DashboardStats {
            total_questions,
            by_difficulty,
            by_platform,
            by_category,
            by_company,
            recent,
        })
    }
}
