//! In-memory Repository
//!
//! Process-local catalog for tests and database-less runs. Mirrors the
//! PostgreSQL ordering and uniqueness rules.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::QuestionId;
use tokio::sync::RwLock;

use crate::domain::entities::{CountGroup, Question, QuestionKey, QuestionPage, RecentQuestion};
use crate::domain::repository::{AnalyticsRepository, QuestionRepository};
use crate::domain::services::contains_ci;
use crate::domain::value_objects::{Pagination, QuestionFilter};
use crate::error::{QuestionError, QuestionResult};

/// In-memory question repository
#[derive(Clone, Default)]
pub struct InMemoryQuestionRepository {
    questions: Arc<RwLock<HashMap<QuestionId, Question>>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored questions
    pub async fn len(&self) -> usize {
        self.questions.read().await.len()
    }
}

/// Newest first; id breaks ties so pages never overlap
fn newest_first(a: &Question, b: &Question) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.question_id.as_uuid().cmp(a.question_id.as_uuid()))
}

fn matches(q: &Question, filter: &QuestionFilter) -> bool {
    if let Some(search) = &filter.search {
        let hit = contains_ci(&q.title, search)
            || contains_ci(q.platform.as_str(), search)
            || contains_ci(&q.question_number, search)
            || contains_ci(&q.category, search)
            || contains_ci(&q.company, search);
        if !hit {
            return false;
        }
    }
    if let Some(platform) = &filter.platform {
        if q.platform.as_str() != platform {
            return false;
        }
    }
    if let Some(difficulty) = &filter.difficulty {
        if q.difficulty.as_str() != difficulty {
            return false;
        }
    }
    if let Some(category) = &filter.category {
        if !contains_ci(&q.category, category) {
            return false;
        }
    }
    if let Some(company) = &filter.company {
        if !contains_ci(&q.company, company) {
            return false;
        }
    }
    true
}

/// Count per label, count descending then label ascending
fn group_by<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<CountGroup> {
    let mut counts: HashMap<&str, i64> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }

    let mut groups: Vec<CountGroup> = counts
        .into_iter()
        .map(|(label, count)| CountGroup {
            label: label.to_string(),
            count,
        })
        .collect();
    groups.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    groups
}

fn take(groups: Vec<CountGroup>, limit: i64) -> Vec<CountGroup> {
    groups
        .into_iter()
        .take(usize::try_from(limit).unwrap_or(0))
        .collect()
}

fn key_taken(
    questions: &HashMap<QuestionId, Question>,
    key: &QuestionKey,
    exclude: Option<&QuestionId>,
) -> bool {
    questions
        .values()
        .any(|q| Some(&q.question_id) != exclude && &q.key() == key)
}

impl QuestionRepository for InMemoryQuestionRepository {
    async fn list(&self, filter: &QuestionFilter, page: &Pagination) -> QuestionResult<QuestionPage> {
        let questions = self.questions.read().await;

        let mut hits: Vec<&Question> = questions.values().filter(|q| matches(q, filter)).collect();
        hits.sort_by(|a, b| newest_first(a, b));

        let total = hits.len() as i64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(0);

        let items = hits
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        Ok(QuestionPage { items, total })
    }

    async fn find_by_id(&self, question_id: &QuestionId) -> QuestionResult<Option<Question>> {
        Ok(self.questions.read().await.get(question_id).cloned())
    }

    async fn exists_by_title(&self, title: &str) -> QuestionResult<bool> {
        Ok(self
            .questions
            .read()
            .await
            .values()
            .any(|q| q.title == title))
    }

    async fn exists_by_key(
        &self,
        key: &QuestionKey,
        exclude: Option<&QuestionId>,
    ) -> QuestionResult<bool> {
        Ok(key_taken(&*self.questions.read().await, key, exclude))
    }

    async fn insert(&self, question: &Question) -> QuestionResult<()> {
        let mut questions = self.questions.write().await;

        if key_taken(&questions, &question.key(), None) {
            return Err(QuestionError::DuplicateRecord);
        }

        questions.insert(question.question_id, question.clone());
        Ok(())
    }

    async fn update(&self, question: &Question) -> QuestionResult<bool> {
        let mut questions = self.questions.write().await;

        if !questions.contains_key(&question.question_id) {
            return Ok(false);
        }
        if key_taken(&questions, &question.key(), Some(&question.question_id)) {
            return Err(QuestionError::DuplicateRecord);
        }

        questions.insert(question.question_id, question.clone());
        Ok(true)
    }

    async fn delete(&self, question_id: &QuestionId) -> QuestionResult<bool> {
        Ok(self.questions.write().await.remove(question_id).is_some())
    }
}

impl AnalyticsRepository for InMemoryQuestionRepository {
    async fn count_total(&self) -> QuestionResult<i64> {
        Ok(self.questions.read().await.len() as i64)
    }

    async fn count_by_difficulty(&self) -> QuestionResult<Vec<CountGroup>> {
        let questions = self.questions.read().await;
        let mut groups = group_by(questions.values().map(|q| q.difficulty.as_str()));
        groups.sort_by(|a, b| a.label.cmp(&b.label));
        Ok(groups)
    }

    async fn count_by_platform(&self) -> QuestionResult<Vec<CountGroup>> {
        let questions = self.questions.read().await;
        Ok(group_by(questions.values().map(|q| q.platform.as_str())))
    }

    async fn top_categories(&self, limit: i64) -> QuestionResult<Vec<CountGroup>> {
        let questions = self.questions.read().await;
        let groups = group_by(questions.values().map(|q| q.category.as_str()));
        Ok(take(groups, limit))
    }

    async fn top_companies(&self, limit: i64) -> QuestionResult<Vec<CountGroup>> {
        let questions = self.questions.read().await;
        let groups = group_by(
            questions
                .values()
                .map(|q| q.company.as_str())
                .filter(|c| !c.is_empty()),
        );
        Ok(take(groups, limit))
    }

    async fn recent(&self, limit: i64) -> QuestionResult<Vec<RecentQuestion>> {
        let questions = self.questions.read().await;

        let mut all: Vec<&Question> = questions.values().collect();
        all.sort_by(|a, b| newest_first(a, b));

        Ok(all
            .into_iter()
            .take(usize::try_from(limit).unwrap_or(0))
            .map(RecentQuestion::from)
            .collect())
    }
}
