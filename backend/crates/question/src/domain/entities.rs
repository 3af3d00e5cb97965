//! Domain Entities
//!
//! Core business entities for the question catalog.

use chrono::{DateTime, Utc};
use kernel::id::QuestionId;

use crate::domain::value_objects::{Difficulty, Platform};

/// Question entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub question_id: QuestionId,
    pub title: String,
    pub platform: Platform,
    pub question_number: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub description: String,
    pub example: String,
    pub solution: String,
    /// Empty when unknown
    pub company: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Question {
    /// Create a new question from validated input
    pub fn new(input: NewQuestion) -> Self {
        let now = Utc::now();
        Self {
            question_id: QuestionId::new(),
            title: input.title,
            platform: input.platform,
            question_number: input.question_number,
            difficulty: input.difficulty,
            category: input.category,
            description: input.description,
            example: input.example,
            solution: input.solution,
            company: input.company,
            created_at: now,
            updated_at: now,
        }
    }

    /// The composite uniqueness key
    pub fn key(&self) -> QuestionKey {
        QuestionKey {
            title: self.title.clone(),
            platform: self.platform,
            question_number: self.question_number.clone(),
            difficulty: self.difficulty,
            category: self.category.clone(),
        }
    }

    /// Key this question would have after `patch`
    pub fn prospective_key(&self, patch: &QuestionPatch) -> QuestionKey {
        QuestionKey {
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            platform: patch.platform.unwrap_or(self.platform),
            question_number: patch
                .question_number
                .clone()
                .unwrap_or_else(|| self.question_number.clone()),
            difficulty: patch.difficulty.unwrap_or(self.difficulty),
            category: patch
                .category
                .clone()
                .unwrap_or_else(|| self.category.clone()),
        }
    }

    /// Apply a validated partial update and refresh `updated_at`
    pub fn apply(&mut self, patch: QuestionPatch) {
        let QuestionPatch {
            title,
            platform,
            question_number,
            difficulty,
            category,
            description,
            example,
            solution,
            company,
        } = patch;

        if let Some(v) = title {
            self.title = v;
        }
        if let Some(v) = platform {
            self.platform = v;
        }
        if let Some(v) = question_number {
            self.question_number = v;
        }
        if let Some(v) = difficulty {
            self.difficulty = v;
        }
        if let Some(v) = category {
            self.category = v;
        }
        if let Some(v) = description {
            self.description = v;
        }
        if let Some(v) = example {
            self.example = v;
        }
        if let Some(v) = solution {
            self.solution = v;
        }
        if let Some(v) = company {
            self.company = v;
        }

        // Strictly increasing even when two updates land in the same tick
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + chrono::Duration::microseconds(1)
        };
    }
}

/// `(title, platform, questionNumber, difficulty, category)`; unique per catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuestionKey {
    pub title: String,
    pub platform: Platform,
    pub question_number: String,
    pub difficulty: Difficulty,
    pub category: String,
}

/// Validated input for creating a question (all text trimmed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub title: String,
    pub platform: Platform,
    pub question_number: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub description: String,
    pub example: String,
    pub solution: String,
    pub company: String,
}

/// Validated partial update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionPatch {
    pub title: Option<String>,
    pub platform: Option<Platform>,
    pub question_number: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub example: Option<String>,
    pub solution: Option<String>,
    pub company: Option<String>,
}

impl QuestionPatch {
    /// Whether any of the five key fields is being changed
    pub fn touches_key(&self) -> bool {
        self.title.is_some()
            || self.platform.is_some()
            || self.question_number.is_some()
            || self.difficulty.is_some()
            || self.category.is_some()
    }
}

/// One page of a listing plus the total match count
#[derive(Debug, Clone)]
pub struct QuestionPage {
    pub items: Vec<Question>,
    pub total: i64,
}

/// `{ _id: label, count }` aggregate bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountGroup {
    pub label: String,
    pub count: i64,
}

/// Projection used by the dashboard's recent list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentQuestion {
    pub question_id: QuestionId,
    pub title: String,
    pub platform: Platform,
    pub difficulty: Difficulty,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Question> for RecentQuestion {
    fn from(q: &Question) -> Self {
        Self {
            question_id: q.question_id,
            title: q.title.clone(),
            platform: q.platform,
            difficulty: q.difficulty,
            category: q.category.clone(),
            created_at: q.created_at,
        }
    }
}

/// Dashboard analytics snapshot
#[derive(Debug, Clone)]
pub struct DashboardStats {
    pub total_questions: i64,
    pub by_difficulty: Vec<CountGroup>,
    pub by_platform: Vec<CountGroup>,
    pub by_category: Vec<CountGroup>,
    pub by_company: Vec<CountGroup>,
    pub recent: Vec<RecentQuestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new(NewQuestion {
            title: "Two Sum".to_string(),
            platform: Platform::LeetCode,
            question_number: "1".to_string(),
            difficulty: Difficulty::Easy,
            category: "Array".to_string(),
            description: "Find two numbers".to_string(),
            example: "[2,7,11,15], 9 -> [0,1]".to_string(),
            solution: "class Solution {}".to_string(),
            company: String::new(),
        })
    }

    #[test]
    fn test_new_sets_timestamps() {
        let q = sample();
        assert_eq!(q.created_at, q.updated_at);
        assert_eq!(q.company, "");
    }

    #[test]
    fn test_prospective_key_merges() {
        let q = sample();
        let patch = QuestionPatch {
            difficulty: Some(Difficulty::Medium),
            ..Default::default()
        };
        let key = q.prospective_key(&patch);
        assert_eq!(key.title, "Two Sum");
        assert_eq!(key.difficulty, Difficulty::Medium);
        assert!(patch.touches_key());

        let description_only = QuestionPatch {
            description: Some("new".to_string()),
            ..Default::default()
        };
        assert!(!description_only.touches_key());
        assert_eq!(q.prospective_key(&description_only), q.key());
    }

    #[test]
    fn test_apply_refreshes_updated_at() {
        let mut q = sample();
        let before = q.updated_at;
        q.apply(QuestionPatch {
            company: Some("Google".to_string()),
            ..Default::default()
        });
        assert_eq!(q.company, "Google");
        assert_eq!(q.title, "Two Sum");
        assert!(q.updated_at > before);
        assert_eq!(q.created_at, before);
    }
}
