//! API DTOs (Data Transfer Objects)

use axum::Json;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::application::ListQuestionsOutput;
use crate::domain::entities::{CountGroup, DashboardStats, Question, RecentQuestion};
use crate::domain::services::QuestionDraft;
use crate::domain::value_objects::{Difficulty, Platform, QuestionFilter};

// ============================================================================
// Requests
// ============================================================================

/// Create / update body
///
/// Every field is optional at the wire level; create requires them through
/// validation, update only checks what is present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub question_number: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub solution: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

/// Question numbers arrive as `"1"` or `1` depending on the client
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Integer(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
    }))
}

impl From<QuestionRequest> for QuestionDraft {
    fn from(req: QuestionRequest) -> Self {
        Self {
            title: req.title,
            platform: req.platform,
            question_number: req.question_number,
            difficulty: req.difficulty,
            category: req.category,
            description: req.description,
            example: req.example,
            solution: req.solution,
            company: req.company,
        }
    }
}

/// `GET /api/questions` query string
///
/// Paging values stay raw so junk falls back to the defaults instead of
/// rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
    pub platform: Option<String>,
    pub difficulty: Option<String>,
    pub category: Option<String>,
    pub company: Option<String>,
}

impl ListQuery {
    pub fn filter(&self) -> QuestionFilter {
        QuestionFilter {
            search: self.search.clone(),
            platform: self.platform.clone(),
            difficulty: self.difficulty.clone(),
            category: self.category.clone(),
            company: self.company.clone(),
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Full question record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub platform: Platform,
    pub question_number: String,
    pub difficulty: Difficulty,
    pub category: String,
    pub description: String,
    pub example: String,
    pub solution: String,
    pub company: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.question_id.into_uuid(),
            title: q.title,
            platform: q.platform,
            question_number: q.question_number,
            difficulty: q.difficulty,
            category: q.category,
            description: q.description,
            example: q.example,
            solution: q.solution,
            company: q.company,
            created_at: q.created_at,
            updated_at: q.updated_at,
        }
    }
}

/// Listing envelope; paging fields sit beside `data`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub success: bool,
    pub count: usize,
    pub total: i64,
    pub total_pages: i64,
    pub current_page: i64,
    pub data: Vec<QuestionResponse>,
}

impl From<ListQuestionsOutput> for ListResponse {
    fn from(output: ListQuestionsOutput) -> Self {
        Self {
            success: true,
            count: output.items.len(),
            total: output.total,
            total_pages: output.total_pages,
            current_page: output.current_page,
            data: output.items.into_iter().map(QuestionResponse::from).collect(),
        }
    }
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// `{ _id: label, count }`
#[derive(Debug, Clone, Serialize)]
pub struct CountGroupResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub count: i64,
}

impl From<CountGroup> for CountGroupResponse {
    fn from(group: CountGroup) -> Self {
        Self {
            id: group.label,
            count: group.count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentQuestionResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub platform: Platform,
    pub difficulty: Difficulty,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl From<RecentQuestion> for RecentQuestionResponse {
    fn from(q: RecentQuestion) -> Self {
        Self {
            id: q.question_id.into_uuid(),
            title: q.title,
            platform: q.platform,
            difficulty: q.difficulty,
            category: q.category,
            created_at: q.created_at,
        }
    }
}

/// Dashboard payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub total_questions: i64,
    pub questions_by_difficulty: Vec<CountGroupResponse>,
    pub questions_by_platform: Vec<CountGroupResponse>,
    pub questions_by_category: Vec<CountGroupResponse>,
    pub questions_by_company: Vec<CountGroupResponse>,
    pub recent_questions: Vec<RecentQuestionResponse>,
}

fn groups(groups: Vec<CountGroup>) -> Vec<CountGroupResponse> {
    groups.into_iter().map(CountGroupResponse::from).collect()
}

impl From<DashboardStats> for DashboardResponse {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_questions: stats.total_questions,
            questions_by_difficulty: groups(stats.by_difficulty),
            questions_by_platform: groups(stats.by_platform),
            questions_by_category: groups(stats.by_category),
            questions_by_company: groups(stats.by_company),
            recent_questions: stats
                .recent
                .into_iter()
                .map(RecentQuestionResponse::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_number_accepts_numbers() {
        let req: QuestionRequest =
            serde_json::from_str(r#"{"questionNumber": 42, "title": "Two Sum"}"#).unwrap();
        assert_eq!(req.question_number.as_deref(), Some("42"));
        assert_eq!(req.title.as_deref(), Some("Two Sum"));
        assert_eq!(req.platform, None);

        let req: QuestionRequest = serde_json::from_str(r#"{"questionNumber": "A-7"}"#).unwrap();
        assert_eq!(req.question_number.as_deref(), Some("A-7"));

        let req: QuestionRequest = serde_json::from_str(r#"{"questionNumber": null}"#).unwrap();
        assert_eq!(req.question_number, None);
    }

    #[test]
    fn test_count_group_shape() {
        let json = serde_json::to_value(CountGroupResponse::from(CountGroup {
            label: "Easy".to_string(),
            count: 3,
        }))
        .unwrap();
        assert_eq!(json, serde_json::json!({ "_id": "Easy", "count": 3 }));
    }
}
