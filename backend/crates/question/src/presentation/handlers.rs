//! HTTP Handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use kernel::extract::JsonBody;
use kernel::response::ApiResponse;
use std::sync::Arc;

use crate::application::{
    CreateQuestionUseCase, DashboardUseCase, DeleteQuestionUseCase, GetQuestionUseCase,
    ListQuestionsUseCase, QuestionConfig, UpdateQuestionUseCase,
};
use crate::domain::repository::{AnalyticsRepository, QuestionRepository};
use crate::domain::value_objects::Pagination;
use crate::error::QuestionResult;
use crate::presentation::dto::{
    DashboardResponse, ListQuery, ListResponse, QuestionRequest, QuestionResponse,
};

/// Shared state for question handlers
#[derive(Clone)]
pub struct QuestionAppState<R>
where
    R: QuestionRepository + AnalyticsRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<QuestionConfig>,
}

impl<R> QuestionAppState<R>
where
    R: QuestionRepository + AnalyticsRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: QuestionConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Public
// ============================================================================

/// GET /api/questions
pub async fn list_questions<R>(
    State(state): State<QuestionAppState<R>>,
    Query(query): Query<ListQuery>,
) -> QuestionResult<ListResponse>
where
    R: QuestionRepository + AnalyticsRepository + Clone + Send + Sync + 'static,
{
    let pagination = Pagination::from_raw(query.page.as_deref(), query.limit.as_deref());

    let output = ListQuestionsUseCase::new(state.repo.clone())
        .execute(query.filter(), pagination)
        .await?;

    Ok(ListResponse::from(output))
}

/// GET /api/questions/{id}
pub async fn get_question<R>(
    State(state): State<QuestionAppState<R>>,
    Path(id): Path<String>,
) -> QuestionResult<ApiResponse<QuestionResponse>>
where
    R: QuestionRepository + AnalyticsRepository + Clone + Send + Sync + 'static,
{
    let question = GetQuestionUseCase::new(state.repo.clone())
        .execute(&id)
        .await?;

    Ok(ApiResponse::ok(QuestionResponse::from(question)))
}

// ============================================================================
// Admin
// ============================================================================

/// POST /api/questions
pub async fn create_question<R>(
    State(state): State<QuestionAppState<R>>,
    JsonBody(req): JsonBody<QuestionRequest>,
) -> QuestionResult<(StatusCode, ApiResponse<QuestionResponse>)>
where
    R: QuestionRepository + AnalyticsRepository + Clone + Send + Sync + 'static,
{
    let question = CreateQuestionUseCase::new(state.repo.clone())
        .execute(req.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::with_message(
            "Question added successfully",
            QuestionResponse::from(question),
        ),
    ))
}

/// PUT /api/questions/{id}
pub async fn update_question<R>(
    State(state): State<QuestionAppState<R>>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<QuestionRequest>,
) -> QuestionResult<ApiResponse<QuestionResponse>>
where
    R: QuestionRepository + AnalyticsRepository + Clone + Send + Sync + 'static,
{
    let question = UpdateQuestionUseCase::new(state.repo.clone())
        .execute(&id, req.into())
        .await?;

    Ok(ApiResponse::with_message(
        "Question updated successfully",
        QuestionResponse::from(question),
    ))
}

/// DELETE /api/questions/{id}
pub async fn delete_question<R>(
    State(state): State<QuestionAppState<R>>,
    Path(id): Path<String>,
) -> QuestionResult<ApiResponse<()>>
where
    R: QuestionRepository + AnalyticsRepository + Clone + Send + Sync + 'static,
{
    DeleteQuestionUseCase::new(state.repo.clone())
        .execute(&id)
        .await?;

    Ok(ApiResponse::message("Question deleted successfully"))
}

/// GET /api/admin/dashboard
pub async fn dashboard<R>(
    State(state): State<QuestionAppState<R>>,
) -> QuestionResult<ApiResponse<DashboardResponse>>
where
    R: QuestionRepository + AnalyticsRepository + Clone + Send + Sync + 'static,
{
    let stats = DashboardUseCase::new(state.repo.clone(), state.config.clone())
        .execute()
        .await?;

    Ok(ApiResponse::ok(DashboardResponse::from(stats)))
}
