//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_unique_violation;
use kernel::id::QuestionId;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::domain::entities::{CountGroup, Question, QuestionKey, QuestionPage, RecentQuestion};
use crate::domain::repository::{AnalyticsRepository, QuestionRepository};
use crate::domain::services::escape_like;
use crate::domain::value_objects::{Difficulty, Pagination, Platform, QuestionFilter};
use crate::error::{QuestionError, QuestionResult};

/// Columns matched by the free-text `search` filter
const SEARCH_COLUMNS: [&str; 5] = ["title", "platform", "question_number", "category", "company"];

/// PostgreSQL-backed question repository
#[derive(Clone)]
pub struct PgQuestionRepository {
    pool: PgPool,
}

impl PgQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn contains_pattern(raw: &str) -> String {
    format!("%{}%", escape_like(raw))
}

/// Append ` WHERE ...` for every present filter (AND-combined)
fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &QuestionFilter) {
    qb.push(" WHERE TRUE");

    if let Some(search) = &filter.search {
        let pattern = contains_pattern(search);
        qb.push(" AND (");
        for (i, column) in SEARCH_COLUMNS.iter().enumerate() {
            if i > 0 {
                qb.push(" OR ");
            }
            qb.push(*column)
                .push(" ILIKE ")
                .push_bind(pattern.clone())
                .push(r" ESCAPE '\'");
        }
        qb.push(")");
    }
    if let Some(platform) = &filter.platform {
        qb.push(" AND platform = ").push_bind(platform.clone());
    }
    if let Some(difficulty) = &filter.difficulty {
        qb.push(" AND difficulty = ").push_bind(difficulty.clone());
    }
    if let Some(category) = &filter.category {
        qb.push(" AND category ILIKE ")
            .push_bind(contains_pattern(category))
            .push(r" ESCAPE '\'");
    }
    if let Some(company) = &filter.company {
        qb.push(" AND company ILIKE ")
            .push_bind(contains_pattern(company))
            .push(r" ESCAPE '\'");
    }
}

fn map_write_error(e: sqlx::Error) -> QuestionError {
    if is_unique_violation(&e) {
        QuestionError::DuplicateRecord
    } else {
        QuestionError::Database(e)
    }
}

impl QuestionRepository for PgQuestionRepository {
    async fn list(&self, filter: &QuestionFilter, page: &Pagination) -> QuestionResult<QuestionPage> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM questions");
        push_filter(&mut count, filter);
        let total: i64 = count.build_query_scalar().fetch_one(&self.pool).await?;

        let mut select = QueryBuilder::<Postgres>::new(
            r#"
            SELECT
                question_id,
                title,
                platform,
                question_number,
                difficulty,
                category,
                description,
                example,
                solution,
                company,
                created_at,
                updated_at
            FROM questions"#,
        );
        push_filter(&mut select, filter);
        select
            .push(" ORDER BY created_at DESC, question_id DESC LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());

        let rows: Vec<QuestionRow> = select.build_query_as().fetch_all(&self.pool).await?;
        let items = rows
            .into_iter()
            .map(QuestionRow::into_question)
            .collect::<QuestionResult<Vec<_>>>()?;

        Ok(QuestionPage { items, total })
    }

    async fn find_by_id(&self, question_id: &QuestionId) -> QuestionResult<Option<Question>> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT
                question_id,
                title,
                platform,
                question_number,
                difficulty,
                category,
                description,
                example,
                solution,
                company,
                created_at,
                updated_at
            FROM questions
            WHERE question_id = $1
            "#,
        )
        .bind(question_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(QuestionRow::into_question).transpose()
    }

    async fn exists_by_title(&self, title: &str) -> QuestionResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM questions WHERE title = $1)")
                .bind(title)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn exists_by_key(
        &self,
        key: &QuestionKey,
        exclude: Option<&QuestionId>,
    ) -> QuestionResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM questions
                WHERE title = $1
                  AND platform = $2
                  AND question_number = $3
                  AND difficulty = $4
                  AND category = $5
                  AND ($6::uuid IS NULL OR question_id <> $6)
            )
            "#,
        )
        .bind(&key.title)
        .bind(key.platform.as_str())
        .bind(&key.question_number)
        .bind(key.difficulty.as_str())
        .bind(&key.category)
        .bind(exclude.map(|id| *id.as_uuid()))
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn insert(&self, question: &Question) -> QuestionResult<()> {
        sqlx::query(
            r#"
            INSERT INTO questions (
                question_id,
                title,
                platform,
                question_number,
                difficulty,
                category,
                description,
                example,
                solution,
                company,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(question.question_id.as_uuid())
        .bind(&question.title)
        .bind(question.platform.as_str())
        .bind(&question.question_number)
        .bind(question.difficulty.as_str())
        .bind(&question.category)
        .bind(&question.description)
        .bind(&question.example)
        .bind(&question.solution)
        .bind(&question.company)
        .bind(question.created_at)
        .bind(question.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }

    async fn update(&self, question: &Question) -> QuestionResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE questions SET
                title = $2,
                platform = $3,
                question_number = $4,
                difficulty = $5,
                category = $6,
                description = $7,
                example = $8,
                solution = $9,
                company = $10,
                updated_at = $11
            WHERE question_id = $1
            "#,
        )
        .bind(question.question_id.as_uuid())
        .bind(&question.title)
        .bind(question.platform.as_str())
        .bind(&question.question_number)
        .bind(question.difficulty.as_str())
        .bind(&question.category)
        .bind(&question.description)
        .bind(&question.example)
        .bind(&question.solution)
        .bind(&question.company)
        .bind(question.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, question_id: &QuestionId) -> QuestionResult<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE question_id = $1")
            .bind(question_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl AnalyticsRepository for PgQuestionRepository {
    async fn count_total(&self) -> QuestionResult<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn count_by_difficulty(&self) -> QuestionResult<Vec<CountGroup>> {
        let rows = sqlx::query_as::<_, CountGroupRow>(
            r#"
            SELECT difficulty AS label, COUNT(*) AS count
            FROM questions
            GROUP BY difficulty
            ORDER BY difficulty COLLATE "C"
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CountGroup::from).collect())
    }

    async fn count_by_platform(&self) -> QuestionResult<Vec<CountGroup>> {
        let rows = sqlx::query_as::<_, CountGroupRow>(
            r#"
            SELECT platform AS label, COUNT(*) AS count
            FROM questions
            GROUP BY platform
            ORDER BY count DESC, platform COLLATE "C"
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CountGroup::from).collect())
    }

    async fn top_categories(&self, limit: i64) -> QuestionResult<Vec<CountGroup>> {
        let rows = sqlx::query_as::<_, CountGroupRow>(
            r#"
            SELECT category AS label, COUNT(*) AS count
            FROM questions
            GROUP BY category
            ORDER BY count DESC, category COLLATE "C"
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CountGroup::from).collect())
    }

    async fn top_companies(&self, limit: i64) -> QuestionResult<Vec<CountGroup>> {
        let rows = sqlx::query_as::<_, CountGroupRow>(
            r#"
            SELECT company AS label, COUNT(*) AS count
            FROM questions
            WHERE company <> ''
            GROUP BY company
            ORDER BY count DESC, company COLLATE "C"
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CountGroup::from).collect())
    }

    async fn recent(&self, limit: i64) -> QuestionResult<Vec<RecentQuestion>> {
        let rows = sqlx::query_as::<_, RecentRow>(
            r#"
            SELECT
                question_id,
                title,
                platform,
                difficulty,
                category,
                created_at
            FROM questions
            ORDER BY created_at DESC, question_id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(RecentRow::into_recent).collect()
    }
}

// ============================================================================
// Row Types
// ============================================================================

fn parse_platform(raw: &str) -> QuestionResult<Platform> {
    raw.parse()
        .map_err(|_| QuestionError::Internal(format!("Unknown platform in store: {raw}")))
}

fn parse_difficulty(raw: &str) -> QuestionResult<Difficulty> {
    raw.parse()
        .map_err(|_| QuestionError::Internal(format!("Unknown difficulty in store: {raw}")))
}

#[derive(sqlx::FromRow)]
struct QuestionRow {
    question_id: Uuid,
    title: String,
    platform: String,
    question_number: String,
    difficulty: String,
    category: String,
    description: String,
    example: String,
    solution: String,
    company: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl QuestionRow {
    fn into_question(self) -> QuestionResult<Question> {
        Ok(Question {
            question_id: QuestionId::from_uuid(self.question_id),
            platform: parse_platform(&self.platform)?,
            difficulty: parse_difficulty(&self.difficulty)?,
            title: self.title,
            question_number: self.question_number,
            category: self.category,
            description: self.description,
            example: self.example,
            solution: self.solution,
            company: self.company,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct RecentRow {
    question_id: Uuid,
    title: String,
    platform: String,
    difficulty: String,
    category: String,
    created_at: DateTime<Utc>,
}

impl RecentRow {
    fn into_recent(self) -> QuestionResult<RecentQuestion> {
        Ok(RecentQuestion {
            question_id: QuestionId::from_uuid(self.question_id),
            platform: parse_platform(&self.platform)?,
            difficulty: parse_difficulty(&self.difficulty)?,
            title: self.title,
            category: self.category,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CountGroupRow {
    label: String,
    count: i64,
}

impl From<CountGroupRow> for CountGroup {
    fn from(row: CountGroupRow) -> Self {
        CountGroup {
            label: row.label,
            count: row.count,
        }
    }
}
