//! Repository for the `questions` table.

use ensemble_core::types::DbId;
use sqlx::PgPool;

use crate::models::question::{CreateQuestion, Question};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, question, answer, category_id, difficulty";

/// Provides CRUD and quiz-selection queries for trivia questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateQuestion) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (question, answer, category_id, difficulty)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.category_id)
            .bind(input.difficulty)
            .fetch_one(pool)
            .await
    }

    /// One page of questions ordered by id.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Question>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of questions.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(pool)
            .await
    }

    /// One page of a single category's questions ordered by id.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             WHERE category_id = $1
             ORDER BY id LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(category_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Number of questions in one category.
    pub async fn count_by_category(pool: &PgPool, category_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE category_id = $1")
            .bind(category_id)
            .fetch_one(pool)
            .await
    }

    /// Case-insensitive substring search on the question text, unpaginated.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE question ILIKE $1 ORDER BY id");
        sqlx::query_as::<_, Question>(&query)
            .bind(format!("%{term}%"))
            .fetch_all(pool)
            .await
    }

    /// Delete a question by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Questions eligible for the next quiz round: restricted to a category
    /// when `category_id` is `Some`, excluding ids already asked.
    pub async fn quiz_candidates(
        pool: &PgPool,
        category_id: Option<DbId>,
        exclude: &[DbId],
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             WHERE ($1::bigint IS NULL OR category_id = $1)
               AND NOT (id = ANY($2))
             ORDER BY id"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(category_id)
            .bind(exclude)
            .fetch_all(pool)
            .await
    }
}
