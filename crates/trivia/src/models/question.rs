//! Question entity model and request DTOs.

use ensemble_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    /// The wire format calls this field `category`.
    #[serde(rename = "category")]
    pub category_id: DbId,
    pub difficulty: i32,
}

/// DTO for creating a new question.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestion {
    #[validate(length(min = 1))]
    pub question: String,
    #[validate(length(min = 1))]
    pub answer: String,
    /// Category id; the wire format calls this `category`.
    #[serde(rename = "category")]
    pub category_id: DbId,
    #[validate(range(min = 1, max = 5))]
    pub difficulty: i32,
}

/// Body of `POST /questions/search`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Body of `POST /quizzes`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizRequest {
    /// Ids already asked this round; never repeated.
    #[serde(default)]
    pub previous_questions: Vec<DbId>,
    /// Restricts the pool to one category. Absent or id `0` means all.
    pub quiz_category: Option<QuizCategory>,
}

/// Category selector inside a quiz request.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    pub id: DbId,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}
