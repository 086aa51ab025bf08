// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Represents the 'questions' table in the database.
///
/// The serialized row is also the wire representation returned to clients.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text of the question itself.
    pub question: String,

    pub answer: String,

    /// Category reference, stored as text and compared against the
    /// stringified category id. Not validated against the categories table.
    pub category: String,

    pub difficulty: i64,
}

/// A category reference as clients send it: either a bare id or its string form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Id(i64),
    Text(String),
}

impl CategoryRef {
    /// Normalizes to the stored text form.
    pub fn as_text(&self) -> String {
        match self {
            CategoryRef::Id(id) => id.to_string(),
            CategoryRef::Text(s) => s.clone(),
        }
    }
}

/// DTO for creating a new question.
/// All four fields must be present and plausibly typed; any failure at this
/// endpoint collapses to a 400 response.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1))]
    pub question: String,
    #[validate(length(min = 1))]
    pub answer: String,
    pub category: CategoryRef,
    pub difficulty: i64,
}

/// DTO for the search endpoint. The term defaults to the empty string,
/// which matches every question.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: String,
}

/// DTO for playing the quiz.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: QuizCategory,
    /// Ids of questions already served this game; absent means none.
    #[serde(default)]
    pub previous_questions: Vec<i64>,
}

/// The category scope for a quiz round. `id == 0` means all categories.
/// Clients also send a `type` label alongside the id; it is ignored.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: i64,
}
