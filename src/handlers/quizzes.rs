// src/handlers/quizzes.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use rand::seq::SliceRandom;
use serde_json::Value;
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::question::{Question, QuizRequest},
};

/// Serves one round of the quiz: picks a random question from the requested
/// scope that has not been served before in this game.
///
/// Scope is all questions when `quiz_category.id` is 0, otherwise the
/// questions of that category. Ids listed in `previous_questions` are
/// excluded from the pick; entries that match nothing are simply ignored.
///
/// An exhausted scope is not an error: the response is `question: null` with
/// `success: true`, which the client takes as the end of the game. A missing
/// or malformed body is a 400.
pub async fn play_quiz(
    State(pool): State<SqlitePool>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body.map_err(|_| AppError::BadRequest)?;
    let req: QuizRequest =
        serde_json::from_value(body).map_err(|_| AppError::BadRequest)?;

    let mut available: Vec<i64> = if req.quiz_category.id == 0 {
        sqlx::query_scalar("SELECT id FROM questions")
            .fetch_all(&pool)
            .await?
    } else {
        sqlx::query_scalar("SELECT id FROM questions WHERE category = ?")
            .bind(req.quiz_category.id.to_string())
            .fetch_all(&pool)
            .await?
    };

    available.retain(|id| !req.previous_questions.contains(id));

    // Explicit empty check: exhaustion is a terminal "no more questions"
    // signal, never a failed random pick.
    let Some(&picked) = available.choose(&mut rand::thread_rng()) else {
        return Ok(Json(serde_json::json!({
            "success": true,
            "question": null,
        })));
    };

    let question = sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?",
    )
    .bind(picked)
    .fetch_one(&pool)
    .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "question": question,
    })))
}
