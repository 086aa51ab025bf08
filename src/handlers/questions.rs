// src/handlers/questions.rs

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde_json::Value;
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        category::{Category, category_map},
        question::{CreateQuestionRequest, Question, SearchRequest},
    },
    utils::pagination::{page_from_query, paginate},
};

/// Lists the requested page of questions (10 per page, ascending id),
/// alongside the full category mapping and the grand total of questions.
///
/// An empty page is a 404.
pub async fn list_questions(
    State(pool): State<SqlitePool>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let selection = sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
    )
    .fetch_all(&pool)
    .await?;

    let current_questions = paginate(&selection, page_from_query(&params));

    if current_questions.is_empty() {
        return Err(AppError::NotFound);
    }

    let categories =
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&pool)
            .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "questions": current_questions,
        "categories": category_map(&categories),
        "total_questions": selection.len(),
    })))
}

/// Deletes a question by id and echoes the deleted id.
///
/// A single `DELETE .. RETURNING` keeps the two outcomes distinct without a
/// lookup/delete window: no row matched is a 404, a failing delete statement
/// is a 422.
pub async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(question_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    sqlx::query_scalar::<_, i64>("DELETE FROM questions WHERE id = ? RETURNING id")
        .bind(question_id)
        .fetch_optional(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete question {}: {:?}", question_id, e);
            AppError::Unprocessable
        })?
        .ok_or(AppError::NotFound)?;

    Ok(Json(serde_json::json!({
        "success": true,
        "deleted": question_id,
    })))
}

/// Creates a question from a JSON body with `question`, `answer`, `category`
/// and `difficulty`. Returns the new id and the new grand total.
///
/// Every failure at this endpoint (absent body, missing or mistyped fields,
/// insert error) collapses to a 400.
pub async fn create_question(
    State(pool): State<SqlitePool>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body.map_err(|_| AppError::BadRequest)?;
    let req: CreateQuestionRequest =
        serde_json::from_value(body).map_err(|_| AppError::BadRequest)?;
    req.validate().map_err(|_| AppError::BadRequest)?;

    let created = sqlx::query_scalar::<_, i64>(
        "INSERT INTO questions (question, answer, category, difficulty) \
         VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(&req.question)
    .bind(&req.answer)
    .bind(req.category.as_text())
    .bind(req.difficulty)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to insert question: {:?}", e);
        AppError::BadRequest
    })?;

    let total_questions =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(&pool)
            .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "created": created,
        "total_questions": total_questions,
    })))
}

/// Case-insensitive substring search over the question text.
///
/// Zero matches is a 404. `total_questions` reflects the returned page
/// length, not the full match count; existing clients depend on that shape,
/// so it stays. The listing endpoint keeps the grand total.
pub async fn search_questions(
    State(pool): State<SqlitePool>,
    Query(params): Query<HashMap<String, String>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body.map_err(|_| AppError::BadRequest)?;
    let req: SearchRequest =
        serde_json::from_value(body).map_err(|_| AppError::BadRequest)?;

    let pattern = format!("%{}%", req.search_term);
    let selection = sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions \
         WHERE LOWER(question) LIKE LOWER(?) ORDER BY id",
    )
    .bind(&pattern)
    .fetch_all(&pool)
    .await?;

    let current_questions = paginate(&selection, page_from_query(&params));

    if current_questions.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(serde_json::json!({
        "success": true,
        "total_questions": current_questions.len(),
        "questions": current_questions,
    })))
}

/// Lists the requested page of questions belonging to one category, plus the
/// full category mapping and the formatted matching category record.
///
/// An unknown category id is a 400 (the category lookup fails before the
/// emptiness check runs); a known category with an empty page is a 404.
pub async fn list_by_category(
    State(pool): State<SqlitePool>,
    Path(category_id): Path<i64>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let selection = sqlx::query_as::<_, Question>(
        "SELECT id, question, answer, category, difficulty FROM questions \
         WHERE category = ? ORDER BY id",
    )
    .bind(category_id.to_string())
    .fetch_all(&pool)
    .await?;

    let current_questions = paginate(&selection, page_from_query(&params));

    let categories =
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&pool)
            .await?;

    let current_category =
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = ?")
            .bind(category_id)
            .fetch_optional(&pool)
            .await?
            .ok_or(AppError::BadRequest)?;

    if current_questions.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(serde_json::json!({
        "success": true,
        "questions": current_questions,
        "categories": category_map(&categories),
        "current_category": current_category,
        "total_questions": current_questions.len(),
    })))
}
