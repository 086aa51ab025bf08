// src/handlers/categories.rs

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::category::{Category, category_map},
};

/// Lists all categories as an id -> label mapping plus a count.
///
/// An empty categories table is a 404, not an empty mapping.
pub async fn list_categories(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let categories =
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&pool)
            .await?;

    if categories.is_empty() {
        return Err(AppError::NotFound);
    }

    let mapping = category_map(&categories);

    Ok(Json(serde_json::json!({
        "success": true,
        "categories": mapping,
        "total_categories": categories.len(),
    })))
}
