// src/routes.rs

use axum::{
    Json, Router,
    http::Method,
    response::IntoResponse,
    routing::{delete, get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::AppError,
    handlers::{categories, questions, quizzes},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Wires one handler per endpoint.
/// * Applies global middleware (Trace, CORS open to any origin).
/// * Injects global state (Database Pool + Config).
/// * Installs fallbacks so unmatched paths and wrong verbs produce the
///   fixed 404/405 JSON bodies instead of empty framework responses.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    Router::new()
        .route("/", get(index))
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(questions::list_by_category),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/{question_id}", delete(questions::delete_question))
        .route("/questions/search/", post(questions::search_questions))
        .route("/quizzes", post(quizzes::play_quiz))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Trivial liveness route.
async fn index() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "HELLO WORLD" }))
}

async fn not_found() -> AppError {
    AppError::NotFound
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
