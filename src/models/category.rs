// src/models/category.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::prelude::FromRow;

/// Represents the 'categories' table in the database.
///
/// Categories are read-only from the API's perspective; they are seeded by
/// migration and never created or modified through an endpoint.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,

    /// Category label (e.g., "Science", "Art").
    /// Mapped from the database column 'type' since `type` is a reserved keyword in Rust.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub category_type: String,
}

/// Builds the wire-format category mapping: a JSON object keyed by the
/// stringified category id, with the label as value. Built fresh per request.
pub fn category_map(categories: &[Category]) -> Map<String, Value> {
    categories
        .iter()
        .map(|c| (c.id.to_string(), Value::String(c.category_type.clone())))
        .collect()
}
