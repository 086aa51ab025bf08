// src/handlers/mod.rs

pub mod categories;
pub mod questions;
pub mod quizzes;
