// src/models/mod.rs

pub mod category;
pub mod question;
