// src/models/question.rs

use serde::Serialize;
use utoipa::ToSchema;

/// A quiz question as served to the scanner frontend.
/// Questions are static content; they are never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Question {
    pub id: i64,

    /// The prompt shown to the player.
    pub text: String,

    /// Answer choices in display order.
    pub options: Vec<QuestionOption>,
}

/// One answer choice of a `Question`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOption {
    pub text: String,

    /// Weight the client adds to the player's score when this option is picked.
    pub naughty_points: u32,
}

impl QuestionOption {
    pub fn new(text: &str, naughty_points: u32) -> Self {
        Self {
            text: text.to_string(),
            naughty_points,
        }
    }
}
