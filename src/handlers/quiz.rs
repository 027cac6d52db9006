// src/handlers/quiz.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    mock,
    models::{question::Question, scan_result::ScanResult},
    questions::QUESTIONS,
    store::{self, LEADERBOARD_LIMIT, ScanStore, StoreError},
    utils::fallback::with_fallback,
};

/// Returns the fixed question set.
#[utoipa::path(
    get,
    path = "/questions",
    tag = "Quiz",
    responses(
        (status = 200, description = "All scanner questions in order", body = [Question]),
    ),
)]
pub async fn list_questions() -> impl IntoResponse {
    Json(QUESTIONS.as_slice())
}

/// Retrieves the top 100 scan results by score.
///
/// Never fails: if the store is unreachable or the query errors, the mock
/// leaderboard is served instead.
#[utoipa::path(
    get,
    path = "/leaderboard",
    tag = "Quiz",
    responses(
        (status = 200, description = "Live top scores, or mock entries when the store is down", body = [ScanResult]),
    ),
)]
pub async fn get_leaderboard(State(store): State<Arc<dyn ScanStore>>) -> impl IntoResponse {
    let entries = with_fallback(
        "Leaderboard query",
        async {
            let collection = store::connect(store.as_ref())
                .await
                .ok_or(StoreError::Disconnected)?;

            let entries = collection.top_by_score(LEADERBOARD_LIMIT).await?;
            tracing::info!("Found {} leaderboard results", entries.len());
            Ok::<_, StoreError>(entries)
        },
        mock::leaderboard,
    )
    .await;

    Json(entries)
}
