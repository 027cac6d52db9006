// src/mock.rs

//! Canned data served when the document store cannot be used.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};

use crate::models::scan_result::LeaderboardEntry;

pub const MOCK_ID_PREFIX: &str = "mock-id-";

static MOCK_LEADERBOARD: LazyLock<Vec<LeaderboardEntry>> = LazyLock::new(|| {
    let now = Utc::now();
    vec![
        LeaderboardEntry {
            id: None,
            name: "Test User 1".to_string(),
            verdict: "NICE".to_string(),
            message: "Very kind and helpful".to_string(),
            score: 95,
            country: Some("DE".to_string()),
            timestamp: now,
        },
        LeaderboardEntry {
            id: None,
            name: "Test User 2".to_string(),
            verdict: "NAUGHTY".to_string(),
            message: "Needs to improve behavior".to_string(),
            score: 45,
            country: Some("DE".to_string()),
            timestamp: now,
        },
    ]
});

/// Builds the mock data up front so its timestamps reflect process start.
pub fn init() {
    LazyLock::force(&MOCK_LEADERBOARD);
}

/// The two fixed leaderboard rows. Order is fixed, not score-sorted.
pub fn leaderboard() -> Vec<LeaderboardEntry> {
    MOCK_LEADERBOARD.clone()
}

/// Synthetic id for a submission that could not be stored,
/// e.g. `mock-id-1734567890.123456`.
pub fn scan_id() -> String {
    scan_id_at(Utc::now())
}

fn scan_id_at(at: DateTime<Utc>) -> String {
    format!(
        "{}{}.{:06}",
        MOCK_ID_PREFIX,
        at.timestamp(),
        at.timestamp_subsec_micros()
    )
}
