// src/utils/fallback.rs

use std::fmt::Display;
use std::future::Future;

/// Runs `attempt`, substituting `fallback()` if it fails.
///
/// The failure is logged and otherwise swallowed: callers always get a value.
/// `operation` names the attempt in the log line.
pub async fn with_fallback<T, E, Fut, F>(operation: &str, attempt: Fut, fallback: F) -> T
where
    Fut: Future<Output = Result<T, E>>,
    E: Display,
    F: FnOnce() -> T,
{
    match attempt.await {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("{} failed, using fallback: {}", operation, e);
            fallback()
        }
    }
}
