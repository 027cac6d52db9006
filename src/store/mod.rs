// src/store/mod.rs

//! Persistence for scan results.
//!
//! `ScanStore::connect` is attempted fresh for every request that needs the
//! store. A failed connection is not an error for callers: `connect` logs it
//! and reports the store as disconnected so the handler can fall back to
//! mock data.

#[cfg(any(test, feature = "test-util"))]
pub mod memory;
pub mod mongo;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::scan_result::{LeaderboardEntry, ScanResult};

#[cfg(any(test, feature = "test-util"))]
pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Maximum number of rows served on the leaderboard.
pub const LEADERBOARD_LIMIT: i64 = 100;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("store did not respond within {0:?}")]
    Timeout(Duration),

    #[error("store is not connected")]
    Disconnected,

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// A document store that can be connected to.
#[async_trait]
pub trait ScanStore: Send + Sync {
    /// Attempts a connection, bounded by the store's own timeout.
    async fn connect(&self) -> Result<Box<dyn ScanCollection>, StoreError>;
}

/// A live handle on the scan results collection.
#[async_trait]
pub trait ScanCollection: Send + Sync {
    /// Stored results sorted by score, highest first, at most `limit` rows.
    async fn top_by_score(&self, limit: i64) -> Result<Vec<LeaderboardEntry>, StoreError>;

    /// Persists `scan` and returns the generated id.
    async fn insert(&self, scan: &ScanResult) -> Result<String, StoreError>;
}

/// Connects to `store`, returning `None` when it is unreachable.
/// Never fails; the cause is logged.
pub async fn connect(store: &dyn ScanStore) -> Option<Box<dyn ScanCollection>> {
    match store.connect().await {
        Ok(collection) => Some(collection),
        Err(e) => {
            tracing::warn!("Document store connection error: {}", e);
            None
        }
    }
}
