// src/store/memory.rs

use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicU64, Ordering},
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ScanCollection, ScanStore, StoreError};
use crate::models::scan_result::{LeaderboardEntry, ScanResult};

/// In-process store used by the test suite. Built only for tests or with
/// the `test-util` feature.
///
/// Can be switched into an unreachable state (connect fails) or a failing
/// state (connect succeeds, every operation fails) to exercise fallbacks.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    records: RwLock<Vec<ScanResult>>,
    next_id: AtomicU64,
    unreachable: AtomicBool,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose `connect` always fails.
    pub fn unreachable() -> Self {
        let store = Self::new();
        store.set_reachable(false);
        store
    }

    pub fn set_reachable(&self, reachable: bool) {
        self.inner.unreachable.store(!reachable, Ordering::SeqCst);
    }

    /// When set, queries and inserts fail after a successful connect.
    pub fn set_failing(&self, failing: bool) {
        self.inner.failing.store(failing, Ordering::SeqCst);
    }

    /// Inserts records directly, bypassing reachability checks.
    pub async fn seed(&self, scans: impl IntoIterator<Item = ScanResult>) {
        let mut records = self.inner.records.write().await;
        for mut scan in scans {
            scan.id = Some(self.inner.allocate_id());
            records.push(scan);
        }
    }

    /// Snapshot of every stored record in insertion order.
    pub async fn records(&self) -> Vec<ScanResult> {
        self.inner.records.read().await.clone()
    }
}

impl Inner {
    /// Ids look like ObjectId hex strings.
    fn allocate_id(&self) -> String {
        format!("{:024x}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn check_failing(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("simulated operation failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ScanStore for MemoryStore {
    async fn connect(&self) -> Result<Box<dyn ScanCollection>, StoreError> {
        if self.inner.unreachable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("simulated outage".to_string()));
        }
        Ok(Box::new(MemoryCollection {
            inner: Arc::clone(&self.inner),
        }))
    }
}

struct MemoryCollection {
    inner: Arc<Inner>,
}

#[async_trait]
impl ScanCollection for MemoryCollection {
    async fn top_by_score(&self, limit: i64) -> Result<Vec<LeaderboardEntry>, StoreError> {
        self.inner.check_failing()?;

        let mut entries = self.inner.records.read().await.clone();
        // Stable: equal scores keep insertion order.
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(entries)
    }

    async fn insert(&self, scan: &ScanResult) -> Result<String, StoreError> {
        self.inner.check_failing()?;

        let id = self.inner.allocate_id();
        let mut record = scan.clone();
        record.id = Some(id.clone());
        self.inner.records.write().await.push(record);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::store::connect;

    fn scan(name: &str, score: i64) -> ScanResult {
        ScanResult {
            id: None,
            name: name.to_string(),
            verdict: if score >= 50 { "NAUGHTY" } else { "NICE" }.to_string(),
            message: "test".to_string(),
            score,
            country: None,
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn top_by_score_sorts_descending_and_limits() {
        let store = MemoryStore::new();
        store
            .seed(vec![scan("a", 10), scan("b", 90), scan("c", 50), scan("d", 70)])
            .await;

        let collection = connect(&store).await.expect("memory store should connect");
        let top = collection.top_by_score(3).await.unwrap();
        let names: Vec<&str> = top.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(names, vec!["b", "d", "c"]);
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let store = MemoryStore::new();
        let collection = connect(&store).await.unwrap();

        let first = collection.insert(&scan("a", 1)).await.unwrap();
        let second = collection.insert(&scan("b", 2)).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(first.len(), 24);
        assert_eq!(store.records().await.len(), 2);
    }

    #[tokio::test]
    async fn unreachable_store_does_not_connect() {
        let store = MemoryStore::unreachable();
        assert!(connect(&store).await.is_none());

        store.set_reachable(true);
        assert!(connect(&store).await.is_some());
    }

    #[tokio::test]
    async fn failing_store_rejects_operations() {
        let store = MemoryStore::new();
        store.set_failing(true);
        let collection = connect(&store).await.unwrap();

        assert!(collection.top_by_score(10).await.is_err());
        assert!(collection.insert(&scan("a", 1)).await.is_err());
        assert!(store.records().await.is_empty());
    }
}
