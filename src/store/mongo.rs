// src/store/mongo.rs

use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection,
    bson::doc,
    options::ClientOptions,
};
use tokio::sync::OnceCell;

use super::{ScanCollection, ScanStore, StoreError};
use crate::{
    config::Config,
    models::scan_result::{LeaderboardEntry, ScanDocument, ScanResult, id_to_string},
};

pub const SCAN_COLLECTION: &str = "scanResults";

/// MongoDB-backed store.
///
/// The driver client (and its connection pool) is built on first use and
/// reused afterwards. Each `connect` still pings the server, so an outage is
/// detected within `timeout` on every request.
pub struct MongoStore {
    uri: String,
    database: String,
    timeout: Duration,
    client: OnceCell<Client>,
}

impl MongoStore {
    pub fn new(uri: impl Into<String>, database: impl Into<String>, timeout: Duration) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            timeout,
            client: OnceCell::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.mongodb_uri.clone(),
            config.mongodb_database.clone(),
            config.store_timeout(),
        )
    }

    /// Returns the cached client, building it if needed.
    /// A failed build is not cached and will be retried by the next caller.
    async fn client(&self) -> Result<&Client, StoreError> {
        self.client
            .get_or_try_init(|| async {
                let mut options = ClientOptions::parse(&self.uri).await?;
                options.server_selection_timeout = Some(self.timeout);
                options.connect_timeout = Some(self.timeout);
                options.app_name = Some("santa-scanner".to_string());

                let client = Client::with_options(options)?;
                tracing::info!("MongoDB client initialized");
                Ok::<_, StoreError>(client)
            })
            .await
    }
}

#[async_trait]
impl ScanStore for MongoStore {
    async fn connect(&self) -> Result<Box<dyn ScanCollection>, StoreError> {
        // One bound covers both building the client (SRV lookup included)
        // and the ping.
        let db = tokio::time::timeout(self.timeout, async {
            let db = self.client().await?.database(&self.database);
            // Fails fast with a server selection error when nobody is listening.
            db.run_command(doc! { "ping": 1 }).await?;
            Ok::<_, StoreError>(db)
        })
        .await
        .map_err(|_| StoreError::Timeout(self.timeout))??;

        Ok(Box::new(MongoCollection {
            collection: db.collection::<ScanDocument>(SCAN_COLLECTION),
        }))
    }
}

struct MongoCollection {
    collection: Collection<ScanDocument>,
}

#[async_trait]
impl ScanCollection for MongoCollection {
    async fn top_by_score(&self, limit: i64) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let docs: Vec<ScanDocument> = self
            .collection
            .find(doc! {})
            .sort(doc! { "score": -1 })
            .limit(limit)
            .await?
            .try_collect()
            .await?;

        Ok(docs.into_iter().map(LeaderboardEntry::from).collect())
    }

    async fn insert(&self, scan: &ScanResult) -> Result<String, StoreError> {
        let result = self.collection.insert_one(ScanDocument::from(scan)).await?;
        Ok(id_to_string(&result.inserted_id))
    }
}
