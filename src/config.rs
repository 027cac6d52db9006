// src/config.rs

use std::env;
use std::time::Duration;

use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub mongodb_database: String,
    /// Upper bound on connecting to (and pinging) the document store.
    pub store_timeout_secs: u64,
    pub geo_api_url: String,
    pub geo_timeout_ms: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let mongodb_uri = env::var("MONGODB_URI")
            .expect("MONGODB_URI must be set");

        let mongodb_database = env::var("MONGODB_DATABASE")
            .unwrap_or_else(|_| "santasscanner".to_string());

        let store_timeout_secs = env::var("STORE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let geo_api_url = env::var("GEO_API_URL")
            .unwrap_or_else(|_| "http://ip-api.com/json".to_string());

        let geo_timeout_ms = env::var("GEO_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2000);

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Self {
            mongodb_uri,
            mongodb_database,
            store_timeout_secs,
            geo_api_url,
            geo_timeout_ms,
            rust_log,
        }
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_secs(self.store_timeout_secs)
    }

    pub fn geo_timeout(&self) -> Duration {
        Duration::from_millis(self.geo_timeout_ms)
    }
}
