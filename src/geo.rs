// src/geo.rs

//! Country lookup for the requester's address.

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Country code returned whenever the lookup cannot produce one.
pub const UNKNOWN_COUNTRY: &str = "XX";

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("geolocation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("geolocation lookup returned status '{0}'")]
    Unsuccessful(String),

    #[error("geolocation response has no country code")]
    MissingCountryCode,
}

#[async_trait]
pub trait GeoLocator: Send + Sync {
    /// Two-letter country code for `ip`.
    async fn country_code(&self, ip: IpAddr) -> Result<String, GeoError>;
}

/// Client for the ip-api.com JSON endpoint (`{base_url}/{ip}`).
pub struct IpApiLocator {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(rename = "countryCode")]
    country_code: Option<String>,
}

impl IpApiLocator {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GeoError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl GeoLocator for IpApiLocator {
    async fn country_code(&self, ip: IpAddr) -> Result<String, GeoError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), ip);

        let lookup: IpApiResponse = self
            .client
            .get(url)
            .query(&[("fields", "status,countryCode")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if lookup.status != "success" {
            return Err(GeoError::Unsuccessful(lookup.status));
        }

        lookup.country_code.ok_or(GeoError::MissingCountryCode)
    }
}
