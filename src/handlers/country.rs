// src/handlers/country.rs

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json,
    extract::{ConnectInfo, State},
    response::IntoResponse,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    geo::{GeoLocator, UNKNOWN_COUNTRY},
    utils::fallback::with_fallback,
};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountryResponse {
    /// ISO 3166-1 alpha-2 code, or "XX" when unknown.
    pub country_code: String,
}

/// Looks up the requester's country from the peer address of the connection.
/// Forwarded-for headers are not trusted.
#[utoipa::path(
    get,
    path = "/country",
    tag = "Geo",
    responses(
        (status = 200, description = "Country of the caller, \"XX\" if it cannot be determined", body = CountryResponse),
    ),
)]
pub async fn get_country(
    State(geo): State<Arc<dyn GeoLocator>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> impl IntoResponse {
    let country_code = with_fallback("Country lookup", geo.country_code(addr.ip()), || {
        UNKNOWN_COUNTRY.to_string()
    })
    .await;

    Json(CountryResponse { country_code })
}
