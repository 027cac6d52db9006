// src/handlers/scan.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use crate::{
    error::{AppError, ErrorBody},
    mock,
    models::scan_result::{ScanResult, SubmitScanRequest},
    store::{self, ScanStore, StoreError},
    utils::fallback::with_fallback,
};

/// Submits a scan result.
///
/// * Rejects the request if name, verdict, message or score is missing.
/// * Clamps the score to [0, 100] and stamps the server time.
/// * Responds 201 even when the store is unavailable, with a `mock-id-` id.
#[utoipa::path(
    post,
    path = "/scan-results",
    tag = "Scans",
    request_body = SubmitScanRequest,
    responses(
        (status = 201, description = "Result stored (or accepted with a mock id)", body = ScanResult),
        (status = 400, description = "A required field is missing", body = ErrorBody),
    ),
)]
pub async fn submit_scan_result(
    State(store): State<Arc<dyn ScanStore>>,
    payload: Result<Json<SubmitScanRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let mut scan = payload.into_scan(Utc::now())?;

    let id = with_fallback(
        "Scan result insert",
        async {
            let collection = store::connect(store.as_ref())
                .await
                .ok_or(StoreError::Disconnected)?;

            let id = collection.insert(&scan).await?;
            tracing::info!("Stored scan result {}", id);
            Ok::<_, StoreError>(id)
        },
        mock::scan_id,
    )
    .await;

    scan.id = Some(id);

    Ok((StatusCode::CREATED, Json(scan)))
}
