// src/error.rs

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// Global Application Error Enum.
/// Only client mistakes reach this type; store and geolocation failures are
/// absorbed by the handlers.
#[derive(Debug)]
pub enum AppError {
    // 400 Bad Request
    BadRequest(String),

    // 404 Not Found
    NotFound(String),
}

/// JSON body returned for every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    /// The 400 returned when a required submission field is absent.
    pub fn missing_field(field: &str) -> Self {
        AppError::BadRequest(format!("Missing {} field", field))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

/// Malformed or non-JSON request bodies are reported as 400 with the same
/// `{"error": ...}` shape as validation failures.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
