// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    error::AppError,
    handlers::{country, quiz, scan},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Santa's Scanner API",
        version = "0.1.0",
        description = "Naughty-or-nice quiz questions, scan submissions and leaderboard"
    ),
    paths(
        quiz::list_questions,
        quiz::get_leaderboard,
        country::get_country,
        scan::submit_scan_result,
    ),
    tags(
        (name = "Quiz", description = "Questions and leaderboard"),
        (name = "Scans", description = "Scan result submission"),
        (name = "Geo", description = "Requester country lookup"),
    ),
)]
pub struct ApiDoc;

/// Assembles the main application router.
///
/// * Registers the four scanner endpoints and the OpenAPI docs.
/// * Applies global middleware (Trace, CORS open to any origin).
/// * Injects global state (store and geolocator).
///
/// `/country` reads the peer address, so serve with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/questions", get(quiz::list_questions))
        .route("/leaderboard", get(quiz::get_leaderboard))
        .route("/country", get(country::get_country))
        .route("/scan-results", post(scan::submit_scan_result))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(route_not_found)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
