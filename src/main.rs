// src/main.rs

use dotenvy::dotenv;
use santa_scanner::config::Config;
use santa_scanner::geo::IpApiLocator;
use santa_scanner::questions::QUESTIONS;
use santa_scanner::routes;
use santa_scanner::state::AppState;
use santa_scanner::store::{self, MongoStore};
use santa_scanner::mock;
use std::net::SocketAddr;
use std::sync::{Arc, LazyLock};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Static content is built once, before the first request.
    LazyLock::force(&QUESTIONS);
    mock::init();

    let store = MongoStore::from_config(&config);

    // The service starts regardless; requests fall back to mock data until
    // the store becomes reachable.
    if store::connect(&store).await.is_some() {
        tracing::info!("Document store connected...");
    } else {
        tracing::warn!("Document store unreachable at startup, serving mock data until it recovers");
    }

    let geo = IpApiLocator::new(config.geo_api_url.clone(), config.geo_timeout())
        .expect("Failed to build geolocation HTTP client");

    // Create AppState
    let state = AppState {
        store: Arc::new(store),
        geo: Arc::new(geo),
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let addr = SocketAddr::from(([0, 0, 0, 0], 5000));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    // Start the server; `/country` needs the peer address.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
