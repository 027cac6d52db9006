// tests/store_tests.rs

use chrono::Utc;
use santa_scanner::{
    models::scan_result::ScanResult,
    store::{self, MongoStore},
};
use std::time::{Duration, Instant};

#[tokio::test]
async fn unreachable_mongo_reports_disconnected_within_timeout() {
    // Nothing listens on port 1.
    let store = MongoStore::new(
        "mongodb://127.0.0.1:1/?directConnection=true",
        "santasscanner_test",
        Duration::from_millis(300),
    );

    let started = Instant::now();
    assert!(store::connect(&store).await.is_none());
    assert!(started.elapsed() < Duration::from_secs(3));

    // A second attempt behaves the same way.
    assert!(store::connect(&store).await.is_none());
}

#[tokio::test]
async fn silent_mongo_reports_disconnected_within_single_timeout() {
    // Accepts connections but never answers the handshake or the ping.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let timeout = Duration::from_millis(400);
    let store = MongoStore::new(
        format!("mongodb://127.0.0.1:{}/?directConnection=true", port),
        "santasscanner_test",
        timeout,
    );

    let started = Instant::now();
    assert!(store::connect(&store).await.is_none());
    assert!(
        started.elapsed() < timeout * 2,
        "connect took {:?}, bound is {:?}",
        started.elapsed(),
        timeout
    );
}

#[tokio::test]
async fn malformed_uri_reports_disconnected() {
    let store = MongoStore::new("not-a-mongodb-uri", "santasscanner_test", Duration::from_millis(300));

    assert!(store::connect(&store).await.is_none());
}

/// Round-trip against a real server. Runs only when `MONGODB_TEST_URI` is set.
#[tokio::test]
async fn mongo_round_trip() {
    let Ok(uri) = std::env::var("MONGODB_TEST_URI") else {
        return;
    };

    let database = format!("santasscanner_test_{}", Utc::now().timestamp_micros());
    let store = MongoStore::new(uri, database, Duration::from_secs(5));
    let collection = store::connect(&store)
        .await
        .expect("Failed to connect to MongoDB for testing. Check MONGODB_TEST_URI.");

    for (name, score) in [("low", 10), ("high", 90), ("mid", 50)] {
        let scan = ScanResult {
            id: None,
            name: name.to_string(),
            verdict: "NICE".to_string(),
            message: "round trip".to_string(),
            score,
            country: None,
            timestamp: Utc::now(),
        };
        let id = collection.insert(&scan).await.expect("insert failed");
        assert_eq!(id.len(), 24);
    }

    let top = collection.top_by_score(2).await.expect("query failed");
    let names: Vec<&str> = top.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["high", "mid"]);
    assert!(top.iter().all(|s| s.id.is_some()));
}
