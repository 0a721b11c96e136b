//! Health Check API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use meetup_server::presentation::http::handlers::health::{
    DetailedHealthResponse, HealthResponse, HealthStatus, LivenessResponse,
};

use crate::common::TestApp;

#[tokio::test]
async fn test_health_check_returns_ok() {
    let response = TestApp::new().server().get("/health").await;

    response.assert_status_ok();
    let body: HealthResponse = response.json();
    assert_eq!(body.status, "healthy");
    assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_liveness_check() {
    let response = TestApp::new().server().get("/health/live").await;

    response.assert_status_ok();
    let body: LivenessResponse = response.json();
    assert_eq!(body.status, "alive");
}

/// The test pool points at a closed port.
#[tokio::test]
async fn test_readiness_without_database_is_unavailable() {
    let response = TestApp::new().server().get("/health/ready").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: DetailedHealthResponse = response.json();
    assert_eq!(body.status, HealthStatus::Unhealthy);
    assert_eq!(body.database.status, HealthStatus::Unhealthy);
    assert!(body.database.latency_ms.is_none());
    assert!(body.database.message.is_some());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    TestApp::new()
        .server()
        .get("/api/v1/nothing-here")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
