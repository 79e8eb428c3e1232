//! Health and metrics endpoint tests

use crate::common::TestApp;

#[tokio::test]
async fn test_health_check_reports_healthy() {
    let app = TestApp::new();

    let (status, body) = app.get("/health").await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let (status, body) = app.get("/health/live").await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn test_metrics_count_envelopes_by_code() {
    let app = TestApp::new();
    app.get("/app/user/tutors").await;

    let request = axum::http::Request::builder()
        .uri("/metrics")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.router.clone(), request)
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("studybuddy_responses_total"));
    assert!(text.contains("code=\"00\""));
}
