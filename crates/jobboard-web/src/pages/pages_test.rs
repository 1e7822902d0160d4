use axum::body::{to_bytes, Body};
use axum::http::{header, Request};
use jobboard_client::JobBoardClient;
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn app_for(server: &MockServer) -> Router {
    let client = JobBoardClient::new(&server.uri(), "jobboard-test/0.1").expect("client");
    build_app(AppState::new(client, 20))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    (status, String::from_utf8(body.to_vec()).expect("utf-8 body"))
}

fn post_json(id: i64, title: &str, tags: &[&str]) -> serde_json::Value {
    json!({
        "id": id,
        "cleaned_title": title,
        "cleaned_text": "Build and run backend services.",
        "tags": tags,
        "created_utc": "2024-05-01T10:00:00",
        "url": format!("https://reddit.com/r/forhire/{id}")
    })
}

async fn mount_tags(server: &MockServer, tags: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/api/v1/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tags))
        .mount(server)
        .await;
}

#[tokio::test]
async fn listing_renders_cards_and_filter_links() {
    let server = MockServer::start().await;
    mount_tags(&server, &["python", "remote", "rust"]).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/job-posts"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "20"))
        .and(query_param("tags", "rust"))
        .and(query_param("has_cleaned_data", "true"))
        .and(query_param("sort_by", "created_utc"))
        .and(query_param("sort_order", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 45,
            "page": 2,
            "page_size": 20,
            "total_pages": 3,
            "data": [post_json(7, "Senior Rust Engineer", &["rust", "remote"])]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server), "/?page=2&tags=rust").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Senior Rust Engineer"));
    assert!(body.contains("Found 45 jobs"));
    assert!(body.contains("May 1, 2024"));
    // Selecting another tag appends it and goes back to page 1.
    assert!(body.contains("page=1&amp;tags=rust%2Cremote"), "body: {body}");
    // Page links keep the tag filter.
    assert!(body.contains("page=3&amp;tags=rust"), "body: {body}");
    assert!(body.contains("Clear filters"));
}

#[tokio::test]
async fn listing_without_results_shows_empty_state() {
    let server = MockServer::start().await;
    mount_tags(&server, &["rust"]).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/job-posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 0,
            "page": 1,
            "page_size": 20,
            "total_pages": 0,
            "data": []
        })))
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server), "/?search=cobol").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No jobs found"));
    assert!(body.contains("Try adjusting your search or filters"));
    assert!(body.contains("value=\"cobol\""));
}

#[tokio::test]
async fn listing_shows_upstream_detail_on_failure() {
    let server = MockServer::start().await;
    mount_tags(&server, &[]).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/job-posts"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "detail": "db unavailable" })))
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("db unavailable"));
    assert!(!body.contains("No jobs found"));
}

#[tokio::test]
async fn listing_falls_back_to_status_text_without_detail() {
    let server = MockServer::start().await;
    mount_tags(&server, &[]).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/job-posts"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let (_, body) = get(app_for(&server), "/").await;

    assert!(body.contains("API request failed: Internal Server Error"));
}

#[tokio::test]
async fn listing_survives_tag_vocabulary_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/tags"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/job-posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1,
            "page": 1,
            "page_size": 20,
            "total_pages": 1,
            "data": [post_json(3, "Data Engineer", &[])]
        })))
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Data Engineer"));
    assert!(body.contains("No tags available"));
    assert!(body.contains("Found 1 job"));
}

#[tokio::test]
async fn detail_rejects_invalid_ids_without_calling_upstream() {
    let server = MockServer::start().await;

    for uri in ["/jobs/abc", "/jobs/0", "/jobs/-4", "/jobs/", "/jobs"] {
        let (status, body) = get(app_for(&server), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(body.contains("Job not found"), "{uri}");
    }

    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn detail_renders_job_post() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/job-posts/42"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(post_json(42, "Platform Engineer", &["go"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server), "/jobs/42").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Platform Engineer"));
    assert!(body.contains("Job Description"));
    assert!(body.contains("View Original Post"));
    assert!(body.contains("May 1, 2024 at 10:00 AM"));
}

#[tokio::test]
async fn detail_passes_through_upstream_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/job-posts/999"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "detail": "Job post not found" })),
        )
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server), "/jobs/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Job post not found"));
    assert!(body.contains("Back to jobs list"));
}

async fn search_redirect(uri: &str) -> (StatusCode, String) {
    let server = MockServer::start().await;
    let response = app_for(&server)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("location header")
        .to_owned();
    (response.status(), location)
}

#[tokio::test]
async fn search_writes_search_and_resets_page() {
    let (status, location) = search_redirect("/search?q=rust&tags=remote&page=4").await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location, "/?tags=remote&page=1&search=rust");
}

#[tokio::test]
async fn blank_search_removes_the_parameter() {
    let (_, location) = search_redirect("/search?q=++&tags=remote&search=old").await;

    assert_eq!(location, "/?tags=remote&page=1");
}

#[tokio::test]
async fn health_reports_upstream_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "healthy", "database": "connected" })),
        )
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server), "/health").await;
    let json: serde_json::Value = serde_json::from_str(&body).expect("json parse");

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["data"]["upstream"], "ok");
    assert!(json["meta"]["request_id"].is_string());
}

#[tokio::test]
async fn health_degrades_when_upstream_is_down() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({ "status": "unhealthy" })))
        .mount(&server)
        .await;

    let (status, body) = get(app_for(&server), "/health").await;
    let json: serde_json::Value = serde_json::from_str(&body).expect("json parse");

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["data"]["status"], "degraded");
}
