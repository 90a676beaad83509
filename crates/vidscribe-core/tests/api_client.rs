//! Client tests against an in-process mock of the processing API.

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, post},
};
use serde_json::{Value, json};

use vidscribe_core::{
    ActiveTab, ApiClient, GENERIC_ERROR_MESSAGE, ProcessError, SearchQuery, SourceType,
    SubmissionController,
};

/// Bind the router on an ephemeral port and return the base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock API");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn youtube_response() -> Value {
    json!({
        "source_type": "youtube",
        "transcript": "Hello world",
        "summary": {"brief": "greeting", "keyPoints": ["hi"]}
    })
}

#[tokio::test]
async fn process_parses_a_successful_response() {
    let router = Router::new().route(
        "/api/process",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body, json!({"url": "https://youtube.com/watch?v=abc"}));
            Json(youtube_response())
        }),
    );
    let client = ApiClient::new(serve(router).await);

    let video = client
        .process("https://youtube.com/watch?v=abc")
        .await
        .expect("processing succeeds");
    assert_eq!(video.source_type, SourceType::Youtube);
    assert_eq!(video.transcript, "Hello world");
    assert_eq!(video.summary.brief, "greeting");
    assert_eq!(video.summary.key_points, vec!["hi"]);
}

#[tokio::test]
async fn structured_detail_is_surfaced_verbatim() {
    let router = Router::new().route(
        "/api/process",
        post(|| async {
            (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({"detail": "rate limited"})),
            )
        }),
    );
    let client = ApiClient::new(serve(router).await);

    let err = client.process("https://example.com/clip").await.unwrap_err();
    assert!(matches!(
        err,
        ProcessError::Rejected {
            status: StatusCode::TOO_MANY_REQUESTS,
            ..
        }
    ));
    assert_eq!(err.user_message(), "rate limited");
}

#[tokio::test]
async fn rejection_without_detail_reports_the_status() {
    let router = Router::new().route(
        "/api/process",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let client = ApiClient::new(serve(router).await);

    let err = client.process("https://example.com/clip").await.unwrap_err();
    assert_eq!(err.user_message(), "request failed with status code 500");
}

#[tokio::test]
async fn transport_failure_surfaces_the_transport_text() {
    // Port 1 is never listening; the connection is refused.
    let client = ApiClient::new("http://127.0.0.1:1");

    let err = client.process("https://example.com/clip").await.unwrap_err();
    assert!(matches!(err, ProcessError::Transport(_)));
    let message = err.user_message();
    assert!(!message.is_empty());
    assert_ne!(message, GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn malformed_success_body_falls_back_to_the_generic_message() {
    let router = Router::new().route(
        "/api/process",
        post(|| async { Json(json!({"unexpected": true})) }),
    );
    let client = ApiClient::new(serve(router).await);

    let err = client.process("https://example.com/clip").await.unwrap_err();
    assert!(matches!(err, ProcessError::MalformedResponse(_)));
    assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn empty_url_never_reaches_the_network() {
    // Nothing listens here; a network attempt would fail with Transport.
    let client = ApiClient::new("http://127.0.0.1:1");

    let err = client.process("").await.unwrap_err();
    assert!(matches!(err, ProcessError::EmptyUrl));
}

#[tokio::test]
async fn fetch_returns_the_stored_record() {
    let router = Router::new().route(
        "/api/video/*url",
        get(|Path(url): Path<String>| async move {
            assert_eq!(url, "https://youtube.com/watch?v=abc");
            Json(json!({
                "id": "42",
                "url": url,
                "source_type": "youtube",
                "processed_at": "2026-08-01T12:00:00",
                "transcript": "Hello world",
                "summary": {"brief": "greeting", "key_points": ["hi"]}
            }))
        }),
    );
    let client = ApiClient::new(serve(router).await);

    let record = client
        .fetch("https://youtube.com/watch?v=abc")
        .await
        .expect("lookup succeeds");
    assert_eq!(record.source_type, SourceType::Youtube);
    assert_eq!(record.transcript.as_deref(), Some("Hello world"));
    let summary = record.summary.expect("stored summary");
    assert_eq!(summary.key_points, vec!["hi"]);
}

#[tokio::test]
async fn search_sends_only_present_filters() {
    let router = Router::new().route(
        "/api/search",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body, json!({"keyword": "greeting"}));
            Json(json!({"videos": [{
                "id": "42",
                "url": "https://youtube.com/watch?v=abc",
                "source_type": "youtube",
                "processed_at": "2026-08-01T12:00:00",
                "transcript_preview": "Hello world..."
            }]}))
        }),
    );
    let client = ApiClient::new(serve(router).await);

    let hits = client
        .search(&SearchQuery {
            keyword: Some("greeting".to_string()),
            ..Default::default()
        })
        .await
        .expect("search succeeds");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].transcript_preview.as_deref(), Some("Hello world..."));
}

#[tokio::test]
async fn health_reports_the_api_status() {
    let router = Router::new().route("/healthz", get(|| async { Json(json!({"status": "healthy"})) }));
    let client = ApiClient::new(serve(router).await);

    let health = client.health().await.expect("health check succeeds");
    assert_eq!(health.status, "healthy");
}

#[tokio::test]
async fn submission_runs_end_to_end_through_the_controller() {
    let router = Router::new().route(
        "/api/process",
        post(|| async { Json(youtube_response()) }),
    );
    let client = ApiClient::new(serve(router).await);
    let mut controller = SubmissionController::new();

    let url = "https://youtube.com/watch?v=abc";
    let ticket = controller.submit(url).expect("non-empty URL");
    assert!(controller.is_submitting());

    let outcome = client.process(url).await.map_err(|e| e.user_message());
    controller.resolve(ticket, outcome);

    let video = controller.result().expect("succeeded");
    assert_eq!(video.source_type.badge(), "🎥");
    assert_eq!(controller.active_tab(), ActiveTab::Transcript);
    assert_eq!(video.transcript, "Hello world");

    controller.select_tab(ActiveTab::Summary);
    let video = controller.result().unwrap();
    assert_eq!(video.summary.brief, "greeting");
    assert_eq!(video.summary.key_points, vec!["hi"]);
}
