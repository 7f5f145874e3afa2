use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use dc_api::{create_router, test_state};
use dc_common::board::JobBoard;
use dc_common::{JobPosting, JobStatus};

fn posting(id: &str, title: &str, day: u32) -> JobPosting {
    JobPosting {
        id: id.into(),
        title: title.into(),
        description: String::new(),
        required_roles: vec![],
        required_skills: vec![],
        programming_languages: vec![],
        frameworks: vec![],
        preferred_locations: vec![],
        preferred_timezones: vec![],
        payment_type: None,
        min_hourly_rate: None,
        max_hourly_rate: None,
        project_scope: None,
        experience_level: None,
        remote_type: None,
        company_size: None,
        status: JobStatus::Open,
        created_at: Utc.with_ymd_and_hms(2026, 8, day, 12, 0, 0).unwrap(),
        application_deadline: None,
        application_count: 0,
        external: false,
        source: None,
        original_url: None,
    }
}

fn seeded_app() -> Router {
    let mut board = JobBoard::new();
    board.insert(posting("older", "Lua scripter", 1)).unwrap();
    board.insert(posting("newer", "UI designer", 10)).unwrap();
    board
        .insert(JobPosting {
            status: JobStatus::Closed,
            ..posting("gone", "Closed role", 5)
        })
        .unwrap();

    create_router(test_state(board))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn livez_answers_ok() {
    let (status, body) = send(
        seeded_app(),
        Request::builder().uri("/livez").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn health_alias_reports_board_size() {
    let (status, body) = send(
        seeded_app(),
        Request::builder().uri("/health").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["postings"], 3);
}

#[tokio::test]
async fn empty_search_lists_open_postings_newest_first() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/jobs/search")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let (status, body) = send(seeded_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_matched"], 2);
    assert_eq!(body["sort"], "date");
    assert_eq!(body["items"][0]["id"], "newer");
    assert_eq!(body["items"][1]["id"], "older");
    assert_eq!(body["has_more"], false);
}

#[tokio::test]
async fn list_endpoint_filters_from_the_query_string() {
    let request = Request::builder()
        .uri("/api/jobs?q=lua&limit=10")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(seeded_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_matched"], 1);
    assert_eq!(body["items"][0]["id"], "older");
}

#[tokio::test]
async fn pagination_reports_remaining_matches() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/jobs/search")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&json!({ "limit": 1 })).unwrap()))
        .unwrap();

    let (status, body) = send(seeded_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["total_matched"], 2);
    assert_eq!(body["has_more"], true);
}

#[tokio::test]
async fn unknown_posting_is_a_404_with_error_envelope() {
    let request = Request::builder()
        .uri("/api/jobs/nope")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(seeded_app(), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
    assert!(body["request_id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn inverted_budget_range_is_a_400() {
    let payload = json!({ "criteria": { "budget": { "min": 90, "max": 10 } } });
    let request = Request::builder()
        .method("POST")
        .uri("/api/jobs/search")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&payload).unwrap()))
        .unwrap();

    let (status, body) = send(seeded_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "bad_request");
}

#[tokio::test]
async fn responses_carry_a_request_id_header() {
    let response = seeded_app()
        .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn caller_supplied_request_id_is_echoed() {
    let response = seeded_app()
        .oneshot(
            Request::builder()
                .uri("/api/jobs/nope")
                .header("x-request-id", "caller-7")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "caller-7"
    );

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["request_id"], "caller-7");
}
