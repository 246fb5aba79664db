use super::common::*;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::responses::router::{delete_handler, fetch_handler, submit_handler};
use crate::responses::AssessmentService;

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn questions_route_switches_on_religious_flag() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .clone()
        .oneshot(get_request("/api/v1/questions?religious=true"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["question_set"], "religious");
    assert_eq!(payload["questions"].as_array().map(Vec::len), Some(7));
    assert_eq!(payload["questions"][0]["id"], "q1_r");

    let response = router
        .oneshot(get_request("/api/v1/questions"))
        .await
        .expect("route executes");
    let payload = read_json_body(response).await;
    assert_eq!(payload["question_set"], "non_religious");
    assert_eq!(payload["questions"][0]["id"], "q1");
    assert_eq!(payload["questions"][0]["domain"], "self");
}

#[tokio::test]
async fn score_route_returns_report_payload() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/assessments/score",
            json!({
                "answers": {"q1": 4, "q2": 4, "q3": 4, "q4": 4, "q5": 4, "q6": 4, "q7": 4},
                "is_religious": false
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["overall_score"]["average"], 4.0);
    assert_eq!(payload["overall_score"]["raw_total"], 28);
    assert_eq!(payload["domain_scores"]["self"]["question_count"], 3);
    assert_eq!(payload["recommendations"][0]["key"], "self");
    assert_eq!(payload["recommendations"][1]["key"], "self_awareness");
}

#[tokio::test]
async fn score_route_rejects_out_of_range_answers() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/assessments/score",
            json!({"answers": {"q1": 0}}),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .is_some_and(|message| message.contains("q1")));
}

#[tokio::test]
async fn submit_route_creates_records() {
    let (service, repository) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(json_request(
            "POST",
            "/api/v1/assessments",
            serde_json::to_value(submission()).unwrap(),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["id"], 1);
    assert_eq!(payload["profile"]["name"], "Mei Chen");
    assert_eq!(repository.records.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn submit_handler_returns_unprocessable_for_profile_errors() {
    let (service, _) = build_service();
    let mut invalid = submission();
    invalid.profile.age = 0;

    let response = submit_handler::<MemoryRepository>(
        State(Arc::new(service)),
        axum::Json(invalid),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn submit_handler_returns_internal_error_on_repository_failure() {
    let service = Arc::new(AssessmentService::new(Arc::new(UnavailableRepository)));

    let response =
        submit_handler::<UnavailableRepository>(State(service), axum::Json(submission())).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn fetch_and_delete_handlers_map_missing_ids_to_not_found() {
    let (service, _) = build_service();
    let service = Arc::new(service);
    let record = service
        .submit_at(submission(), submitted_at())
        .expect("submission");

    let response =
        fetch_handler::<MemoryRepository>(State(service.clone()), Path(record.id.0)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response =
        delete_handler::<MemoryRepository>(State(service.clone()), Path(record.id.0)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response =
        fetch_handler::<MemoryRepository>(State(service.clone()), Path(record.id.0)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_handler::<MemoryRepository>(State(service), Path(99)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_route_applies_query_filters() {
    let router = router_with_service(seeded_service());

    let response = router
        .clone()
        .oneshot(get_request("/api/v1/responses?gender=male&age=middle"))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total"], 1);
    assert_eq!(payload["responses"][0]["profile"]["name"], "Wei Lin");

    let response = router
        .oneshot(get_request("/api/v1/responses?search=alex"))
        .await
        .expect("route executes");
    let payload = read_json_body(response).await;
    assert_eq!(payload["total"], 1);
    assert_eq!(payload["responses"][0]["profile"]["age"], 52);
}

#[tokio::test]
async fn statistics_route_reports_totals() {
    let router = router_with_service(seeded_service());

    let response = router
        .oneshot(get_request("/api/v1/responses/statistics"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total"], 3);
    assert_eq!(payload["religious"], 1);
    assert_eq!(payload["gender_distribution"]["other"], 1);
}

#[tokio::test]
async fn export_route_sets_attachment_headers() {
    let router = router_with_service(seeded_service());

    let response = router
        .oneshot(get_request("/api/v1/responses/export?format=csv&gender=female"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/csv; charset=utf-8"
    );
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .expect("ascii header")
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"spiritual-health-data-"));
    assert!(disposition.ends_with(".csv\""));

    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let text = String::from_utf8(body.to_vec()).expect("utf-8");
    assert_eq!(text.lines().count(), 2);
    assert!(text.contains("Mei Chen"));
}

#[tokio::test]
async fn unknown_response_id_is_not_found_over_http() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(get_request("/api/v1/responses/42"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
