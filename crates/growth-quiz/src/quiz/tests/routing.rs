use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::quiz::resolver::TiePolicy;
use crate::quiz::router::{quiz_router, submit_handler};
use crate::quiz::service::QuizService;
use crate::quiz::submission::SubmissionPayload;

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn questions_route_lists_bank() {
    let (service, _) = build_service(TiePolicy::default());
    let response = quiz_router(service)
        .oneshot(
            Request::get("/api/v1/quiz/questions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, body) = response_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 4);
    assert_eq!(body["questions"][3]["options"][1]["type"], "内省型");
    assert_eq!(body["questions"][0]["question"], "Starting something new");
}

#[tokio::test]
async fn evaluate_route_returns_outcome() {
    let (service, _) = build_service(TiePolicy::default());
    let request = post_json(
        "/api/v1/quiz/evaluate",
        json!({
            "answers": [
                { "questionId": 1, "selectedOption": 0 },
                { "questionId": 2, "selectedOption": 1 }
            ]
        }),
    );

    let response = quiz_router(service).oneshot(request).await.unwrap();
    let (status, body) = response_json(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["resultKey"], "転機型");
    assert_eq!(body["matched"], true);
    assert_eq!(body["scores"]["転機型"], 3);
    assert_eq!(body["scores"]["自発型"], 2);
    assert_eq!(body["content"]["type"], "転機型");
    assert_eq!(body["breakdown"].as_array().map(Vec::len), Some(4));
    assert_eq!(body["breakdown"][1]["maxPossible"], 6);
    assert!(body.get("result_key").is_none());
}

#[tokio::test]
async fn evaluate_route_rejects_out_of_range_option() {
    let (service, _) = build_service(TiePolicy::default());
    let request = post_json(
        "/api/v1/quiz/evaluate",
        json!({ "answers": [ { "questionId": 4, "selectedOption": 5 } ] }),
    );

    let response = quiz_router(service).oneshot(request).await.unwrap();
    let (status, body) = response_json(response).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("question 4"));
}

#[tokio::test]
async fn submission_route_records_payload() {
    let (service, log) = build_service(TiePolicy::default());
    let request = post_json(
        "/api/v1/quiz/submissions",
        json!({
            "nickname": "mika",
            "userId": "user_fixed",
            "result": { "type": "探求型", "title": "Explorer", "body": "Curious" },
            "scores": { "自発型": 1, "転機型": 0, "探求型": 3, "内省型": 2 },
            "answers": [ { "questionId": 3, "selectedOption": 2 } ]
        }),
    );

    let response = quiz_router(service).oneshot(request).await.unwrap();
    let (status, body) = response_json(response).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["userId"], "user_fixed");

    let records = log.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].nickname, "mika");
    assert_eq!(records[0].explorer_score, 3);
}

#[tokio::test]
async fn submissions_route_lists_recent_records() {
    let (service, _) = build_service(TiePolicy::default());
    let router = quiz_router(service);

    for nickname in ["aoi", "kai", "nao"] {
        let request = post_json(
            "/api/v1/quiz/submissions",
            json!({
                "nickname": nickname,
                "result": { "type": "内省型", "title": "Reflective", "body": "Quiet" },
                "scores": { "自発型": 0, "転機型": 0, "探求型": 0, "内省型": 4 },
                "timestamp": "1999-01-01T00:00:00Z"
            }),
        );
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = router
        .oneshot(
            Request::get("/api/v1/quiz/submissions?limit=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = response_json(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["submissions"][0]["nickname"], "kai");
    assert_eq!(body["submissions"][1]["nickname"], "nao");
    assert_eq!(body["submissions"][1]["userId"], "匿名");
    assert_eq!(body["submissions"][1]["clientTimestamp"], "1999-01-01T00:00:00Z");
    assert_ne!(body["submissions"][1]["submittedAt"], "1999-01-01T00:00:00Z");
}

#[tokio::test]
async fn submissions_route_reports_unreadable_log() {
    let (template, _) = build_service(TiePolicy::default());
    let service = Arc::new(QuizService::new(
        Arc::new(template.content().clone()),
        Arc::new(UnavailableLog),
        TiePolicy::default(),
    ));

    let response = quiz_router(service)
        .oneshot(
            Request::get("/api/v1/quiz/submissions")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let (status, body) = response_json(response).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().expect("message").contains("sheet offline"));
}

#[tokio::test]
async fn submit_handler_reports_log_failure() {
    let (template, _) = build_service(TiePolicy::default());
    let service = Arc::new(QuizService::new(
        Arc::new(template.content().clone()),
        Arc::new(UnavailableLog),
        TiePolicy::default(),
    ));
    let outcome = service.evaluate(&[]).expect("empty list is valid");
    let payload = SubmissionPayload::from_outcome("nobody", None, &outcome, Vec::new());

    let response = submit_handler::<UnavailableLog>(State(service), axum::Json(payload)).await;
    let (status, body) = response_json(response).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
}
