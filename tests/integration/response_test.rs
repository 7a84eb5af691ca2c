//! Response submission and listing tests

use std::collections::HashSet;

use actix_web::App;
use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, init_service, read_body_json};
use actix_web::web::Data;
use chrono::{DateTime, Duration, Utc};
use futures_util::future::join_all;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use serde_json::{Value, json};

use voting_api::testing::{instance, setup};

#[actix_web::test]
async fn test_submit_stamps_a_server_side_timestamp() {
    let (service, pool) = voting_api::service!();
    let question_id = setup::seed_multiple_choice_question(&pool, &["Rust", "Go"]).await;

    let before = Utc::now();
    let req = TestRequest::post()
        .uri("/api/responses")
        .set_json(json!({
            "question_id": question_id.to_hex(),
            "response_text": "Rust",
            // must be ignored in favor of the server clock
            "submitted_at": "2000-01-01T00:00:00Z",
        }))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    let response_id = body["response_id"].as_str().expect("response_id is a string").to_string();
    assert!(ObjectId::parse_str(&response_id).is_ok());

    let req = TestRequest::get()
        .uri(&format!("/api/responses/{}", question_id.to_hex()))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let listed: Value = read_body_json(resp).await;
    let entry = listed
        .as_array()
        .expect("list payload is an array")
        .iter()
        .find(|entry| entry["_id"] == json!(response_id))
        .expect("submitted response is listed")
        .clone();

    let submitted_at: DateTime<Utc> = entry["submitted_at"]
        .as_str()
        .expect("submitted_at is a string")
        .parse()
        .expect("submitted_at parses as RFC 3339");

    assert!(submitted_at >= before - Duration::seconds(60));
    assert!(submitted_at <= Utc::now() + Duration::seconds(60));
    assert_ne!(entry["submitted_at"], json!("2000-01-01T00:00:00Z"));
}

#[actix_web::test]
async fn test_scale_answers_must_be_integers() {
    let (service, pool) = voting_api::service!();
    let question_id = setup::seed_scale_question(&pool, 5).await;

    // a free-text answer to a scale question is rejected
    let req = TestRequest::post()
        .uri("/api/responses")
        .set_json(json!({
            "question_id": question_id.to_hex(),
            "response_text": "five",
        }))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // an integer is accepted
    let req = TestRequest::post()
        .uri("/api/responses")
        .set_json(json!({
            "question_id": question_id.to_hex(),
            "response_text": 4,
        }))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_multiple_choice_accepts_single_and_multi_selection() {
    let (service, pool) = voting_api::service!();
    let question_id = setup::seed_multiple_choice_question(&pool, &["Rust", "Go", "Zig"]).await;

    for response_text in [json!("Rust"), json!(["Rust", "Zig"])] {
        let req = TestRequest::post()
            .uri("/api/responses")
            .set_json(json!({
                "question_id": question_id.to_hex(),
                "response_text": response_text,
            }))
            .to_request();
        let resp = call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    // a numeric answer does not fit a multiple-choice question
    let req = TestRequest::post()
        .uri("/api/responses")
        .set_json(json!({
            "question_id": question_id.to_hex(),
            "response_text": 2,
        }))
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn test_unknown_question_is_rejected() {
    let (service, _pool) = voting_api::service!();

    let req = TestRequest::post()
        .uri("/api/responses")
        .set_json(json!({
            "question_id": ObjectId::new().to_hex(),
            "response_text": "Rust",
        }))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn test_malformed_body_returns_422_without_touching_the_store() {
    let pool = instance::unreachable_pool().await;
    let app = App::new()
        .app_data(Data::new(pool))
        .configure(voting_api::router::route);
    let service = init_service(app).await;

    // response_text is missing entirely
    let req = TestRequest::post()
        .uri("/api/responses")
        .set_json(json!({ "question_id": "abc" }))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn test_concurrent_submissions_are_all_stored() {
    let (service, pool) = voting_api::service!();
    let question_id = setup::seed_multiple_choice_question(&pool, &["Rust", "Go"]).await;

    let submissions = (0..8).map(|_| {
        let req = TestRequest::post()
            .uri("/api/responses")
            .set_json(json!({
                "question_id": question_id.to_hex(),
                "response_text": "Rust",
            }))
            .to_request();
        call_service(&service, req)
    });
    let responses = join_all(submissions).await;

    let mut ids = HashSet::new();
    for resp in responses {
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = read_body_json(resp).await;
        ids.insert(body["response_id"].as_str().expect("response_id is a string").to_string());
    }
    assert_eq!(ids.len(), 8, "every submission yields a distinct id");

    let stored = pool
        .responses()
        .expect("pool is open")
        .count_documents(doc! { "question_id": question_id.to_hex() })
        .await
        .expect("count query succeeds");
    assert_eq!(stored, 8, "no submission was lost");
}
