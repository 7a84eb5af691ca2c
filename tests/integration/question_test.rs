//! Question endpoint tests

use actix_web::App;
use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, init_service, read_body_json};
use actix_web::web::Data;
use mongodb::bson::oid::ObjectId;
use serde_json::{Value, json};
use serial_test::serial;

use voting_api::models::v1::question::{Question, QuestionType};
use voting_api::services::v1::FETCH_CAP;
use voting_api::testing::{instance, setup};

#[actix_web::test]
async fn test_get_question_round_trips_its_id() {
    let (service, pool) = voting_api::service!();
    let id = setup::seed_multiple_choice_question(&pool, &["Rust", "Go"]).await;

    let req = TestRequest::get()
        .uri(&format!("/api/questions/{}", id.to_hex()))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["_id"], json!(id.to_hex()));
    assert_eq!(body["type"], json!("multiple-choice"));
    assert_eq!(body["options"], json!(["Rust", "Go"]));
    assert_eq!(body["scale"], Value::Null);
}

#[actix_web::test]
async fn test_get_scale_question_payload_shape() {
    let (service, pool) = voting_api::service!();
    let id = setup::seed_scale_question(&pool, 5).await;

    let req = TestRequest::get()
        .uri(&format!("/api/questions/{}", id.to_hex()))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["type"], json!("scale"));
    assert_eq!(body["scale"], json!(5));
    assert_eq!(body["options"], Value::Null);
}

#[actix_web::test]
async fn test_unknown_well_formed_id_returns_404() {
    let (service, _pool) = voting_api::service!();

    let req = TestRequest::get()
        .uri(&format!("/api/questions/{}", ObjectId::new().to_hex()))
        .to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_malformed_id_returns_400_without_touching_the_store() {
    // an unreachable pool proves the handler rejects before any store call
    let pool = instance::unreachable_pool().await;
    let app = App::new()
        .app_data(Data::new(pool))
        .configure(voting_api::router::route);
    let service = init_service(app).await;

    let req = TestRequest::get().uri("/api/questions/not-an-id").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = read_body_json(resp).await;
    assert_eq!(body["error"], "Bad request");
}

#[actix_web::test]
async fn test_list_questions_returns_well_formed_payloads() {
    let (service, pool) = voting_api::service!();
    setup::seed_multiple_choice_question(&pool, &["Rust", "Go"]).await;

    let req = TestRequest::get().uri("/api/questions").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    let questions = body.as_array().expect("list payload is an array");
    assert!(!questions.is_empty());

    for question in questions {
        assert!(question["_id"].is_string());
        let kind = question["type"].as_str().expect("type tag is a string");
        assert!(kind == "multiple-choice" || kind == "scale");
    }
}

#[actix_web::test]
#[serial]
async fn test_list_questions_never_exceeds_the_fetch_cap() {
    let (service, pool) = voting_api::service!();

    // make sure the collection holds more documents than the cap
    let surplus: Vec<Question> = (0..=FETCH_CAP)
        .map(|_| {
            let id = ObjectId::new();
            Question {
                id,
                question_text: format!("Cap filler [{}]", id.to_hex()),
                kind: QuestionType::Scale,
                options: None,
                scale: Some(5),
            }
        })
        .collect();

    pool.questions()
        .expect("pool is open")
        .insert_many(&surplus)
        .await
        .expect("failed to seed cap filler questions");

    let req = TestRequest::get().uri("/api/questions").to_request();
    let resp = call_service(&service, req).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_body_json(resp).await;
    let questions = body.as_array().expect("list payload is an array");
    assert_eq!(questions.len(), FETCH_CAP as usize);
}
