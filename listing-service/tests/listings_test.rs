mod common;

use common::TestApp;
use serde_json::{json, Value};

fn sample_facts() -> Value {
    json!({
        "property_type": "apartment",
        "bedrooms": 2,
        "amenities": ["wifi", "washer", "balcony"],
        "location": {"city": "Lisbon", "neighborhood": "Alfama"},
        "pets_allowed": false
    })
}

#[tokio::test]
async fn create_listing_returns_created_listing() {
    let app = TestApp::spawn().await;
    app.stub_description("Sunlit Alfama flat with a balcony.").await;

    let response = app
        .create_listing(&json!({ "host_input_facts": sample_facts() }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    assert!(response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .starts_with("application/json"));

    let body: Value = response.json().await.unwrap();
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["host_input_facts"], sample_facts());
    assert_eq!(body["ai_description"], "Sunlit Alfama flat with a balcony.");
    let created_at = body["created_at"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());

    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn create_forwards_facts_to_ai_service() {
    let app = TestApp::spawn().await;
    app.stub_description("ok").await;

    app.create_listing(&json!({ "host_input_facts": sample_facts() }))
        .await;

    let requests = app.ai_service.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent, json!({ "host_input_facts": sample_facts() }));
}

#[tokio::test]
async fn created_listing_can_be_fetched() {
    let app = TestApp::spawn().await;
    app.stub_description("Quiet garden studio.").await;

    let created: Value = app
        .create_listing(&json!({ "host_input_facts": sample_facts() }))
        .await
        .json()
        .await
        .unwrap();

    let response = app
        .get_listing(&created["id"].as_i64().unwrap().to_string())
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let fetched: Value = response.json().await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn each_listing_gets_a_distinct_id() {
    let app = TestApp::spawn().await;
    app.stub_description("Same text").await;
    let body = json!({ "host_input_facts": {"bedrooms": 1} });

    let first: Value = app.create_listing(&body).await.json().await.unwrap();
    let second: Value = app.create_listing(&body).await.json().await.unwrap();

    assert_ne!(first["id"], second["id"]);
    assert_eq!(app.store.len().await, 2);
}

#[tokio::test]
async fn ai_service_error_creates_nothing() {
    let app = TestApp::spawn().await;
    app.stub_failure(500, "model exploded").await;

    let response = app
        .create_listing(&json!({ "host_input_facts": sample_facts() }))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    let body: Value = response.json().await.unwrap();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("status 500"), "{message}");
    assert!(message.contains("model exploded"), "{message}");

    assert!(app.store.is_empty().await);
    assert_eq!(app.get_listing("1").await.status().as_u16(), 404);
}

#[tokio::test]
async fn undecodable_ai_response_is_a_server_error() {
    let app = TestApp::spawn().await;
    wiremock::Mock::given(wiremock::matchers::path("/generate_description"))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&app.ai_service)
        .await;

    let response = app
        .create_listing(&json!({ "host_input_facts": {"beds": 1} }))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn store_failure_is_a_server_error() {
    let app = TestApp::spawn().await;
    app.stub_description("Will be discarded").await;
    app.store.set_unavailable(true);

    let response = app
        .create_listing(&json!({ "host_input_facts": {"beds": 1} }))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    assert_eq!(app.ai_requests().await, 1);
}

#[tokio::test]
async fn malformed_body_is_rejected_before_any_call() {
    let app = TestApp::spawn().await;
    app.stub_description("never used").await;

    let response = app
        .client
        .post(format!("{}/listings/create", app.address))
        .header("content-type", "application/json")
        .body("{\"host_input_facts\": ")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(app.ai_requests().await, 0);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn body_without_content_type_is_accepted() {
    let app = TestApp::spawn().await;
    app.stub_description("Plain body").await;

    let response = app
        .client
        .post(format!("{}/listings/create", app.address))
        .body(r#"{"host_input_facts": {"beds": 3}}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 201);
}

#[tokio::test]
async fn unknown_listing_is_not_found() {
    let app = TestApp::spawn().await;

    let response = app.get_listing("12345").await;

    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Listing not found");
}

#[tokio::test]
async fn non_numeric_id_is_a_client_error() {
    let app = TestApp::spawn().await;

    for id in ["abc", "1.5", "-2", "0"] {
        let response = app.get_listing(id).await;
        assert_eq!(response.status().as_u16(), 400, "id {id}");
    }
}

#[tokio::test]
async fn store_failure_on_fetch_is_a_server_error() {
    let app = TestApp::spawn().await;
    app.store.set_unavailable(true);

    let response = app.get_listing("1").await;

    assert_eq!(response.status().as_u16(), 500);
}
