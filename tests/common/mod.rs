#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use delivery::DeliveryStore;
use http_body_util::BodyExt;
use parceldesk::routes::{router, AppState};
use parceldesk::Config;
use serde_json::{json, Value};
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config::load(None).expect("failed to load test config")
}

/// Router over a fresh store, optionally loaded with the demo dataset.
pub fn create_test_app(seed: bool) -> Router {
    let mut store = DeliveryStore::new();
    if seed {
        delivery::seed::seed_demo_data(&mut store).expect("failed to seed demo data");
    }
    router(AppState::new(store, test_config()))
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::get(uri)
            .body(Body::empty())
            .expect("failed to build request"),
    )
    .await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("failed to build request"),
    )
    .await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("request failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body was not JSON")
    };
    (status, body)
}

pub fn person_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{id}@example.com"),
        "phone": "555-0000",
        "address": {
            "street": "1 Test St",
            "city": "Testville",
            "state": "TS",
            "postalCode": "00001",
            "country": "USA",
        },
    })
}

pub fn parcel_json(sender: &str, receiver: &str) -> Value {
    json!({
        "sender": person_json(sender, "Sender"),
        "receiver": person_json(receiver, "Receiver"),
        "weight": 2.5,
        "dimensions": { "length": 10.0, "width": 15.0, "height": 5.0 },
        "description": "Books and documents",
    })
}
