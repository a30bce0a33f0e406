mod common;

use axum::http::StatusCode;
use common::{create_test_app, get, post_json};
use serde_json::json;

#[tokio::test]
async fn registering_a_person_assigns_an_id() {
    let app = create_test_app(false);
    let (status, created) = post_json(
        &app,
        "/api/users",
        json!({
            "name": "Grace Hopper",
            "email": "grace@example.com",
            "phone": "555-7777",
            "address": {
                "street": "1 Navy Way",
                "city": "Arlington",
                "state": "VA",
                "postalCode": "22202",
                "country": "USA",
            },
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(!created["id"].as_str().unwrap().is_empty());

    let (_, listed) = get(&app, "/api/users").await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["name"], "Grace Hopper");
}

#[tokio::test]
async fn invalid_email_is_rejected() {
    let app = create_test_app(false);
    let (status, body) = post_json(
        &app,
        "/api/users",
        json!({
            "name": "No Email",
            "email": "not-an-email",
            "address": {
                "street": "", "city": "", "state": "",
                "postalCode": "", "country": "",
            },
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn seeded_demo_users_are_listed() {
    let app = create_test_app(true);
    let (status, listed) = get(&app, "/api/users").await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["John Doe", "Jane Smith", "Robert Johnson"]);
}
