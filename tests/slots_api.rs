mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_app, get};
use http_body_util::BodyExt;
use tower::ServiceExt;

#[tokio::test]
async fn available_slots_respect_the_requested_window() {
    let app = create_test_app(false);
    let (status, slots) = get(&app, "/api/slots?date=2025-05-07&start=10&end=17").await;

    assert_eq!(status, StatusCode::OK);
    let slots = slots.as_array().unwrap().clone();
    assert_eq!(slots.len(), 3);
    let starts: Vec<&str> = slots
        .iter()
        .map(|s| s["startTime"].as_str().unwrap())
        .collect();
    // A 16-18 window would end past 17, so it is never offered.
    assert_eq!(starts, vec!["10:00", "12:00", "14:00"]);
    assert_eq!(slots[0]["id"], "slot-2025-05-07-10");
    assert_eq!(slots[0]["endTime"], "12:00");
}

#[tokio::test]
async fn available_slots_default_to_business_hours() {
    let app = create_test_app(false);
    let (_, defaulted) = get(&app, "/api/slots?date=2025-05-07").await;
    let (_, explicit) = get(&app, "/api/slots?date=2025-05-07&start=10&end=17").await;
    assert_eq!(defaulted, explicit);
}

#[tokio::test]
async fn missing_date_is_a_bad_request() {
    let app = create_test_app(false);
    let (status, _) = get(&app, "/api/slots").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn recommended_slots_rank_and_project_for_a_seeded_receiver() {
    let app = create_test_app(true);
    // 2025-05-05 is a Monday; user1's strongest window is Wednesday 14:00.
    let (status, slots) = get(
        &app,
        "/api/receivers/user1/recommended-slots?date=2025-05-05&limit=3",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let slots = slots.as_array().unwrap().clone();
    assert_eq!(slots.len(), 3);

    assert_eq!(slots[0]["date"], "2025-05-07");
    assert_eq!(slots[0]["startTime"], "14:00");
    // Monday preference never lands on the reference Monday itself.
    assert_eq!(slots[1]["date"], "2025-05-12");
    assert_eq!(slots[1]["startTime"], "10:00");
    assert_eq!(slots[2]["date"], "2025-05-09");
    assert_eq!(slots[2]["startTime"], "16:00");
}

#[tokio::test]
async fn business_hours_flag_filters_recommendations() {
    let app = create_test_app(true);
    let (_, slots) = get(
        &app,
        "/api/receivers/user1/recommended-slots?date=2025-05-05&business_hours=true",
    )
    .await;
    // The 16-18 suggestion ends past 17:00 and drops out.
    let starts: Vec<&str> = slots
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["startTime"].as_str().unwrap())
        .collect();
    assert_eq!(starts, vec!["14:00", "10:00"]);
}

#[tokio::test]
async fn unknown_receiver_gets_an_empty_list_not_an_error() {
    let app = create_test_app(true);
    let (status, slots) = get(&app, "/api/receivers/stranger/recommended-slots").await;
    assert_eq!(status, StatusCode::OK);
    assert!(slots.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn me_maps_identity_headers_to_a_placeholder_person() {
    let app = create_test_app(false);
    let request = Request::get("/api/me")
        .header("x-user-id", "u-9")
        .header("x-user-name", "Ada")
        .header("x-user-email", "ada@example.com")
        .header("x-user-role", "receiver")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["id"], "u-9");
    assert_eq!(body["name"], "Ada");
    // Placeholder contact data, not deliverable.
    assert_eq!(body["phone"], "");
    assert_eq!(body["address"]["street"], "");
}

#[tokio::test]
async fn me_without_identity_headers_is_unauthorized() {
    let app = create_test_app(false);
    let (status, body) = get(&app, "/api/me").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].as_str().unwrap().contains("x-user-id"));
}
