//! Client API tests: the phone-before-email conflict tie-break, self
//! updates and pagination.

mod common;

use common::{id_of, spawn_app};
use serde_json::json;

#[tokio::test]
async fn phone_is_checked_before_email() {
    let app = spawn_app().await;

    let (status, body) = app
        .post(
            "/api/clients",
            json!({
                "first_name": "Ada",
                "phone": "111-0001",
                "email": "ada@example.com"
            }),
        )
        .await;
    assert_eq!(status, 201, "{body}");
    assert_eq!(body["data"]["client_code"], "CLI-00001");

    // Both phone and email collide: phone wins the tie-break
    let (status, body) = app
        .post(
            "/api/clients",
            json!({
                "first_name": "Grace",
                "phone": "111-0001",
                "email": "ada@example.com"
            }),
        )
        .await;
    assert_eq!(status, 409, "{body}");
    assert_eq!(
        body["message"],
        "Client with this phone number already exists"
    );

    // Only the email collides
    let (status, body) = app
        .post(
            "/api/clients",
            json!({
                "first_name": "Grace",
                "phone": "111-0002",
                "email": "ada@example.com"
            }),
        )
        .await;
    assert_eq!(status, 409, "{body}");
    assert_eq!(body["message"], "Client with this email already exists");
}

#[tokio::test]
async fn update_keeps_code_and_allows_own_contact() {
    let app = spawn_app().await;

    let (_, body) = app
        .post(
            "/api/clients",
            json!({"first_name": "Ada", "phone": "111-0001", "email": "ada@example.com"}),
        )
        .await;
    let ada = id_of(&body);

    let (_, body) = app
        .post(
            "/api/clients",
            json!({"first_name": "Grace", "phone": "111-0002"}),
        )
        .await;
    let grace = id_of(&body);

    // Ada resubmits her own phone/email: fine
    let (status, body) = app
        .put(
            &format!("/api/clients/{ada}"),
            json!({
                "first_name": "Ada L.",
                "phone": "111-0001",
                "email": "ada@example.com"
            }),
        )
        .await;
    assert_eq!(status, 200, "{body}");
    assert_eq!(body["data"]["client_code"], "CLI-00001");
    assert_eq!(body["data"]["first_name"], "Ada L.");
    assert_eq!(
        body["data"]["updated_by"].as_str(),
        Some(app.user_id.as_str())
    );

    // Grace takes Ada's phone: conflict
    let (status, body) = app
        .put(
            &format!("/api/clients/{grace}"),
            json!({"first_name": "Grace", "phone": "111-0001"}),
        )
        .await;
    assert_eq!(status, 409, "{body}");
    assert_eq!(
        body["message"],
        "Client with this phone number already exists"
    );
}

#[tokio::test]
async fn list_is_paginated_with_total_count() {
    let app = spawn_app().await;

    for i in 0..12 {
        let (status, body) = app
            .post(
                "/api/clients",
                json!({"first_name": format!("Client {i}"), "phone": format!("555-{i:04}")}),
            )
            .await;
        assert_eq!(status, 201, "{body}");
    }

    // Default page size is 10
    let (status, body) = app.get("/api/clients").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
    assert_eq!(body["records_count"], 12);

    // Second page carries the remainder, the total stays the same
    let (status, body) = app.get("/api/clients?page=2&limit=10").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["records_count"], 12);

    // Beyond the data: empty page reads as not found
    let (status, _) = app.get("/api/clients?page=5&limit=10").await;
    assert_eq!(status, 404);
}
