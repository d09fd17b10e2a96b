//! Branch API end-to-end tests: code sequencing, uniqueness, code
//! stability across updates, status filters and auth enforcement.

mod common;

use common::{id_of, spawn_app};
use serde_json::json;

#[tokio::test]
async fn branch_lifecycle() {
    let app = spawn_app().await;

    // First branch gets the first code
    let (status, body) = app
        .post("/api/branches", json!({"branch_name": "Main St"}))
        .await;
    assert_eq!(status, 201, "{body}");
    assert_eq!(body["success"], true);
    assert_eq!(body["status_code"], 201);
    assert_eq!(body["data"]["branch_code"], "BR-00001");
    assert_eq!(body["data"]["branch_status"], 1);
    assert_eq!(
        body["data"]["created_by"].as_str(),
        Some(app.user_id.as_str())
    );
    assert!(body["data"]["updated_by"].is_null());
    let first_id = id_of(&body);

    // Same name again conflicts
    let (status, body) = app
        .post("/api/branches", json!({"branch_name": "Main St"}))
        .await;
    assert_eq!(status, 409, "{body}");
    assert_eq!(body["success"], false);
    assert!(
        body["message"].as_str().unwrap().contains("already exists"),
        "conflict message should name the collision: {body}"
    );

    // Second branch continues the sequence
    let (status, body) = app
        .post("/api/branches", json!({"branch_name": "Second St"}))
        .await;
    assert_eq!(status, 201, "{body}");
    assert_eq!(body["data"]["branch_code"], "BR-00002");
    let second_id = id_of(&body);

    // Delete the first, then reading it is a 404
    let (status, _) = app.delete(&format!("/api/branches/{first_id}")).await;
    assert_eq!(status, 200);
    let (status, body) = app.get(&format!("/api/branches/{first_id}")).await;
    assert_eq!(status, 404, "{body}");

    // Renaming the second branch keeps its code and stamps the updater
    let (status, body) = app
        .put(
            &format!("/api/branches/{second_id}"),
            json!({"branch_name": "Second St Renamed"}),
        )
        .await;
    assert_eq!(status, 200, "{body}");
    assert_eq!(body["data"]["branch_code"], "BR-00002");
    assert_eq!(body["data"]["branch_name"], "Second St Renamed");
    assert_eq!(
        body["data"]["updated_by"].as_str(),
        Some(app.user_id.as_str())
    );
    assert_eq!(
        body["data"]["created_by"].as_str(),
        Some(app.user_id.as_str())
    );
}

#[tokio::test]
async fn update_to_own_name_is_allowed() {
    let app = spawn_app().await;

    let (_, body) = app
        .post("/api/branches", json!({"branch_name": "Main St"}))
        .await;
    let id = id_of(&body);

    // Resubmitting the unchanged name must not conflict with itself
    let (status, body) = app
        .put(
            &format!("/api/branches/{id}"),
            json!({"branch_name": "Main St", "branch_address": "1 Main St"}),
        )
        .await;
    assert_eq!(status, 200, "{body}");
    assert_eq!(body["data"]["branch_address"], "1 Main St");
}

#[tokio::test]
async fn update_to_taken_name_conflicts() {
    let app = spawn_app().await;

    let (_, _) = app
        .post("/api/branches", json!({"branch_name": "Main St"}))
        .await;
    let (_, body) = app
        .post("/api/branches", json!({"branch_name": "Second St"}))
        .await;
    let second_id = id_of(&body);

    let (status, body) = app
        .put(
            &format!("/api/branches/{second_id}"),
            json!({"branch_name": "Main St"}),
        )
        .await;
    assert_eq!(status, 409, "{body}");
    assert!(body["message"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn status_filters() {
    let app = spawn_app().await;

    app.post(
        "/api/branches",
        json!({"branch_name": "Open branch", "branch_status": 1}),
    )
    .await;
    app.post(
        "/api/branches",
        json!({"branch_name": "Closed branch", "branch_status": 0}),
    )
    .await;

    let (status, body) = app.get("/api/branches/active").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["branch_name"], "Open branch");

    let (status, body) = app.get("/api/branches/inactive").await;
    assert_eq!(status, 200);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["branch_name"], "Closed branch");

    let (status, body) = app.get("/api/branches").await;
    assert_eq!(status, 200);
    assert_eq!(body["records_count"], 2);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn repeated_reads_are_stable() {
    let app = spawn_app().await;

    let (_, body) = app
        .post(
            "/api/branches",
            json!({"branch_name": "Main St", "branch_address": "1 Main St"}),
        )
        .await;
    let id = id_of(&body);

    let (status_a, first) = app.get(&format!("/api/branches/{id}")).await;
    let (status_b, second) = app.get(&format!("/api/branches/{id}")).await;
    assert_eq!(status_a, 200);
    assert_eq!(status_b, 200);
    assert_eq!(first["data"], second["data"]);
}

#[tokio::test]
async fn rejects_invalid_id_and_empty_name() {
    let app = spawn_app().await;

    // Id addressed at the wrong table
    let (status, body) = app.get("/api/branches/supplier:abc").await;
    assert_eq!(status, 400, "{body}");
    assert!(body["message"].as_str().unwrap().contains("ID format"));

    // Empty name fails validation before anything is written
    let (status, body) = app.post("/api/branches", json!({"branch_name": "  "})).await;
    assert_eq!(status, 400, "{body}");
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let app = spawn_app().await;

    let (status, body) = app.request("GET", "/api/branches", None, false).await;
    assert_eq!(status, 401);
    assert_eq!(body["success"], false);

    let (status, _) = app
        .request(
            "POST",
            "/api/branches",
            Some(json!({"branch_name": "Main St"})),
            false,
        )
        .await;
    assert_eq!(status, 401);

    // Garbage token is rejected too
    let request = http::Request::builder()
        .method("GET")
        .uri("/api/branches")
        .header(http::header::AUTHORIZATION, "Bearer not-a-jwt")
        .body(axum::body::Body::empty())
        .unwrap();
    let mut service = app.router.clone();
    let response = tower::Service::call(&mut service, request).await.unwrap();
    assert_eq!(response.status().as_u16(), 401);
}
