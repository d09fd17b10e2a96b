//! Shared test harness: a full router over a scratch database, driven
//! in-process as a tower service.

use axum::Router;
use axum::body::Body;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::Service;

use inventory_server::{Config, ServerState, build_router};

pub struct TestApp {
    pub router: Router,
    #[allow(dead_code)]
    pub state: ServerState,
    /// Bearer token of the registered test user.
    pub token: String,
    /// Id ("user:key") of the registered test user.
    pub user_id: String,
    _work_dir: TempDir,
}

/// Boot a fresh server state over a temp directory, register a user and
/// log in.
pub async fn spawn_app() -> TestApp {
    let work_dir = tempfile::tempdir().expect("failed to create temp dir");
    let config = Config::with_overrides(work_dir.path().to_string_lossy().to_string(), 0);
    let state = ServerState::initialize(&config)
        .await
        .expect("failed to initialize server state");
    let router = build_router(state.clone());

    let mut app = TestApp {
        router,
        state,
        token: String::new(),
        user_id: String::new(),
        _work_dir: work_dir,
    };

    let (status, _) = app
        .post(
            "/api/auth/register",
            json!({
                "username": "admin",
                "email": "admin@example.com",
                "password": "correct-horse-battery"
            }),
        )
        .await;
    assert_eq!(status, 201, "test user registration failed");

    let (status, body) = app
        .post(
            "/api/auth/login",
            json!({
                "email": "admin@example.com",
                "password": "correct-horse-battery"
            }),
        )
        .await;
    assert_eq!(status, 200, "test user login failed: {body}");
    app.token = body["data"]["token"]
        .as_str()
        .expect("login response carries a token")
        .to_string();
    app.user_id = body["data"]["user"]["id"]
        .as_str()
        .expect("login response carries the user id")
        .to_string();

    app
}

impl TestApp {
    /// Send a request through the router. The bearer token is attached
    /// automatically once login has happened.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        with_auth: bool,
    ) -> (u16, Value) {
        let mut builder = http::Request::builder().method(method).uri(uri);
        if with_auth && !self.token.is_empty() {
            builder = builder.header(
                http::header::AUTHORIZATION,
                format!("Bearer {}", self.token),
            );
        }
        let request = match body {
            Some(value) => builder
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string()))
                .expect("failed to build request"),
            None => builder.body(Body::empty()).expect("failed to build request"),
        };

        let mut service = self.router.clone();
        let response = service.call(request).await.expect("router call failed");

        let status = response.status().as_u16();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body is not JSON")
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (u16, Value) {
        self.request("GET", uri, None, true).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (u16, Value) {
        self.request("POST", uri, Some(body), true).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (u16, Value) {
        self.request("PUT", uri, Some(body), true).await
    }

    pub async fn delete(&self, uri: &str) -> (u16, Value) {
        self.request("DELETE", uri, None, true).await
    }
}

/// Ids of a minimal catalog: everything a product needs to reference.
#[allow(dead_code)]
pub struct Catalog {
    pub supplier_id: String,
    pub brand_id: String,
    pub branch_id: String,
    pub parent_category_id: String,
    pub category_id: String,
    pub unit_id: String,
}

/// Create one record of every resource a product references.
#[allow(dead_code)]
pub async fn seed_catalog(app: &TestApp) -> Catalog {
    let (status, body) = app
        .post(
            "/api/suppliers",
            json!({"supplier_name": "Acme Supplies", "supplier_phone": "+1-202-555-0100"}),
        )
        .await;
    assert_eq!(status, 201, "seed supplier failed: {body}");
    let supplier_id = id_of(&body);

    let (status, body) = app
        .post("/api/brands", json!({"brand_name": "Acme"}))
        .await;
    assert_eq!(status, 201, "seed brand failed: {body}");
    let brand_id = id_of(&body);

    let (status, body) = app
        .post("/api/branches", json!({"branch_name": "Warehouse"}))
        .await;
    assert_eq!(status, 201, "seed branch failed: {body}");
    let branch_id = id_of(&body);

    let (status, body) = app
        .post(
            "/api/parent-product-categories",
            json!({"parent_product_category_name": "Beverages"}),
        )
        .await;
    assert_eq!(status, 201, "seed parent category failed: {body}");
    let parent_category_id = id_of(&body);

    let (status, body) = app
        .post(
            "/api/product-categories",
            json!({
                "parent_product_category_id": &parent_category_id,
                "product_category_name": "Soft Drinks"
            }),
        )
        .await;
    assert_eq!(status, 201, "seed product category failed: {body}");
    let category_id = id_of(&body);

    let (status, body) = app.post("/api/units", json!({"name": "bottle"})).await;
    assert_eq!(status, 201, "seed unit failed: {body}");
    let unit_id = id_of(&body);

    Catalog {
        supplier_id,
        brand_id,
        branch_id,
        parent_category_id,
        category_id,
        unit_id,
    }
}

/// Extract `data.id` from an envelope.
pub fn id_of(body: &Value) -> String {
    body["data"]["id"]
        .as_str()
        .unwrap_or_else(|| panic!("response has no data.id: {body}"))
        .to_string()
}
