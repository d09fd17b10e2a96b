//! Product API tests: reference integrity checks, enriched read
//! responses, category filtering and price validation.

mod common;

use common::{id_of, seed_catalog, spawn_app};
use serde_json::json;

#[tokio::test]
async fn create_resolves_references_in_responses() {
    let app = spawn_app().await;
    let catalog = seed_catalog(&app).await;

    let (status, body) = app
        .post(
            "/api/products",
            json!({
                "name": "Sparkling Water 500ml",
                "supplier_id": &catalog.supplier_id,
                "brand_id": &catalog.brand_id,
                "branch_id": &catalog.branch_id,
                "parent_product_category_id": &catalog.parent_category_id,
                "product_category_id": &catalog.category_id,
                "unit_id": &catalog.unit_id,
                "stock_quantity": 120,
                "cost_price": "0.40",
                "selling_price": "0.95"
            }),
        )
        .await;
    assert_eq!(status, 201, "{body}");
    assert_eq!(body["data"]["code"], "PRD-00001");

    // References come back resolved to display subsets
    assert_eq!(body["data"]["supplier_id"]["supplier_name"], "Acme Supplies");
    assert_eq!(body["data"]["brand_id"]["brand_name"], "Acme");
    assert_eq!(body["data"]["branch_id"]["branch_name"], "Warehouse");
    assert_eq!(
        body["data"]["parent_product_category_id"]["parent_product_category_name"],
        "Beverages"
    );
    assert_eq!(
        body["data"]["product_category_id"]["product_category_name"],
        "Soft Drinks"
    );
    assert_eq!(body["data"]["unit_id"]["name"], "bottle");
    assert_eq!(body["data"]["created_by"]["username"], "admin");
    assert!(body["data"]["updated_by"].is_null());
}

#[tokio::test]
async fn dangling_reference_fails_and_persists_nothing() {
    let app = spawn_app().await;
    let catalog = seed_catalog(&app).await;

    let (status, body) = app
        .post(
            "/api/products",
            json!({
                "name": "Orphan product",
                "supplier_id": "supplier:doesnotexist",
                "brand_id": &catalog.brand_id,
                "branch_id": &catalog.branch_id,
                "parent_product_category_id": &catalog.parent_category_id,
                "product_category_id": &catalog.category_id,
                "unit_id": &catalog.unit_id
            }),
        )
        .await;
    assert_eq!(status, 400, "{body}");
    assert_eq!(body["message"], "Supplier does not exist");

    // The failed create must not have written a product
    let (status, _) = app.get("/api/products").await;
    assert_eq!(status, 404);

    // An id addressed at the wrong table is a format error
    let (status, body) = app
        .post(
            "/api/products",
            json!({
                "name": "Mislinked product",
                "supplier_id": &catalog.branch_id,
                "brand_id": &catalog.brand_id,
                "branch_id": &catalog.branch_id,
                "parent_product_category_id": &catalog.parent_category_id,
                "product_category_id": &catalog.category_id,
                "unit_id": &catalog.unit_id
            }),
        )
        .await;
    assert_eq!(status, 400, "{body}");
    assert!(body["message"].as_str().unwrap().contains("ID format"));
}

#[tokio::test]
async fn selling_price_must_exceed_cost_price() {
    let app = spawn_app().await;
    let catalog = seed_catalog(&app).await;

    let (status, body) = app
        .post(
            "/api/products",
            json!({
                "name": "Bad margins",
                "supplier_id": &catalog.supplier_id,
                "brand_id": &catalog.brand_id,
                "branch_id": &catalog.branch_id,
                "parent_product_category_id": &catalog.parent_category_id,
                "product_category_id": &catalog.category_id,
                "unit_id": &catalog.unit_id,
                "cost_price": "2.00",
                "selling_price": "2.00"
            }),
        )
        .await;
    assert_eq!(status, 400, "{body}");
    assert!(body["message"].as_str().unwrap().contains("selling_price"));
}

#[tokio::test]
async fn filters_by_category() {
    let app = spawn_app().await;
    let catalog = seed_catalog(&app).await;

    // A second category under the same parent
    let (_, body) = app
        .post(
            "/api/product-categories",
            json!({
                "parent_product_category_id": &catalog.parent_category_id,
                "product_category_name": "Juices"
            }),
        )
        .await;
    let juices = id_of(&body);

    for (name, category) in [
        ("Cola", &catalog.category_id),
        ("Lemonade", &catalog.category_id),
        ("Orange Juice", &juices),
    ] {
        let (status, body) = app
            .post(
                "/api/products",
                json!({
                    "name": name,
                    "supplier_id": &catalog.supplier_id,
                    "brand_id": &catalog.brand_id,
                    "branch_id": &catalog.branch_id,
                    "parent_product_category_id": &catalog.parent_category_id,
                    "product_category_id": category,
                    "unit_id": &catalog.unit_id
                }),
            )
            .await;
        assert_eq!(status, 201, "{body}");
    }

    let (status, body) = app
        .get(&format!("/api/products/category/{}", catalog.category_id))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["records_count"], 2);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (status, body) = app.get(&format!("/api/products/category/{juices}")).await;
    assert_eq!(status, 200);
    assert_eq!(body["records_count"], 1);
}

#[tokio::test]
async fn update_keeps_code_and_rejects_taken_name() {
    let app = spawn_app().await;
    let catalog = seed_catalog(&app).await;

    let product = |name: &str| {
        json!({
            "name": name,
            "supplier_id": &catalog.supplier_id,
            "brand_id": &catalog.brand_id,
            "branch_id": &catalog.branch_id,
            "parent_product_category_id": &catalog.parent_category_id,
            "product_category_id": &catalog.category_id,
            "unit_id": &catalog.unit_id
        })
    };

    let (_, body) = app.post("/api/products", product("Cola")).await;
    let cola = id_of(&body);
    let (_, body) = app.post("/api/products", product("Lemonade")).await;
    assert_eq!(body["data"]["code"], "PRD-00002");
    let lemonade = id_of(&body);

    // Rename keeps the code and stamps the updater
    let (status, body) = app
        .put(&format!("/api/products/{cola}"), product("Cherry Cola"))
        .await;
    assert_eq!(status, 200, "{body}");
    assert_eq!(body["data"]["code"], "PRD-00001");
    assert_eq!(body["data"]["updated_by"]["username"], "admin");

    // Taking the other product's name conflicts
    let (status, body) = app
        .put(&format!("/api/products/{lemonade}"), product("Cherry Cola"))
        .await;
    assert_eq!(status, 409, "{body}");
    assert!(body["message"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn product_category_requires_existing_parent() {
    let app = spawn_app().await;

    let (status, body) = app
        .post(
            "/api/product-categories",
            json!({
                "parent_product_category_id": "parent_product_category:missing",
                "product_category_name": "Orphans"
            }),
        )
        .await;
    assert_eq!(status, 400, "{body}");
    assert_eq!(body["message"], "Parent product category does not exist");

    // With a real parent it goes through, carrying the resolved parent name
    let (_, body) = app
        .post(
            "/api/parent-product-categories",
            json!({"parent_product_category_name": "Beverages"}),
        )
        .await;
    let parent = id_of(&body);

    let (status, body) = app
        .post(
            "/api/product-categories",
            json!({
                "parent_product_category_id": parent,
                "product_category_name": "Soft Drinks"
            }),
        )
        .await;
    assert_eq!(status, 201, "{body}");
    assert_eq!(body["data"]["product_category_code"], "PCAT-00001");
    assert_eq!(
        body["data"]["parent_product_category_id"]["parent_product_category_name"],
        "Beverages"
    );
    assert_eq!(body["data"]["created_by"]["username"], "admin");
}
