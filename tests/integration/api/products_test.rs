//! Product API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::assertions::assert_message;
use crate::common::TestApp;

#[tokio::test]
async fn test_product_crud() {
    let app = TestApp::new();
    let user = app.seed_user("shop@example.com", "pw").await;
    let token = Some(user.token.as_str());

    let (status, created) = app
        .post(
            "/api/products",
            token,
            json!({ "name": "Lamp", "description": "Desk lamp", "price": 24.5 }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Lamp");
    assert_eq!(created["price"], 24.5);
    let id = created["id"].as_str().expect("id is a string").to_string();

    let (status, listed) = app.get("/api/products", token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created.clone()]));

    let (status, updated) = app
        .put(&format!("/api/products/{id}"), token, json!({ "price": 19.0 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], 19.0);
    assert_eq!(updated["name"], "Lamp");
    assert_eq!(updated["description"], "Desk lamp");

    let (status, _) = app.delete(&format!("/api/products/{id}"), token).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.get(&format!("/api/products/{id}"), token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_message(&body, "Product not found");
}

#[tokio::test]
async fn test_create_product_validation() {
    let app = TestApp::new();
    let user = app.seed_user("shop@example.com", "pw").await;
    let token = Some(user.token.as_str());

    let (status, body) = app
        .post("/api/products", token, json!({ "name": "  ", "price": 1.0 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_message(&body, "Product name is required");

    let (status, body) = app
        .post("/api/products", token, json!({ "name": "Mug", "price": -3.0 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_message(&body, "Price must be a non-negative number");

    let (_, listed) = app.get("/api/products", token).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_update_missing_product() {
    let app = TestApp::new();
    let user = app.seed_user("shop@example.com", "pw").await;

    let (status, body) = app
        .put(
            &format!("/api/products/{}", uuid::Uuid::new_v4()),
            Some(&user.token),
            json!({ "name": "Anything" }),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_message(&body, "Product not found");
}
