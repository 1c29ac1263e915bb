//! Authentication API integration tests
//!
//! Register, login and the auth gate in front of the protected routes.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::assertions::{assert_message, assert_no_password};
use crate::common::auth_helpers::{bare_token, expired_token, forged_token, hs512_token};
use crate::common::TestApp;

#[tokio::test]
async fn test_register_then_login() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/api/auth/register",
            None,
            json!({ "email": "alice@example.com", "password": "s3cret" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "alice@example.com");
    assert_no_password(&body);

    let (status, body) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "alice@example.com", "password": "s3cret" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_no_password(&body);
    assert_eq!(body["user"]["email"], "alice@example.com");

    let token = body["token"].as_str().expect("token is a string");
    let claims = app.state.token_keys.verify_token(token).expect("token verifies");
    assert_eq!(claims.email.as_deref(), Some("alice@example.com"));
    assert_eq!(claims.sub.as_deref(), body["user"]["id"].as_str());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new();
    app.seed_user("bob@example.com", "right").await;

    let (status, body) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "bob@example.com", "password": "wrong" }),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_message(&body, "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_email_matches_wrong_password() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/api/auth/login",
            None,
            json!({ "email": "nobody@example.com", "password": "whatever" }),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_message(&body, "Invalid credentials");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new();
    app.seed_user("dup@example.com", "one").await;

    let (status, body) = app
        .post(
            "/api/auth/register",
            None,
            json!({ "email": "dup@example.com", "password": "two" }),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_message(&body, "Email already registered");
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/api/auth/register",
            None,
            json!({ "email": "not-an-email", "password": "pw" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_message(&body, "Invalid email format");
}

#[tokio::test]
async fn test_gate_without_header() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/users", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_message(&body, "No token provided");
}

#[tokio::test]
async fn test_gate_with_non_bearer_scheme() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/products")
        .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_message(&body, "No token provided");
}

#[tokio::test]
async fn test_gate_with_forged_token() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/users", Some(&forged_token())).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_message(&body, "Invalid token");
}

#[tokio::test]
async fn test_gate_with_expired_token() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/products", Some(&expired_token())).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_message(&body, "Invalid token");
}

#[tokio::test]
async fn test_gate_with_garbage_token() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/users", Some("not.a.jwt")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_message(&body, "Invalid token");
}

#[tokio::test]
async fn test_gate_accepts_token_without_claims() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/products", Some(&bare_token())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_gate_accepts_other_hmac_algorithms() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/products", Some(&hs512_token())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_gate_covers_unknown_paths_under_protected_prefix() {
    let app = TestApp::new();

    for uri in ["/api/users/a/b", "/api/products/1/reviews", "/api/users/"] {
        let (status, body) = app.get(uri, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_message(&body, "No token provided");
    }

    let (status, body) = app.get("/api/users/a/b", Some(&forged_token())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_message(&body, "Invalid token");
}

#[tokio::test]
async fn test_unknown_paths_under_protected_prefix_with_token() {
    let app = TestApp::new();
    let user = app.seed_user("alice@example.com", "pw").await;

    let (status, body) = app.get("/api/users/a/b", Some(&user.token)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_message(&body, "Route not found");
}

#[tokio::test]
async fn test_unknown_method_under_protected_prefix() {
    let app = TestApp::new();
    let user = app.seed_user("alice@example.com", "pw").await;

    let (status, body) = app
        .request(Method::PATCH, "/api/users", None, Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_message(&body, "No token provided");

    let (status, body) = app
        .request(Method::PATCH, "/api/users", Some(&user.token), Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_message(&body, "Method not allowed");
}

#[tokio::test]
async fn test_malformed_login_body_is_json_error() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{bad"))
        .unwrap();

    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().expect("message is a string");
    assert!(message.starts_with("Failed to parse the request body as JSON"), "{message}");
}

#[tokio::test]
async fn test_login_without_content_type_is_json_error() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login")
        .body(Body::from(r#"{"email":"a@x.com","password":"p"}"#))
        .unwrap();

    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_message(&body, "Expected request with `Content-Type: application/json`");
}

#[tokio::test]
async fn test_gate_lets_valid_token_through() {
    let app = TestApp::new();
    let alice = app.seed_user("alice@example.com", "pw").await;

    let (status, body) = app.get("/api/users", Some(&alice.token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_public_routes_skip_gate() {
    let app = TestApp::new();

    let (status, body) = app.get("/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));

    let (status, body) = app
        .post(
            "/api/auth/login",
            Some("garbage"),
            json!({ "email": "x@example.com", "password": "pw" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_message(&body, "Invalid credentials");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/nothing-here", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_message(&body, "Route not found");
}
