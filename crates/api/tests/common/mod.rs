#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use taskdesk_api::config::ServerConfig;
use taskdesk_api::router::build_app_router;
use taskdesk_api::state::AppState;
use taskdesk_db::Store;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over `store`, with the same middleware
/// stack production uses.
pub fn build_test_app(store: Store) -> Router {
    build_app_router(AppState { store }, &test_config())
}

/// Router over an empty store.
pub fn empty_app() -> Router {
    build_test_app(Store::new())
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create a user through the API and return its id.
pub async fn create_user(app: &Router, username: &str, email: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/users",
        serde_json::json!({ "username": username, "email": email }),
    )
    .await;
    assert_eq!(response.status(), 201, "user creation failed");
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create a task through the API and return its id.
pub async fn create_task(app: &Router, user_id: i64, title: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/tasks",
        serde_json::json!({ "title": title, "user_id": user_id }),
    )
    .await;
    assert_eq!(response.status(), 201, "task creation failed");
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
