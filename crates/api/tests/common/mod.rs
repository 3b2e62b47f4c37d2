#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tower::ServiceExt;

use doctors_api::config::ServerConfig;
use doctors_api::router::build_app_router;
use doctors_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
    }
}

/// Open the per-test database handed out by `#[sqlx::test]` with the
/// service's connection settings and create the schema.
pub async fn test_pool(
    pool_opts: SqlitePoolOptions,
    connect_opts: SqliteConnectOptions,
) -> SqlitePool {
    let pool = doctors_db::connect_with(pool_opts, connect_opts)
        .await
        .unwrap();
    doctors_db::init_schema(&pool).await.unwrap();
    pool
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a doctor through the API and return its id.
pub async fn create_doctor(pool: &SqlitePool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/doctors",
        serde_json::json!({"doctor": {"name": name}}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a review through the API and return its id.
pub async fn create_review(pool: &SqlitePool, doctor_id: i64, description: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/doctors/{doctor_id}/reviews"),
        serde_json::json!({"review": {"description": description}}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}
