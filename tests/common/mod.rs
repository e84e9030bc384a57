#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use fournil::router::init_router;
use fournil::state::AppState;
use fournil_config::CorsConfig;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Router plus a handle on its state, so tests can inspect the session.
pub fn setup_test_app() -> (Router, AppState) {
    let state = AppState::new(CorsConfig::default());
    (init_router(state.clone()), state)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

pub async fn login_as(app: &Router, role: &str) -> Value {
    let response = send(
        app,
        post_json(
            "/api/session/login",
            serde_json::json!({ "email": "a@b.fr", "role": role }),
        ),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await
}
