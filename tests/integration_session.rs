mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{body_json, get, login_as, post_json, send, setup_test_app};
use fournil_core::Role;
use serde_json::json;

#[tokio::test]
async fn test_new_session_is_anonymous() {
    let (app, _) = setup_test_app();

    let response = send(&app, get("/api/session")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["is_authenticated"], false);
    assert!(body["user"].is_null());
}

#[tokio::test]
async fn test_login_opens_session_and_redirects_to_role_dashboard() {
    let (app, state) = setup_test_app();

    let body = login_as(&app, "commercial").await;

    assert_eq!(body["session"]["is_authenticated"], true);
    assert_eq!(body["session"]["user"]["email"], "a@b.fr");
    assert_eq!(body["session"]["user"]["role"], "commercial");
    assert_eq!(body["redirect_to"], "/commercial/dashboard");
    assert!(state.sessions.has_role(Role::Commercial));
}

#[tokio::test]
async fn test_login_with_catalog_landing() {
    let (app, _) = setup_test_app();

    let response = send(
        &app,
        post_json(
            "/api/session/login?landing=catalog",
            json!({ "email": "pain@fournil.fr", "role": "boulanger" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["redirect_to"], "/boulanger/catalogue");

    let response = send(
        &app,
        post_json(
            "/api/session/login?landing=catalog",
            json!({ "role": "maintenance" }),
        ),
    )
    .await;
    assert_eq!(body_json(response).await["redirect_to"], "/maintenance/dashboard");
}

#[tokio::test]
async fn test_login_without_role_uses_first_role() {
    let (app, state) = setup_test_app();

    let response = send(&app, post_json("/api/session/login", json!({}))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["session"]["user"]["role"], "boulanger");
    assert_eq!(body["session"]["user"]["email"], "");
    assert!(state.sessions.has_role(Role::Boulanger));
}

#[tokio::test]
async fn test_login_with_unknown_role_uses_generic_landing() {
    let (app, _) = setup_test_app();

    let body = login_as(&app, "meunier").await;
    assert_eq!(body["session"]["user"]["role"], "meunier");
    assert_eq!(body["redirect_to"], "/dashboard");
}

#[tokio::test]
async fn test_login_accepts_free_text_email() {
    let (app, state) = setup_test_app();

    let response = send(
        &app,
        post_json(
            "/api/session/login",
            json!({ "email": "jeanne", "role": "commercial" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["session"]["user"]["email"], "jeanne");
    assert_eq!(body["redirect_to"], "/commercial/dashboard");
    assert!(state.sessions.has_role(Role::Commercial));
}

#[tokio::test]
async fn test_login_without_body_signs_in_default_role() {
    let (app, state) = setup_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/session/login")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["session"]["is_authenticated"], true);
    assert_eq!(body["session"]["user"]["role"], "boulanger");
    assert_eq!(body["redirect_to"], "/boulanger/dashboard");
    assert!(state.sessions.has_role(Role::Boulanger));
}

#[tokio::test]
async fn test_login_with_blank_json_body_signs_in_default_role() {
    let (app, state) = setup_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/session/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("  "))
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(state.sessions.has_role(Role::Boulanger));
}

#[tokio::test]
async fn test_login_rejects_body_that_is_not_a_form() {
    let (app, state) = setup_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/api/session/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!state.sessions.current().is_authenticated());
}

#[tokio::test]
async fn test_logout_clears_session() {
    let (app, state) = setup_test_app();
    login_as(&app, "preparation").await;

    let response = send(&app, post_json("/api/session/logout", json!({}))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["is_authenticated"], false);
    assert!(body["user"].is_null());
    for role in Role::ALL {
        assert!(!state.sessions.has_role(role));
    }
}

#[tokio::test]
async fn test_role_check_endpoint() {
    let (app, _) = setup_test_app();

    let body = body_json(send(&app, get("/api/session/roles/commercial")).await).await;
    assert_eq!(body["has_role"], false);

    login_as(&app, "commercial").await;

    let body = body_json(send(&app, get("/api/session/roles/commercial")).await).await;
    assert_eq!(body["role"], "commercial");
    assert_eq!(body["has_role"], true);

    let body = body_json(send(&app, get("/api/session/roles/boulanger")).await).await;
    assert_eq!(body["has_role"], false);

    let body = body_json(send(&app, get("/api/session/roles/inconnu")).await).await;
    assert_eq!(body["has_role"], false);
}
