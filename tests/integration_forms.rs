mod common;

use axum::http::StatusCode;
use common::{body_json, location, login_as, post_json, send, setup_test_app};
use serde_json::json;

#[tokio::test]
async fn test_order_without_products_is_rejected() {
    let (app, _) = setup_test_app();
    login_as(&app, "boulanger").await;

    let response = send(&app, post_json("/boulanger/commandes", json!({ "lines": [] }))).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["error"], "Select at least one product");
}

#[tokio::test]
async fn test_order_with_zero_quantity_is_rejected() {
    let (app, _) = setup_test_app();
    login_as(&app, "boulanger").await;

    let response = send(
        &app,
        post_json(
            "/boulanger/commandes",
            json!({ "lines": [{ "product": "Farine T65", "quantity": 0 }] }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["error"], "Quantities must be at least 1");
}

#[tokio::test]
async fn test_order_is_acknowledged() {
    let (app, _) = setup_test_app();
    login_as(&app, "commercial").await;

    let response = send(
        &app,
        post_json(
            "/commercial/commandes",
            json!({
                "client": "Boulangerie du Port",
                "lines": [
                    { "product": "Farine T65", "quantity": 20 },
                    { "product": "Farine de seigle", "quantity": 5 }
                ]
            }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let body = body_json(response).await;
    assert_eq!(body["placed_by_role"], "commercial");
    assert_eq!(body["client"], "Boulangerie du Port");
    assert_eq!(body["line_count"], 2);
    assert_eq!(body["total_quantity"], 25);
    assert!(body["reference"].is_string());
}

#[tokio::test]
async fn test_order_requires_lines_field() {
    let (app, _) = setup_test_app();
    login_as(&app, "boulanger").await;

    let response = send(&app, post_json("/boulanger/commandes", json!({}))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "lines is required");
}

#[tokio::test]
async fn test_order_from_other_segment_is_redirected() {
    let (app, _) = setup_test_app();
    login_as(&app, "preparation").await;

    let response = send(
        &app,
        post_json(
            "/boulanger/commandes",
            json!({ "lines": [{ "product": "Farine T65", "quantity": 1 }] }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/preparation/dashboard"));
}

#[tokio::test]
async fn test_password_confirmation_must_match() {
    let (app, _) = setup_test_app();
    login_as(&app, "maintenance").await;

    let response = send(
        &app,
        post_json(
            "/profile/password",
            json!({
                "current_password": "ancien",
                "new_password": "nouveau-secret",
                "confirm_password": "autre-secret"
            }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["error"], "Passwords do not match");
}

#[tokio::test]
async fn test_password_change_is_accepted() {
    let (app, _) = setup_test_app();
    login_as(&app, "maintenance").await;

    let response = send(
        &app,
        post_json(
            "/profile/password",
            json!({
                "current_password": "ancien",
                "new_password": "nouveau-secret",
                "confirm_password": "nouveau-secret"
            }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(body_json(response).await["message"], "Password updated");
}

#[tokio::test]
async fn test_password_change_needs_a_session() {
    let (app, _) = setup_test_app();

    let response = send(
        &app,
        post_json(
            "/profile/password",
            json!({
                "current_password": "ancien",
                "new_password": "nouveau-secret",
                "confirm_password": "nouveau-secret"
            }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/login"));
}
