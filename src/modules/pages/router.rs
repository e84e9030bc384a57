use crate::state::AppState;
use axum::{Router, routing::get, routing::post};

use super::controller::{change_password, render_page, submit_order};

/// Page routes. The route guard is layered on by the caller.
pub fn init_pages_router() -> Router<AppState> {
    Router::new()
        .route("/", get(render_page))
        .route("/login", get(render_page))
        .route("/dashboard", get(render_page))
        .route("/profile", get(render_page))
        .route("/profile/password", post(change_password))
        .route("/boulanger/commandes", get(render_page).post(submit_order))
        .route("/commercial/commandes", get(render_page).post(submit_order))
        .route("/{segment}/{page}", get(render_page))
}
