use crate::state::AppState;
use axum::{Router, routing::get};

use super::controller::{get_dashboard, get_navigation};

pub fn init_views_router() -> Router<AppState> {
    Router::new()
        .route("/navigation", get(get_navigation))
        .route("/dashboard", get(get_dashboard))
}
