use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{check_role, get_session, login, logout};

pub fn init_session_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_session))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/roles/{role}", get(check_role))
}
