use axum::Json;
use axum::extract::{Query, State};
use fournil_models::{DashboardResponse, GuardQuery, GuardResponse, NavigationResponse};
use fournil_views::{dashboard_modules, navigation};
use tracing::instrument;

use crate::state::AppState;

/// Navigation entries for the current role
///
/// Signed-out sessions and unrecognized roles get the generic entries.
#[utoipa::path(
    get,
    path = "/api/views/navigation",
    responses(
        (status = 200, description = "Navigation entries", body = NavigationResponse)
    ),
    tag = "Views"
)]
#[instrument(skip(state))]
pub async fn get_navigation(State(state): State<AppState>) -> Json<NavigationResponse> {
    let session = state.sessions.current();
    let role = session.role();

    Json(NavigationResponse {
        role: role.map(ToString::to_string),
        entries: navigation(role.and_then(|r| r.known())).to_vec(),
    })
}

/// Dashboard modules for the current role
#[utoipa::path(
    get,
    path = "/api/views/dashboard",
    responses(
        (status = 200, description = "Dashboard modules", body = DashboardResponse)
    ),
    tag = "Views"
)]
#[instrument(skip(state))]
pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let session = state.sessions.current();
    let role = session.role();

    Json(DashboardResponse {
        role: role.map(ToString::to_string),
        modules: dashboard_modules(role.and_then(|r| r.known())).to_vec(),
    })
}

/// Guard decision for a path, without navigating
#[utoipa::path(
    get,
    path = "/api/guard",
    params(GuardQuery),
    responses(
        (status = 200, description = "Guard decision", body = GuardResponse)
    ),
    tag = "Views"
)]
#[instrument(skip(state))]
pub async fn check_guard(
    State(state): State<AppState>,
    Query(query): Query<GuardQuery>,
) -> Json<GuardResponse> {
    let decision = state.routes.authorize(&query.path, &state.sessions.current());
    Json(GuardResponse::new(query.path, decision))
}
