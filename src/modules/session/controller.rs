use axum::Json;
use axum::extract::{Path, Query, State};
use fournil_core::UserRole;
use fournil_models::{
    LoginQuery, LoginRequest, LoginResponse, RoleCheckResponse, SessionResponse,
};
use fournil_observability::{track_login, track_logout};
use fournil_views::landing_route;
use tracing::instrument;
use utoipa::ToSchema;

use crate::state::AppState;
use crate::validator::LenientJson;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Open a session for the described operator
///
/// No credential is checked: the session records the supplied identity and
/// role. Missing fields default, the role to `boulanger`. An empty body, with
/// or without a JSON content type, signs in the default operator.
#[utoipa::path(
    post,
    path = "/api/session/login",
    params(LoginQuery),
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session opened", body = LoginResponse),
        (status = 400, description = "Body is not a login form", body = ErrorResponse)
    ),
    tag = "Session"
)]
#[instrument(skip(state))]
pub async fn login(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>,
    LenientJson(dto): LenientJson<LoginRequest>,
) -> Json<LoginResponse> {
    let session = state.sessions.login(dto.into());
    let role = session.role().cloned().unwrap_or_default();
    track_login(role.as_str());

    Json(LoginResponse {
        redirect_to: landing_route(role.known(), query.landing).to_string(),
        session: session.into(),
    })
}

/// Close the current session
#[utoipa::path(
    post,
    path = "/api/session/logout",
    responses(
        (status = 200, description = "Session cleared", body = SessionResponse)
    ),
    tag = "Session"
)]
#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.sessions.logout();
    track_logout();
    Json(session.into())
}

/// Current session
#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "Current session", body = SessionResponse)
    ),
    tag = "Session"
)]
#[instrument(skip(state))]
pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(state.sessions.current().into())
}

/// Whether the signed-in user holds `role`
///
/// Role names outside the known set are compared verbatim.
#[utoipa::path(
    get,
    path = "/api/session/roles/{role}",
    params(("role" = String, Path, description = "Role name, e.g. commercial")),
    responses(
        (status = 200, description = "Role check result", body = RoleCheckResponse)
    ),
    tag = "Session"
)]
#[instrument(skip(state))]
pub async fn check_role(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Json<RoleCheckResponse> {
    let role = UserRole::from(role);
    Json(RoleCheckResponse {
        has_role: state.sessions.has_role(role.clone()),
        role: role.to_string(),
    })
}
