use anyhow::anyhow;
use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use fournil_core::{AppError, HOME_PATH, LOGIN_PATH};
use fournil_models::{
    ChangePasswordDto, CreateOrderDto, MessageResponse, OrderAcknowledgement, PageView,
};
use fournil_views::{find_page, navigation};
use tracing::{info, instrument};

use crate::middleware::session::CurrentUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

fn page_title(path: &str) -> Option<&'static str> {
    match path {
        HOME_PATH => Some("Accueil"),
        LOGIN_PATH => Some("Connexion"),
        _ => find_page(path).map(|entry| entry.label),
    }
}

/// Render a back office page
///
/// Only reached once the route guard has admitted the session; denied
/// navigations are redirected before this runs.
#[utoipa::path(
    get,
    path = "/{segment}/{page}",
    params(
        ("segment" = String, Path, description = "Role segment, e.g. commercial"),
        ("page" = String, Path, description = "Page within the role, e.g. clients")
    ),
    responses(
        (status = 200, description = "Page rendered", body = PageView),
        (status = 303, description = "Redirected to the login page or the role home"),
        (status = 404, description = "No such page")
    ),
    tag = "Pages"
)]
#[instrument(skip(state))]
pub async fn render_page(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<PageView>, AppError> {
    let path = uri.path();
    let title =
        page_title(path).ok_or_else(|| AppError::not_found(anyhow!("Page not found: {}", path)))?;

    let session = state.sessions.current();
    let role = session.role();

    Ok(Json(PageView {
        path: path.to_string(),
        title: title.to_string(),
        role: role.map(ToString::to_string),
        navigation: navigation(role.and_then(|r| r.known())).to_vec(),
    }))
}

/// Submit a product order
///
/// Open to bakers and sales reps through their own segment. The order is
/// validated and acknowledged; nothing is stored.
#[utoipa::path(
    post,
    path = "/{segment}/commandes",
    params(("segment" = String, Path, description = "boulanger or commercial")),
    request_body = CreateOrderDto,
    responses(
        (status = 202, description = "Order accepted", body = OrderAcknowledgement),
        (status = 303, description = "Redirected to the login page or the role home"),
        (status = 422, description = "Select at least one product")
    ),
    tag = "Pages"
)]
#[instrument(skip_all, fields(role = %user.0.role))]
pub async fn submit_order(
    user: CurrentUser,
    ValidatedJson(dto): ValidatedJson<CreateOrderDto>,
) -> (StatusCode, Json<OrderAcknowledgement>) {
    let ack = OrderAcknowledgement::new(&dto, user.0.role.as_str());
    info!(
        reference = %ack.reference,
        lines = ack.line_count,
        total_quantity = ack.total_quantity,
        "Order received"
    );
    (StatusCode::ACCEPTED, Json(ack))
}

/// Change the operator's password
///
/// The new password is only checked against its confirmation.
#[utoipa::path(
    post,
    path = "/profile/password",
    request_body = ChangePasswordDto,
    responses(
        (status = 202, description = "Password change accepted", body = MessageResponse),
        (status = 303, description = "Redirected to the login page"),
        (status = 422, description = "Passwords do not match")
    ),
    tag = "Pages"
)]
#[instrument(skip_all, fields(email = %user.0.email))]
pub async fn change_password(
    user: CurrentUser,
    ValidatedJson(_payload): ValidatedJson<ChangePasswordDto>,
) -> (StatusCode, Json<MessageResponse>) {
    info!(user = %user.0.display_name(), "Password change accepted");
    (
        StatusCode::ACCEPTED,
        Json(MessageResponse {
            message: "Password updated".to_string(),
        }),
    )
}
