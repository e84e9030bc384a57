use anyhow::anyhow;
use axum::{extract::FromRequestParts, http::request::Parts};
use fournil_auth::User;
use fournil_core::AppError;

use crate::state::AppState;

/// Extractor for the signed-in user.
///
/// Page routes are already behind the route guard; this covers the window
/// where a logout lands between the guard and the handler.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .sessions
            .current()
            .user()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| AppError::unauthorized(anyhow!("Not signed in")))
    }
}
