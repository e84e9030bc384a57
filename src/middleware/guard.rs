//! Route guard middleware for Axum.
//!
//! # Usage with axum::middleware::from_fn_with_state
//!
//! ```rust,ignore
//! use axum::{Router, middleware, routing::get};
//! use crate::middleware::guard::route_guard;
//!
//! let pages = Router::new()
//!     .route("/{segment}/{page}", get(render_page))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), route_guard));
//! ```

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use fournil_observability::track_guard_decision;
use tracing::debug;

use crate::state::AppState;

/// Runs the inner handler when the route table admits the current session,
/// otherwise redirects. Denials are silent: no error body.
pub async fn route_guard(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let session = state.sessions.current();
    let decision = state.routes.authorize(req.uri().path(), &session);
    track_guard_decision(decision.outcome());

    match decision.location() {
        None => next.run(req).await,
        Some(location) => {
            debug!(
                path = %req.uri().path(),
                outcome = decision.outcome(),
                location,
                "Navigation redirected"
            );
            Redirect::to(location).into_response()
        }
    }
}
