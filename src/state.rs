use std::sync::Arc;

use fournil_auth::{RouteAuthorization, SessionStore};
use fournil_config::CorsConfig;

/// Shared application state.
///
/// The session store is created here, once, and handed to every handler;
/// there is no global session.
#[derive(Clone, Debug)]
pub struct AppState {
    pub sessions: SessionStore,
    pub routes: Arc<RouteAuthorization>,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(cors_config: CorsConfig) -> Self {
        Self {
            sessions: SessionStore::new(),
            routes: Arc::new(RouteAuthorization::default()),
            cors_config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(CorsConfig::from_env())
    }
}
