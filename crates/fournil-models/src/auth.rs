//! Session endpoint payloads.

use fournil_auth::{GuardDecision, LoginData, Session, User};
use fournil_views::LandingTarget;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Login form. Every field is optional and taken as given.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    #[schema(example = "a@b.fr")]
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// One of `boulanger`, `commercial`, `approvisionnement`, `preparation`,
    /// `maintenance`. Defaults to `boulanger`.
    #[schema(example = "commercial")]
    pub role: Option<String>,
}

impl From<LoginRequest> for LoginData {
    fn from(dto: LoginRequest) -> Self {
        LoginData {
            email: dto.email,
            first_name: dto.first_name,
            last_name: dto.last_name,
            role: dto.role,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LoginQuery {
    /// `dashboard` (default) or `catalog`.
    #[serde(default)]
    #[param(value_type = Option<String>)]
    pub landing: LandingTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SessionResponse {
    pub is_authenticated: bool,
    pub user: Option<User>,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            is_authenticated: session.is_authenticated(),
            user: session.user().cloned(),
        }
    }
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        SessionResponse::from(&session)
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub session: SessionResponse,
    #[schema(example = "/commercial/dashboard")]
    pub redirect_to: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RoleCheckResponse {
    pub role: String,
    pub has_role: bool,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GuardQuery {
    /// Path the front end is about to navigate to.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct GuardResponse {
    pub path: String,
    /// `allow`, `redirect_to_login` or `redirect_to_role_home`.
    pub outcome: String,
    pub location: Option<String>,
}

impl GuardResponse {
    pub fn new(path: impl Into<String>, decision: GuardDecision) -> Self {
        Self {
            path: path.into(),
            outcome: decision.outcome().to_string(),
            location: decision.location().map(str::to_string),
        }
    }
}
