//! Screen payloads built from the role view tables.

use fournil_views::{DashboardModule, NavEntry};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NavigationResponse {
    /// Role the entries were composed for; `None` when signed out.
    pub role: Option<String>,
    pub entries: Vec<NavEntry>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub role: Option<String>,
    pub modules: Vec<DashboardModule>,
}

/// What a guarded page renders once the guard lets the request through.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PageView {
    #[schema(example = "/commercial/clients")]
    pub path: String,
    #[schema(example = "Clients")]
    pub title: String,
    pub role: Option<String>,
    pub navigation: Vec<NavEntry>,
}
