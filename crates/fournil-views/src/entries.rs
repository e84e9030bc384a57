use serde::Serialize;
use utoipa::ToSchema;

/// A link in the side navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct NavEntry {
    #[schema(value_type = String, example = "Commandes")]
    pub label: &'static str,
    /// Icon name from the front end's icon set.
    #[schema(value_type = String, example = "shopping-cart")]
    pub icon: &'static str,
    #[schema(value_type = String, example = "/boulanger/commandes")]
    pub path: &'static str,
}

impl NavEntry {
    pub const fn new(label: &'static str, icon: &'static str, path: &'static str) -> Self {
        Self { label, icon, path }
    }
}

/// A tile on the role dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct DashboardModule {
    #[schema(value_type = String)]
    pub label: &'static str,
    #[schema(value_type = String)]
    pub icon: &'static str,
    #[schema(value_type = String)]
    pub path: &'static str,
    #[schema(value_type = String)]
    pub description: &'static str,
}

impl DashboardModule {
    pub const fn new(
        label: &'static str,
        icon: &'static str,
        path: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            label,
            icon,
            path,
            description,
        }
    }
}
