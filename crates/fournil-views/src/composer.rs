//! Role-keyed screen composition.
//!
//! Each [`Role`] maps to one static [`RoleViews`] through an exhaustive
//! `match`, so adding a role without its views does not compile.

use fournil_core::Role;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::entries::{DashboardModule, NavEntry};

/// Everything the front end needs to lay out screens for one role.
#[derive(Debug)]
pub struct RoleViews {
    pub navigation: &'static [NavEntry],
    pub dashboard: &'static [DashboardModule],
    pub home: &'static str,
    /// Product catalogue, for the roles that order or sell products.
    pub catalog: Option<&'static str>,
}

/// Where a fresh login is sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LandingTarget {
    #[default]
    Dashboard,
    Catalog,
}

static BOULANGER: RoleViews = RoleViews {
    navigation: &[
        NavEntry::new("Tableau de bord", "layout-dashboard", "/boulanger/dashboard"),
        NavEntry::new("Catalogue", "wheat", "/boulanger/catalogue"),
        NavEntry::new("Commandes", "shopping-cart", "/boulanger/commandes"),
        NavEntry::new("Livraisons", "truck", "/boulanger/livraisons"),
        NavEntry::new("Profil", "user", "/boulanger/profil"),
    ],
    dashboard: &[
        DashboardModule::new(
            "Catalogue",
            "wheat",
            "/boulanger/catalogue",
            "Farines et produits disponibles",
        ),
        DashboardModule::new(
            "Commandes",
            "shopping-cart",
            "/boulanger/commandes",
            "Passer et suivre vos commandes",
        ),
        DashboardModule::new(
            "Livraisons",
            "truck",
            "/boulanger/livraisons",
            "Créneaux et suivi de livraison",
        ),
    ],
    home: Role::Boulanger.home_path(),
    catalog: Some("/boulanger/catalogue"),
};

static COMMERCIAL: RoleViews = RoleViews {
    navigation: &[
        NavEntry::new("Tableau de bord", "layout-dashboard", "/commercial/dashboard"),
        NavEntry::new("Clients", "users", "/commercial/clients"),
        NavEntry::new("Catalogue", "book-open", "/commercial/catalogue"),
        NavEntry::new("Commandes", "clipboard-list", "/commercial/commandes"),
        NavEntry::new("Profil", "user", "/commercial/profil"),
    ],
    dashboard: &[
        DashboardModule::new(
            "Clients",
            "users",
            "/commercial/clients",
            "Portefeuille de boulangeries",
        ),
        DashboardModule::new(
            "Catalogue",
            "book-open",
            "/commercial/catalogue",
            "Produits et tarifs",
        ),
        DashboardModule::new(
            "Commandes",
            "clipboard-list",
            "/commercial/commandes",
            "Saisie de commandes pour vos clients",
        ),
    ],
    home: Role::Commercial.home_path(),
    catalog: Some("/commercial/catalogue"),
};

static APPROVISIONNEMENT: RoleViews = RoleViews {
    navigation: &[
        NavEntry::new(
            "Tableau de bord",
            "layout-dashboard",
            "/approvisionnement/dashboard",
        ),
        NavEntry::new("Meuniers", "factory", "/approvisionnement/meuniers"),
        NavEntry::new("Stocks", "package", "/approvisionnement/stocks"),
        NavEntry::new("Transports", "truck", "/approvisionnement/transports"),
        NavEntry::new("Profil", "user", "/approvisionnement/profil"),
    ],
    dashboard: &[
        DashboardModule::new(
            "Meuniers",
            "factory",
            "/approvisionnement/meuniers",
            "Moulins partenaires et contrats",
        ),
        DashboardModule::new(
            "Stocks",
            "package",
            "/approvisionnement/stocks",
            "Niveaux de stock par entrepôt",
        ),
        DashboardModule::new(
            "Transports",
            "truck",
            "/approvisionnement/transports",
            "Planification des enlèvements",
        ),
    ],
    home: Role::Approvisionnement.home_path(),
    catalog: None,
};

static PREPARATION: RoleViews = RoleViews {
    navigation: &[
        NavEntry::new("Tableau de bord", "layout-dashboard", "/preparation/dashboard"),
        NavEntry::new("Préparations", "clipboard-check", "/preparation/preparations"),
        NavEntry::new("Expéditions", "send", "/preparation/expeditions"),
        NavEntry::new("Profil", "user", "/preparation/profil"),
    ],
    dashboard: &[
        DashboardModule::new(
            "Préparations",
            "clipboard-check",
            "/preparation/preparations",
            "Commandes à préparer",
        ),
        DashboardModule::new(
            "Expéditions",
            "send",
            "/preparation/expeditions",
            "Chargements du jour",
        ),
    ],
    home: Role::Preparation.home_path(),
    catalog: None,
};

static MAINTENANCE: RoleViews = RoleViews {
    navigation: &[
        NavEntry::new("Tableau de bord", "layout-dashboard", "/maintenance/dashboard"),
        NavEntry::new("Interventions", "wrench", "/maintenance/interventions"),
        NavEntry::new("Équipements", "cog", "/maintenance/equipements"),
        NavEntry::new("Profil", "user", "/maintenance/profil"),
    ],
    dashboard: &[
        DashboardModule::new(
            "Interventions",
            "wrench",
            "/maintenance/interventions",
            "Demandes ouvertes et planning",
        ),
        DashboardModule::new(
            "Équipements",
            "cog",
            "/maintenance/equipements",
            "Parc de fours et pétrins",
        ),
    ],
    home: Role::Maintenance.home_path(),
    catalog: None,
};

static GENERIC: RoleViews = RoleViews {
    navigation: &[
        NavEntry::new("Tableau de bord", "layout-dashboard", "/dashboard"),
        NavEntry::new("Profil", "user", "/profile"),
    ],
    dashboard: &[
        DashboardModule::new(
            "Tableau de bord",
            "layout-dashboard",
            "/dashboard",
            "Vue d'ensemble",
        ),
        DashboardModule::new("Profil", "user", "/profile", "Vos informations"),
    ],
    home: "/dashboard",
    catalog: None,
};

/// Views for `role`, or the generic set when there is none.
pub fn views_for(role: Option<Role>) -> &'static RoleViews {
    match role {
        Some(Role::Boulanger) => &BOULANGER,
        Some(Role::Commercial) => &COMMERCIAL,
        Some(Role::Approvisionnement) => &APPROVISIONNEMENT,
        Some(Role::Preparation) => &PREPARATION,
        Some(Role::Maintenance) => &MAINTENANCE,
        None => &GENERIC,
    }
}

pub fn navigation(role: Option<Role>) -> &'static [NavEntry] {
    views_for(role).navigation
}

pub fn dashboard_modules(role: Option<Role>) -> &'static [DashboardModule] {
    views_for(role).dashboard
}

/// Post-login redirect. Roles without a catalogue land on their dashboard.
pub fn landing_route(role: Option<Role>, target: LandingTarget) -> &'static str {
    let views = views_for(role);
    match target {
        LandingTarget::Dashboard => views.home,
        LandingTarget::Catalog => views.catalog.unwrap_or(views.home),
    }
}

/// Navigation entry whose path is exactly `path`, across every role.
pub fn find_page(path: &str) -> Option<&'static NavEntry> {
    Role::ALL
        .into_iter()
        .map(Some)
        .chain(std::iter::once(None))
        .flat_map(navigation)
        .find(|entry| entry.path == path)
}
