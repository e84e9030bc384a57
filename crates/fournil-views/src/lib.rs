//! # Fournil Views
//!
//! Role-scoped composition of the back office screens.
//!
//! - [`entries`]: Navigation entries and dashboard module descriptors
//! - [`composer`]: The role-keyed lookup of navigation, dashboard and landing routes
//!
//! Every known role has its own table; a missing or unrecognized role gets
//! the generic dashboard and profile pages.
//!
//! # Example
//!
//! ```ignore
//! use fournil_core::Role;
//! use fournil_views::{LandingTarget, landing_route, navigation};
//!
//! let entries = navigation(Some(Role::Commercial));
//! assert!(entries.iter().all(|e| e.path.starts_with("/commercial/")));
//!
//! assert_eq!(landing_route(None, LandingTarget::Catalog), "/dashboard");
//! ```

pub mod composer;
pub mod entries;

// Re-export commonly used types at crate root
pub use composer::{
    LandingTarget, RoleViews, dashboard_modules, find_page, landing_route, navigation, views_for,
};
pub use entries::{DashboardModule, NavEntry};
