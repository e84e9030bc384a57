//! # Fournil Back Office
//!
//! The HTTP back end of a role-scoped back office for a supply-chain
//! coordination business: bakers, sales reps, supply, warehouse preparation
//! and maintenance each get their own pages.
//!
//! ## Overview
//!
//! - **Session**: one in-memory operator session, opened by a login that
//!   records who the operator says they are. No credential check, no token,
//!   nothing persisted.
//! - **Route guard**: every page navigation is checked against a static
//!   prefix table; denied navigations are redirected to `/login` or to the
//!   role's home page.
//! - **Views**: navigation entries, dashboard modules and landing routes
//!   composed per role.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── fournil-core/           # AppError, role catalogue
//! ├── fournil-config/         # Environment configuration
//! ├── fournil-auth/           # Session store, route guard
//! ├── fournil-views/          # Role-scoped view tables
//! ├── fournil-models/         # Request/response DTOs
//! └── fournil-observability/  # Logging, metrics
//! src/
//! ├── middleware/             # Route guard middleware, CurrentUser extractor
//! ├── modules/
//! │   ├── session/           # Login, logout, role checks
//! │   ├── views/             # Navigation, dashboard, guard checks
//! │   └── pages/             # Guarded pages and form submissions
//! ├── docs.rs                 # OpenAPI
//! ├── router.rs               # Main router
//! ├── state.rs                # Shared application state
//! └── validator.rs            # Validated JSON extractor
//! ```
//!
//! ## Roles
//!
//! | Role | Segment | Home |
//! |------|---------|------|
//! | Boulanger | `boulanger` | `/boulanger/dashboard` |
//! | Commercial | `commercial` | `/commercial/dashboard` |
//! | Approvisionnement | `approvisionnement` | `/approvisionnement/dashboard` |
//! | Préparation | `preparation` | `/preparation/dashboard` |
//! | Maintenance | `maintenance` | `/maintenance/dashboard` |
//!
//! A role name outside this table is kept as-is and sees the generic
//! dashboard and profile pages.
//!
//! ## Quick Start
//!
//! ```bash
//! HOST=127.0.0.1 PORT=3000 cargo run
//! curl -X POST localhost:3000/api/session/login \
//!      -H 'content-type: application/json' \
//!      -d '{"email":"a@b.fr","role":"commercial"}'
//! curl -i localhost:3000/boulanger/commandes   # 303 -> /commercial/dashboard
//! ```
//!
//! API documentation is served at `/swagger-ui` and `/scalar`.

pub mod docs;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use fournil_auth;
pub use fournil_config;
pub use fournil_core;
pub use fournil_models;
pub use fournil_views;
