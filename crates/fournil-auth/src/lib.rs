//! # Fournil Auth
//!
//! Session handling and navigation gating for the Fournil back office.
//!
//! - [`session`]: The [`User`] and [`Session`] values
//! - [`store`]: The injected [`SessionStore`] with login/logout notifications
//! - [`guard`]: The [`guard`](guard::guard) decision and the [`RouteAuthorization`] table
//!
//! There is no credential check and no token: a login records who the
//! operator says they are, in process memory only.
//!
//! # Example
//!
//! ```ignore
//! use fournil_auth::{GuardDecision, LoginData, RouteAuthorization, SessionStore};
//!
//! let store = SessionStore::new();
//! store.login(LoginData {
//!     email: Some("a@b.fr".to_string()),
//!     role: Some("commercial".to_string()),
//!     ..LoginData::default()
//! });
//!
//! let decision = RouteAuthorization::default()
//!     .authorize("/boulanger/commandes", &store.current());
//! assert_eq!(decision, GuardDecision::RedirectToRoleHome("/commercial/dashboard"));
//! ```

pub mod guard;
pub mod session;
pub mod store;

// Re-export commonly used types at crate root
pub use guard::{GuardDecision, RouteAuthorization, RouteRule, guard};
pub use session::{LoginData, Session, User};
pub use store::SessionStore;
