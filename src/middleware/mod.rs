//! Middleware modules for request processing.
//!
//! # Modules
//!
//! - [`guard`]: Route guard applied to every page route
//! - [`session`]: Extractor for the signed-in user
//!
//! # Navigation Flow
//!
//! 1. The browser navigates to a page, e.g. `/boulanger/commandes`
//! 2. [`guard::route_guard`] looks up the path in the route table and
//!    evaluates it against the current session
//! 3. Allowed requests reach the page handler; anything else gets a
//!    `303 See Other` to `/login` or to the role's home page

pub mod guard;
pub mod session;
