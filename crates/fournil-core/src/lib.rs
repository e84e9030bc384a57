//! # Fournil Core
//!
//! Core types shared by every Fournil crate:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`roles`]: The fixed operational role catalogue and its route table
//!
//! # Example
//!
//! ```ignore
//! use fournil_core::errors::AppError;
//! use fournil_core::roles::{Role, UserRole};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Page not found"));
//!
//! let role: UserRole = "commercial".into();
//! assert_eq!(role.home_path(), "/commercial/dashboard");
//! ```

pub mod errors;
pub mod roles;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use roles::{HOME_PATH, LOGIN_PATH, Role, UserRole};
