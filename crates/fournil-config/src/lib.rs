//! # Fournil Config
//!
//! Configuration types for the Fournil back office.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: Listen address of the HTTP server
//!
//! # Example
//!
//! ```ignore
//! use fournil_config::{CorsConfig, ServerConfig};
//!
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! println!("listening on {}", server_config.bind_address());
//! ```

pub mod cors;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use server::ServerConfig;
