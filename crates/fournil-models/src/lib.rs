//! # Fournil Models
//!
//! Request and response DTOs for the Fournil back office.
//!
//! # Modules
//!
//! - [`auth`]: Session endpoints (login, logout, role checks, guard checks)
//! - [`forms`]: The form submissions the back office validates
//! - [`views`]: Navigation, dashboard and page payloads

pub mod auth;
pub mod forms;
pub mod views;

// Re-export commonly used types at crate root for convenience
pub use auth::{
    GuardQuery, GuardResponse, LoginQuery, LoginRequest, LoginResponse, RoleCheckResponse,
    SessionResponse,
};
pub use forms::{
    ChangePasswordDto, CreateOrderDto, MessageResponse, OrderAcknowledgement, OrderLine,
};
pub use views::{DashboardResponse, NavigationResponse, PageView};
