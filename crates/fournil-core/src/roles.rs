//! Operational roles of the back office.
//!
//! The role set is closed: every view table and route rule is keyed by
//! [`Role`] and matched exhaustively. A user may still carry a role name
//! outside that set (the login form accepts free text), which is kept as
//! [`UserRole::Unrecognized`] and routed to the generic pages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Route every unauthenticated navigation lands on.
pub const LOGIN_PATH: &str = "/login";
/// Fallback home for roles with no configured landing page.
pub const HOME_PATH: &str = "/";

/// One of the five operational job functions.
///
/// Declaration order matters: the first variant is the role assigned when a
/// login omits one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Baker ordering flour and following deliveries.
    Boulanger,
    /// Sales, manages client accounts and orders.
    Commercial,
    /// Supply, sources from millers and plans transport.
    Approvisionnement,
    /// Warehouse preparation and shipping.
    Preparation,
    /// Equipment maintenance.
    Maintenance,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Boulanger,
        Role::Commercial,
        Role::Approvisionnement,
        Role::Preparation,
        Role::Maintenance,
    ];

    /// The role assigned when none is supplied.
    pub const fn default_role() -> Role {
        Role::ALL[0]
    }

    /// Path segment under which the role's pages live.
    pub const fn segment(self) -> &'static str {
        match self {
            Role::Boulanger => "boulanger",
            Role::Commercial => "commercial",
            Role::Approvisionnement => "approvisionnement",
            Role::Preparation => "preparation",
            Role::Maintenance => "maintenance",
        }
    }

    /// Landing page used when the role is turned away from another page.
    pub const fn home_path(self) -> &'static str {
        match self {
            Role::Boulanger => "/boulanger/dashboard",
            Role::Commercial => "/commercial/dashboard",
            Role::Approvisionnement => "/approvisionnement/dashboard",
            Role::Preparation => "/preparation/dashboard",
            Role::Maintenance => "/maintenance/dashboard",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Role::Boulanger => "Boulanger",
            Role::Commercial => "Commercial",
            Role::Approvisionnement => "Approvisionnement",
            Role::Preparation => "Préparation",
            Role::Maintenance => "Maintenance",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.segment() == segment)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::from_segment(s.trim()).ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// The role a signed-in user carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    Known(Role),
    /// Free-text role with no configuration; kept verbatim.
    Unrecognized(String),
}

impl UserRole {
    pub fn known(&self) -> Option<Role> {
        match self {
            UserRole::Known(role) => Some(*role),
            UserRole::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Known(role) => role.segment(),
            UserRole::Unrecognized(name) => name,
        }
    }

    /// Role home, or [`HOME_PATH`] for an unrecognized role.
    pub fn home_path(&self) -> &'static str {
        self.known().map(Role::home_path).unwrap_or(HOME_PATH)
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Known(Role::default_role())
    }
}

impl From<Role> for UserRole {
    fn from(role: Role) -> Self {
        UserRole::Known(role)
    }
}

impl From<&str> for UserRole {
    fn from(name: &str) -> Self {
        match name.parse::<Role>() {
            Ok(role) => UserRole::Known(role),
            Err(_) => UserRole::Unrecognized(name.to_string()),
        }
    }
}

impl From<String> for UserRole {
    fn from(name: String) -> Self {
        match name.parse::<Role>() {
            Ok(role) => UserRole::Known(role),
            Err(_) => UserRole::Unrecognized(name),
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Known(role) => role.segment().to_string(),
            UserRole::Unrecognized(name) => name,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
