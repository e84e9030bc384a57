//! Session and user values.
//!
//! A [`Session`] either holds a [`User`] or nothing. Authentication is
//! derived from the presence of the user, so the two can never disagree.

use fournil_core::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fields a login may supply. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoginData {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<String>,
}

/// The signed-in operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[schema(value_type = String, example = "commercial")]
    pub role: UserRole,
}

impl User {
    /// Builds a user, filling omitted fields with empty strings and the
    /// default role.
    pub fn from_login(data: LoginData) -> Self {
        let role = data
            .role
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .map(UserRole::from)
            .unwrap_or_default();

        Self {
            email: data.email.unwrap_or_default(),
            first_name: data.first_name.unwrap_or_default(),
            last_name: data.last_name.unwrap_or_default(),
            role,
        }
    }

    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn role(&self) -> Option<&UserRole> {
        self.user.as_ref().map(|user| &user.role)
    }

    /// False for an anonymous session.
    pub fn has_role(&self, role: &UserRole) -> bool {
        self.role() == Some(role)
    }
}
