//! Auth domain model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UserRole {
    Admin,
    User,
    Analyst,
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Lifecycle of the auth session.
///
/// `Loading` only exists until the initial session check completes; after
/// that the store moves between `Unauthenticated` and `Authenticated`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Loading,
    Unauthenticated,
    Authenticated(User),
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Read accessor snapshot handed to the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthView {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}
