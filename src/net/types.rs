//! Wire DTOs for the auth endpoints.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON exactly so serde round-trips stay
//! lossless; the persisted `user` record reuses [`Role`] from here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::routes::RouteName;

/// Account tier as issued by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[default]
    User,
    Teacher,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::User, Role::Teacher, Role::Admin];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Teacher => "Teacher",
            Role::Admin => "Admin",
        }
    }

    /// Parse a role label as submitted by a form. Unknown labels yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == raw.trim())
    }

    /// Dashboard the user lands on after signing in.
    #[must_use]
    pub fn dashboard_route(self) -> RouteName {
        match self {
            Role::User => RouteName::UserDashboard,
            Role::Teacher => RouteName::TeacherDashboard,
            Role::Admin => RouteName::AdminDashboard,
        }
    }

    /// Whether this tier may author courses.
    #[must_use]
    pub fn can_author(self) -> bool {
        matches!(self, Role::Teacher | Role::Admin)
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Successful response of both auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Error body shape returned by the backend on rejected requests.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
