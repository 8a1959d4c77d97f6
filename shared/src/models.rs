use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role name that grants access to the admin panel.
pub const ADMIN_ROLE_NAME: &str = "admin";

/// Authenticated identity as reported by the auth service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

/// Capability grouping a user is classified into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    /// Classify a user from the role names joined to their id.
    ///
    /// Any name equal to `"admin"` makes the user an admin; every other
    /// combination, including no rows at all, is a plain user.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if names
            .into_iter()
            .any(|name| name.as_ref() == ADMIN_ROLE_NAME)
        {
            Role::Admin
        } else {
            Role::User
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// One completed assessment, matching the `results` column order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "diesel", derive(diesel::Queryable))]
pub struct AssessmentResult {
    pub id: Uuid,
    pub user_id: Uuid,
    pub answers: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Session returned by an authorization-code exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub user: AuthUser,
}
