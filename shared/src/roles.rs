//! Client-side role resolution state.

use crate::models::Role;
use crate::outcome::QueryOutcome;

/// Role of the current user plus whether resolution is still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleState {
    pub role: Role,
    pub loading: bool,
}

impl Default for RoleState {
    fn default() -> Self {
        Self {
            role: Role::User,
            loading: true,
        }
    }
}

impl RoleState {
    /// Apply the result of a resolution attempt.
    ///
    /// A failed lookup keeps the last known role; every outcome ends loading.
    pub fn settle(&mut self, outcome: QueryOutcome<Role>) {
        match outcome {
            QueryOutcome::Found(role) => self.role = role,
            QueryOutcome::Empty => self.role = Role::User,
            QueryOutcome::Failed(cause) => {
                tracing::warn!("Role resolution failed, keeping {:?}: {}", self.role, cause);
            }
        }
        self.loading = false;
    }

    /// Settled state for a visitor without a session.
    pub fn anonymous() -> Self {
        Self {
            role: Role::User,
            loading: false,
        }
    }

    pub fn is_admin(&self) -> bool {
        !self.loading && self.role.is_admin()
    }
}
