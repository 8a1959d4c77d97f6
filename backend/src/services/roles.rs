//! Role resolution from the `user_roles` join.

use shared::{QueryOutcome, Role};
use uuid::Uuid;

use crate::directory::Directory;

/// Classify the user from their joined role names.
pub async fn resolve_role(directory: &dyn Directory, user_id: Uuid) -> QueryOutcome<Role> {
    match directory.role_names(user_id).await {
        Ok(names) => QueryOutcome::Found(Role::from_names(names)),
        Err(e) => QueryOutcome::Failed(format!("{:#}", e)),
    }
}

/// Resolved role, or the default `user` role when the lookup fails.
pub async fn role_or_default(directory: &dyn Directory, user_id: Uuid) -> Role {
    resolve_role(directory, user_id)
        .await
        .into_option_logged("Role resolution")
        .unwrap_or_default()
}
