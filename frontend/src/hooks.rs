//! Session state shared by pages that depend on who is signed in.

use shared::roles::RoleState;
use shared::{AuthUser, QueryOutcome};
use yew::prelude::*;

use crate::services::api::ApiService;
use crate::services::storage::token_storage;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub user: Option<AuthUser>,
    pub role: RoleState,
    pub has_completed_assessment: bool,
}

/// Load the current session once per mount.
///
/// Starts from the locally stored user so the first render is not blank;
/// the role stays loading until the backend answers.
#[hook]
pub fn use_session() -> SessionView {
    let user = use_state(|| token_storage().get_auth_user::<AuthUser>());
    let role = use_state(RoleState::default);
    let completed = use_state(|| false);

    {
        let user = user.clone();
        let role = role.clone();
        let completed = completed.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let mut next = *role;
                match ApiService::me().await {
                    Ok(me) => {
                        let storage = token_storage();
                        match &me.user {
                            Some(current) => storage.set_auth_user(current),
                            None => storage.clear(),
                        }
                        let outcome = if me.user.is_some() {
                            QueryOutcome::Found(me.role)
                        } else {
                            QueryOutcome::Empty
                        };
                        next.settle(outcome);
                        completed.set(me.has_completed_assessment);
                        user.set(me.user);
                    }
                    Err(e) => {
                        tracing::error!("Failed to load session: {:?}", e);
                        next.settle(QueryOutcome::Failed(e));
                    }
                }
                role.set(next);
            });
            || ()
        });
    }

    SessionView {
        user: (*user).clone(),
        role: *role,
        has_completed_assessment: *completed,
    }
}
