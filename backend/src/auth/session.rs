//! Resolving the caller's session for protected handlers.

use axum::http::HeaderMap;
use shared::AuthUser;

use crate::error::{ApiResult, AppError};
use crate::state::AppState;

use super::cookies::session_token;

/// The caller's user, or `None` for an anonymous or expired session.
pub async fn optional_user(state: &AppState, headers: &HeaderMap) -> ApiResult<Option<AuthUser>> {
    let token = session_token(headers);
    Ok(state.auth.current_user(token.as_deref()).await?)
}

/// The caller's user; anonymous callers get 401.
pub async fn require_user(state: &AppState, headers: &HeaderMap) -> ApiResult<AuthUser> {
    optional_user(state, headers)
        .await?
        .ok_or_else(|| AppError::unauthorized("Missing authentication"))
}
