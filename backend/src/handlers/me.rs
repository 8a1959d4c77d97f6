use axum::{extract::State, http::HeaderMap, Json};
use shared::api::MeResponse;

use crate::auth::optional_user;
use crate::error::ApiResult;
use crate::services::{assessment, roles};
use crate::state::AppState;

/// Current user with role and assessment status.
///
/// Role and completion lookups never fail this request; a failed lookup
/// reads as the `user` role and "not completed".
pub async fn get_me(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Json<MeResponse>> {
    let Some(user) = optional_user(&state, &headers).await? else {
        return Ok(Json(MeResponse::anonymous()));
    };

    let directory = state.directory.as_ref();
    let role = roles::role_or_default(directory, user.id).await;
    let has_completed_assessment = assessment::has_completed_assessment(directory, user.id).await;

    Ok(Json(MeResponse {
        user: Some(user),
        role,
        has_completed_assessment,
    }))
}
