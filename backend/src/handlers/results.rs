use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};
use shared::api::{LatestResultResponse, SubmitResultRequest};
use shared::AssessmentResult;
use validator::Validate;

use crate::auth::require_user;
use crate::error::ApiResult;
use crate::services::assessment;
use crate::state::AppState;

pub async fn get_latest_result(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<LatestResultResponse>> {
    let user = require_user(&state, &headers).await?;
    let result = assessment::latest_result(state.directory.as_ref(), user.id).await;

    Ok(Json(LatestResultResponse { result }))
}

pub async fn submit_result(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SubmitResultRequest>,
) -> ApiResult<(StatusCode, Json<AssessmentResult>)> {
    let user = require_user(&state, &headers).await?;
    payload.validate()?;

    let result = state
        .directory
        .insert_result(user.id, serde_json::json!(payload.answers))
        .await?;

    tracing::info!("Stored assessment result {} for user {}", result.id, user.id);
    Ok((StatusCode::CREATED, Json(result)))
}
