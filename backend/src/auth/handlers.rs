//! Authentication HTTP handlers.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use shared::api::{
    AuthCallbackRequest, AuthCallbackResponse, ClearCookiesResponse, ErrorResponse,
    MessageResponse, UpdatePasswordRequest, CODE_VERIFIER_COOKIE, SESSION_COOKIE,
};
use shared::redirect::{RECOVERY_TYPE, RESET_PASSWORD_PATH};
use validator::Validate;

use crate::error::{ApiResult, AppError};
use crate::state::AppState;

use super::cookies::{
    append_set_cookies, read_cookie, removal_cookie, reset_cookie_removals, session_cookie,
    session_token,
};
use super::AuthError;

/// Session lifetime used when the service does not report one
const DEFAULT_SESSION_SECONDS: i64 = 3600;

/// Logout - invalidate the session and clear session and reset-flow cookies.
///
/// The cookies are cleared whatever the sign-out outcome.
pub async fn auth_logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let mut removals = reset_cookie_removals(state.secure_cookies);
    removals.push(removal_cookie(SESSION_COOKIE, state.secure_cookies));

    let token = session_token(&headers);
    let mut response = match state.auth.sign_out(token.as_deref()).await {
        Ok(()) => Json(MessageResponse::ok("Logged out successfully")).into_response(),
        Err(AuthError::Rejected { message, .. }) => {
            tracing::warn!("Sign-out rejected: {}", message);
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
        }
        Err(e) => {
            tracing::error!("Logout error: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Logout failed")),
            )
                .into_response()
        }
    };

    if let Err(e) = append_set_cookies(response.headers_mut(), &removals) {
        tracing::error!("Failed to clear cookies on logout: {}", e);
    }

    response
}

/// Clear the reset-flow cookies.
pub async fn clear_reset_cookies(State(state): State<AppState>) -> Response {
    let mut headers = HeaderMap::new();

    match append_set_cookies(&mut headers, reset_cookie_removals(state.secure_cookies)) {
        Ok(()) => (
            headers,
            Json(ClearCookiesResponse {
                success: true,
                error: None,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to clear reset cookies: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ClearCookiesResponse {
                    success: false,
                    error: Some(format!("Failed to clear cookies: {}", e)),
                }),
            )
                .into_response()
        }
    }
}

/// Exchange an authorization code for a session.
///
/// Sets the session cookie and tells the client where to go next: the
/// reset-password page for a recovery code, the landing page otherwise.
pub async fn auth_callback(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<AuthCallbackRequest>,
) -> ApiResult<Response> {
    if request.code.trim().is_empty() {
        return Err(AppError::Validation("code must not be empty".to_string()));
    }

    let verifier = read_cookie(&headers, CODE_VERIFIER_COOKIE);
    let session = state
        .auth
        .exchange_code(&request.code, verifier.as_deref())
        .await
        .map_err(|e| match e {
            AuthError::Rejected { message, .. } => {
                tracing::warn!("Code exchange rejected: {}", message);
                AppError::unauthorized(message)
            }
            other => AppError::Auth(other),
        })?;

    let redirect_to = if request.flow_type.as_deref() == Some(RECOVERY_TYPE) {
        RESET_PASSWORD_PATH
    } else {
        "/"
    };

    tracing::info!("Session established for user {}", session.user.id);

    let max_age = session.expires_in.unwrap_or(DEFAULT_SESSION_SECONDS);
    let cookies = [
        session_cookie(&session.access_token, max_age, state.secure_cookies),
        removal_cookie(CODE_VERIFIER_COOKIE, state.secure_cookies),
    ];

    let mut response = Json(AuthCallbackResponse {
        user: session.user,
        access_token: session.access_token,
        redirect_to: redirect_to.to_string(),
    })
    .into_response();

    append_set_cookies(response.headers_mut(), &cookies)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to set session cookie: {}", e)))?;

    Ok(response)
}

/// Set a new password with the token from a recovery link.
pub async fn update_password(
    State(state): State<AppState>,
    Json(request): Json<UpdatePasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    request.validate()?;

    state
        .auth
        .update_password(&request.access_token, &request.password)
        .await?;

    tracing::info!("Password updated through recovery flow");
    Ok(Json(MessageResponse::ok("Password updated")))
}
