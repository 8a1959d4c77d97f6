use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::{AssessmentResult, AuthUser, Role};

// ============================================================================
// Cookies
// ============================================================================

/// Reset-flow cookie holding the user being recovered
pub const RESET_USER_ID_COOKIE: &str = "reset_user_id";
/// Reset-flow cookie holding the recovery session marker
pub const RESET_SESSION_COOKIE: &str = "reset_session";
/// Both reset-flow cookies, in the order they are cleared
pub const RESET_COOKIES: [&str; 2] = [RESET_USER_ID_COOKIE, RESET_SESSION_COOKIE];

/// Session cookie carrying the access token
pub const SESSION_COOKIE: &str = "friendlens_session";
/// PKCE verifier stored by the login page before leaving for the provider
pub const CODE_VERIFIER_COOKIE: &str = "code_verifier";

// ============================================================================
// Common
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

// ============================================================================
// Auth API Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearCookiesResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthCallbackRequest {
    pub code: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub flow_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthCallbackResponse {
    pub user: AuthUser,
    pub access_token: String,
    pub redirect_to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 1))]
    pub access_token: String,

    #[validate(length(min = 8, max = 72))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: Option<AuthUser>,
    pub role: Role,
    pub has_completed_assessment: bool,
}

impl MeResponse {
    pub fn anonymous() -> Self {
        Self {
            user: None,
            role: Role::User,
            has_completed_assessment: false,
        }
    }
}

// ============================================================================
// Assessment API Types
// ============================================================================

/// Number of answer choices per question
pub const ANSWER_SCALE_MAX: u8 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitResultRequest {
    #[validate(length(min = 1, max = 50))]
    #[validate(custom = "validate_answer_scale")]
    pub answers: Vec<u8>,
}

fn validate_answer_scale(answers: &[u8]) -> Result<(), ValidationError> {
    if answers
        .iter()
        .all(|answer| (1..=ANSWER_SCALE_MAX).contains(answer))
    {
        Ok(())
    } else {
        Err(ValidationError::new("answer_out_of_scale"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestResultResponse {
    pub result: Option<AssessmentResult>,
}
