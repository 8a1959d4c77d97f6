//! Client for the hosted auth service.
//!
//! Speaks the service's REST session API: sign-out, current user, PKCE code
//! exchange and password update. One [`HostedAuthClient`] is built in `main`
//! and shared through `AppState` as `Arc<dyn AuthService>`.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use shared::{AuthUser, Session};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// The service answered but refused the request
    #[error("auth service rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request never got a usable answer
    #[error("auth service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with something we could not read
    #[error("unexpected auth service response: {0}")]
    UnexpectedResponse(String),
}

/// Session operations the backend needs from the auth service.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Invalidate the session server-side. No token means nothing to do.
    async fn sign_out(&self, access_token: Option<&str>) -> Result<(), AuthError>;

    /// The session's user, or `None` when there is no valid session.
    async fn current_user(&self, access_token: Option<&str>)
        -> Result<Option<AuthUser>, AuthError>;

    /// Trade an authorization code for a session.
    async fn exchange_code(
        &self,
        code: &str,
        code_verifier: Option<&str>,
    ) -> Result<Session, AuthError>;

    /// Set a new password for the session's user.
    async fn update_password(&self, access_token: &str, password: &str) -> Result<(), AuthError>;
}

pub struct HostedAuthClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl HostedAuthClient {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.endpoint(path))
            .header("apikey", &self.anon_key)
    }
}

#[async_trait]
impl AuthService for HostedAuthClient {
    async fn sign_out(&self, access_token: Option<&str>) -> Result<(), AuthError> {
        let Some(token) = access_token else {
            tracing::debug!("Sign-out without a session token, nothing to invalidate");
            return Ok(());
        };

        let response = self
            .request(reqwest::Method::POST, "logout")
            .bearer_auth(token)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            // Session already gone on the service side
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
                tracing::debug!("Sign-out for an already expired session");
                Ok(())
            }
            _ => Err(rejection(response).await),
        }
    }

    async fn current_user(
        &self,
        access_token: Option<&str>,
    ) -> Result<Option<AuthUser>, AuthError> {
        let Some(token) = access_token else {
            return Ok(None);
        };

        let response = self
            .request(reqwest::Method::GET, "user")
            .bearer_auth(token)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let user = response
                    .json::<AuthUser>()
                    .await
                    .map_err(|e| AuthError::UnexpectedResponse(e.to_string()))?;
                Ok(Some(user))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            _ => Err(rejection(response).await),
        }
    }

    async fn exchange_code(
        &self,
        code: &str,
        code_verifier: Option<&str>,
    ) -> Result<Session, AuthError> {
        let response = self
            .request(reqwest::Method::POST, "token")
            .query(&[("grant_type", "pkce")])
            .json(&json!({
                "auth_code": code,
                "code_verifier": code_verifier,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        response
            .json::<Session>()
            .await
            .map_err(|e| AuthError::UnexpectedResponse(e.to_string()))
    }

    async fn update_password(&self, access_token: &str, password: &str) -> Result<(), AuthError> {
        let response = self
            .request(reqwest::Method::PUT, "user")
            .bearer_auth(access_token)
            .json(&json!({ "password": password }))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(rejection(response).await)
        }
    }
}

/// Error body shapes the service uses.
#[derive(Debug, Default, Deserialize)]
struct ServiceErrorBody {
    msg: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

async fn rejection(response: reqwest::Response) -> AuthError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let parsed: ServiceErrorBody = serde_json::from_str(&body).unwrap_or_default();

    let message = parsed
        .msg
        .or(parsed.error_description)
        .or(parsed.message)
        .or(parsed.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Auth service error")
                .to_string()
        });

    AuthError::Rejected {
        status: status.as_u16(),
        message,
    }
}
