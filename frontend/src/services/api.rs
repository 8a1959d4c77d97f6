use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::api::{
    AuthCallbackRequest, AuthCallbackResponse, ClearCookiesResponse, ErrorResponse,
    LatestResultResponse, MeResponse, MessageResponse, SubmitResultRequest, UpdatePasswordRequest,
};
use shared::AssessmentResult;

use crate::services::storage::token_storage;

const API_BASE_URL: &str = "/api";

pub struct ApiService;

impl ApiService {
    pub async fn me() -> Result<MeResponse, String> {
        let url = format!("{}/me", API_BASE_URL);

        let response = with_token(Request::get(&url))
            .send()
            .await
            .map_err(|e| format!("Request failed: {:?}", e))?;

        read_json(response).await
    }

    pub async fn exchange_code(
        code: String,
        flow_type: Option<String>,
    ) -> Result<AuthCallbackResponse, String> {
        let url = format!("{}/auth/callback", API_BASE_URL);
        let request = AuthCallbackRequest { code, flow_type };

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {:?}", e))?
            .send()
            .await
            .map_err(|e| format!("Request failed: {:?}", e))?;

        read_json(response).await
    }

    pub async fn logout() -> Result<MessageResponse, String> {
        let url = format!("{}/auth/logout", API_BASE_URL);

        let response = with_token(Request::post(&url))
            .send()
            .await
            .map_err(|e| format!("Request failed: {:?}", e))?;

        read_json(response).await
    }

    pub async fn clear_reset_cookies() -> Result<ClearCookiesResponse, String> {
        let url = format!("{}/auth/clear-reset-cookies", API_BASE_URL);

        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| format!("Request failed: {:?}", e))?;

        read_json(response).await
    }

    pub async fn update_password(request: UpdatePasswordRequest) -> Result<MessageResponse, String> {
        let url = format!("{}/auth/password", API_BASE_URL);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {:?}", e))?
            .send()
            .await
            .map_err(|e| format!("Request failed: {:?}", e))?;

        read_json(response).await
    }

    pub async fn submit_result(answers: Vec<u8>) -> Result<AssessmentResult, String> {
        let url = format!("{}/results", API_BASE_URL);
        let request = SubmitResultRequest { answers };

        let response = with_token(Request::post(&url))
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {:?}", e))?
            .send()
            .await
            .map_err(|e| format!("Request failed: {:?}", e))?;

        read_json(response).await
    }

    pub async fn latest_result() -> Result<LatestResultResponse, String> {
        let url = format!("{}/results/latest", API_BASE_URL);

        let response = with_token(Request::get(&url))
            .send()
            .await
            .map_err(|e| format!("Request failed: {:?}", e))?;

        read_json(response).await
    }
}

/// Attach the stored access token, if any. The session cookie goes along
/// with same-origin requests anyway.
fn with_token(builder: RequestBuilder) -> RequestBuilder {
    match token_storage().get_auth_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let status = response.status();
        return Err(match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => format!("HTTP error: {}", status),
        });
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {:?}", e))
}
