use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::auth;
use crate::handlers::{health, me, results};
use crate::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Auth routes
        .route("/auth/callback", post(auth::auth_callback))
        .route("/auth/logout", post(auth::auth_logout))
        .route("/auth/clear-reset-cookies", post(auth::clear_reset_cookies))
        .route("/auth/password", post(auth::update_password))

        // Session routes
        .route("/me", get(me::get_me))

        // Result routes
        .route("/results", post(results::submit_result))
        .route("/results/latest", get(results::get_latest_result))
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use shared::{AuthUser, Session};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::test_support::{
        test_state, test_user, SignOutBehavior, StubAuth, StubDirectory,
    };

    async fn send(app: Router, request: Request<Body>) -> Response {
        app.oneshot(request).await.unwrap()
    }

    fn post_empty(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn with_session(mut request: Request<Body>, token: &str) -> Request<Body> {
        request.headers_mut().insert(
            header::COOKIE,
            format!("friendlens_session={}", token).parse().unwrap(),
        );
        request
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn set_cookies(response: &Response) -> Vec<String> {
        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect()
    }

    fn clears(cookies: &[String], name: &str) -> bool {
        cookies
            .iter()
            .any(|c| c.starts_with(&format!("{}=;", name)) && c.contains("Max-Age=0"))
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let app = app_router(test_state(StubAuth::default(), StubDirectory::default()));
        let response = send(
            app,
            Request::builder().uri("/health").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn logout_success_clears_reset_cookies() {
        let auth = Arc::new(StubAuth::default());
        let state = crate::state::AppState {
            auth: auth.clone(),
            directory: Arc::new(StubDirectory::default()),
            secure_cookies: false,
        };

        let request = with_session(post_empty("/api/auth/logout"), "tok");
        let response = send(app_router(state), request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let cookies = set_cookies(&response);
        assert!(clears(&cookies, "reset_user_id"));
        assert!(clears(&cookies, "reset_session"));
        assert!(clears(&cookies, "friendlens_session"));
        assert_eq!(auth.sign_out_calls.load(Ordering::SeqCst), 1);

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn logout_rejected_is_400_and_still_clears_cookies() {
        let auth = StubAuth::default().with_sign_out(SignOutBehavior::Reject);
        let app = app_router(test_state(auth, StubDirectory::default()));

        let response = send(app, with_session(post_empty("/api/auth/logout"), "tok")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let cookies = set_cookies(&response);
        assert!(clears(&cookies, "reset_user_id"));
        assert!(clears(&cookies, "reset_session"));
        assert_eq!(body_json(response).await["error"], "Session not found");
    }

    #[tokio::test]
    async fn logout_unexpected_failure_is_500() {
        let auth = StubAuth::default().with_sign_out(SignOutBehavior::Fail);
        let app = app_router(test_state(auth, StubDirectory::default()));

        let response = send(app, post_empty("/api/auth/logout")).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let cookies = set_cookies(&response);
        assert!(clears(&cookies, "reset_user_id"));
        assert!(clears(&cookies, "reset_session"));
        assert_eq!(body_json(response).await["error"], "Logout failed");
    }

    #[tokio::test]
    async fn clear_reset_cookies_succeeds() {
        let app = app_router(test_state(StubAuth::default(), StubDirectory::default()));

        let response = send(app, post_empty("/api/auth/clear-reset-cookies")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let cookies = set_cookies(&response);
        assert_eq!(cookies.len(), 2);
        assert!(clears(&cookies, "reset_user_id"));
        assert!(clears(&cookies, "reset_session"));
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "success": true })
        );
    }

    #[tokio::test]
    async fn callback_sets_session_and_redirects_home() {
        let user = test_user();
        let session = Session {
            access_token: "access-1".to_string(),
            refresh_token: None,
            expires_in: Some(600),
            user: user.clone(),
        };
        let auth = StubAuth::default().with_code("ABC", session);
        let app = app_router(test_state(auth, StubDirectory::default()));

        let response = send(
            app,
            post_json("/api/auth/callback", serde_json::json!({ "code": "ABC" })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let cookies = set_cookies(&response);
        assert!(cookies
            .iter()
            .any(|c| c.starts_with("friendlens_session=access-1") && c.contains("Max-Age=600")));

        let body = body_json(response).await;
        assert_eq!(body["redirect_to"], "/");
        assert_eq!(body["access_token"], "access-1");
        assert_eq!(body["user"]["id"], user.id.to_string());
    }

    #[tokio::test]
    async fn recovery_callback_redirects_to_reset_password() {
        let session = Session {
            access_token: "access-2".to_string(),
            refresh_token: None,
            expires_in: None,
            user: test_user(),
        };
        let auth = StubAuth::default().with_code("ABC", session);
        let app = app_router(test_state(auth, StubDirectory::default()));

        let response = send(
            app,
            post_json(
                "/api/auth/callback",
                serde_json::json!({ "code": "ABC", "type": "recovery" }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["redirect_to"], "/reset-password");
    }

    #[tokio::test]
    async fn callback_with_bad_code_is_unauthorized() {
        let app = app_router(test_state(StubAuth::default(), StubDirectory::default()));

        let response = send(
            app,
            post_json("/api/auth/callback", serde_json::json!({ "code": "nope" })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(set_cookies(&response).is_empty());
        assert_eq!(body_json(response).await["error"], "Invalid auth code");
    }

    #[tokio::test]
    async fn me_for_anonymous_caller() {
        let app = app_router(test_state(StubAuth::default(), StubDirectory::default()));

        let response = send(
            app,
            Request::builder().uri("/api/me").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "user": null,
                "role": "user",
                "has_completed_assessment": false
            })
        );
    }

    #[tokio::test]
    async fn me_reports_admin_with_completed_assessment() {
        let user = test_user();
        let auth = StubAuth::default().with_user("tok", user.clone());
        let directory = StubDirectory::default()
            .with_roles(user.id, &["admin", "editor"])
            .with_result(user.id, serde_json::json!([3, 4]));
        let app = app_router(test_state(auth, directory));

        let request = with_session(
            Request::builder().uri("/api/me").body(Body::empty()).unwrap(),
            "tok",
        );
        let body = body_json(send(app, request).await).await;

        assert_eq!(body["role"], "admin");
        assert_eq!(body["has_completed_assessment"], true);
        assert_eq!(body["user"]["email"], "lens@example.com");
    }

    #[tokio::test]
    async fn me_collapses_directory_failure_to_defaults() {
        let user = test_user();
        let auth = StubAuth::default().with_user("tok", user);
        let app = app_router(test_state(auth, StubDirectory::failing()));

        let request = with_session(
            Request::builder().uri("/api/me").body(Body::empty()).unwrap(),
            "tok",
        );
        let response = send(app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["role"], "user");
        assert_eq!(body["has_completed_assessment"], false);
    }

    #[tokio::test]
    async fn latest_result_requires_session() {
        let app = app_router(test_state(StubAuth::default(), StubDirectory::default()));

        let response = send(
            app,
            Request::builder()
                .uri("/api/results/latest")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn latest_result_is_null_when_none() {
        let user = test_user();
        let auth = StubAuth::default().with_user("tok", user);
        let app = app_router(test_state(auth, StubDirectory::default()));

        let request = with_session(
            Request::builder()
                .uri("/api/results/latest")
                .body(Body::empty())
                .unwrap(),
            "tok",
        );
        let body = body_json(send(app, request).await).await;
        assert_eq!(body, serde_json::json!({ "result": null }));
    }

    #[tokio::test]
    async fn submit_result_stores_answers() {
        let user: AuthUser = test_user();
        let auth = StubAuth::default().with_user("tok", user.clone());
        let app = app_router(test_state(auth, StubDirectory::default()));

        let request = with_session(
            post_json("/api/results", serde_json::json!({ "answers": [1, 5, 3] })),
            "tok",
        );
        let response = send(app, request).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["user_id"], user.id.to_string());
        assert_eq!(body["answers"], serde_json::json!([1, 5, 3]));
        assert!(Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn submit_result_rejects_out_of_scale_answers() {
        let auth = StubAuth::default().with_user("tok", test_user());
        let app = app_router(test_state(auth, StubDirectory::default()));

        let request = with_session(
            post_json("/api/results", serde_json::json!({ "answers": [9] })),
            "tok",
        );
        let response = send(app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_password_through_recovery_token() {
        let auth = Arc::new(StubAuth::default().with_user("recovery-tok", test_user()));
        let state = crate::state::AppState {
            auth: auth.clone(),
            directory: Arc::new(StubDirectory::default()),
            secure_cookies: false,
        };

        let response = send(
            app_router(state),
            post_json(
                "/api/auth/password",
                serde_json::json!({
                    "access_token": "recovery-tok",
                    "password": "a much longer password"
                }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let passwords = auth.passwords.lock().unwrap();
        assert_eq!(passwords.len(), 1);
        assert_eq!(passwords[0].1, "a much longer password");
    }

    #[tokio::test]
    async fn update_password_rejects_short_password() {
        let auth = StubAuth::default().with_user("recovery-tok", test_user());
        let app = app_router(test_state(auth, StubDirectory::default()));

        let response = send(
            app,
            post_json(
                "/api/auth/password",
                serde_json::json!({ "access_token": "recovery-tok", "password": "short" }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
