//! In-memory stand-ins for the auth service and the database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use shared::{AssessmentResult, AuthUser, Session};
use uuid::Uuid;

use crate::auth::{AuthError, AuthService};
use crate::directory::Directory;
use crate::state::AppState;

#[derive(Clone, Copy, Debug)]
pub enum SignOutBehavior {
    Succeed,
    Reject,
    Fail,
}

pub struct StubAuth {
    users: HashMap<String, AuthUser>,
    sessions: HashMap<String, Session>,
    sign_out: SignOutBehavior,
    pub sign_out_calls: AtomicUsize,
    pub passwords: Mutex<Vec<(String, String)>>,
}

impl Default for StubAuth {
    fn default() -> Self {
        Self {
            users: HashMap::new(),
            sessions: HashMap::new(),
            sign_out: SignOutBehavior::Succeed,
            sign_out_calls: AtomicUsize::new(0),
            passwords: Mutex::new(Vec::new()),
        }
    }
}

impl StubAuth {
    pub fn with_user(mut self, token: &str, user: AuthUser) -> Self {
        self.users.insert(token.to_string(), user);
        self
    }

    pub fn with_code(mut self, code: &str, session: Session) -> Self {
        self.sessions.insert(code.to_string(), session);
        self
    }

    pub fn with_sign_out(mut self, behavior: SignOutBehavior) -> Self {
        self.sign_out = behavior;
        self
    }
}

#[async_trait]
impl AuthService for StubAuth {
    async fn sign_out(&self, _access_token: Option<&str>) -> Result<(), AuthError> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        match self.sign_out {
            SignOutBehavior::Succeed => Ok(()),
            SignOutBehavior::Reject => Err(AuthError::Rejected {
                status: 400,
                message: "Session not found".to_string(),
            }),
            SignOutBehavior::Fail => Err(AuthError::UnexpectedResponse(
                "connection closed".to_string(),
            )),
        }
    }

    async fn current_user(
        &self,
        access_token: Option<&str>,
    ) -> Result<Option<AuthUser>, AuthError> {
        Ok(access_token.and_then(|token| self.users.get(token).cloned()))
    }

    async fn exchange_code(
        &self,
        code: &str,
        _code_verifier: Option<&str>,
    ) -> Result<Session, AuthError> {
        self.sessions
            .get(code)
            .cloned()
            .ok_or_else(|| AuthError::Rejected {
                status: 400,
                message: "Invalid auth code".to_string(),
            })
    }

    async fn update_password(&self, access_token: &str, password: &str) -> Result<(), AuthError> {
        if !self.users.contains_key(access_token) {
            return Err(AuthError::Rejected {
                status: 401,
                message: "Invalid token".to_string(),
            });
        }
        self.passwords
            .lock()
            .unwrap()
            .push((access_token.to_string(), password.to_string()));
        Ok(())
    }
}

#[derive(Default)]
pub struct StubDirectory {
    roles: HashMap<Uuid, Vec<String>>,
    results: Mutex<Vec<AssessmentResult>>,
    failing: bool,
}

impl StubDirectory {
    /// A directory whose every query fails.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_roles(mut self, user_id: Uuid, names: &[&str]) -> Self {
        self.roles
            .insert(user_id, names.iter().map(|n| n.to_string()).collect());
        self
    }

    pub fn with_result(self, user_id: Uuid, answers: serde_json::Value) -> Self {
        self.push_result(user_id, answers);
        self
    }

    fn push_result(&self, user_id: Uuid, answers: serde_json::Value) -> AssessmentResult {
        let mut results = self.results.lock().unwrap();
        let result = AssessmentResult {
            id: Uuid::new_v4(),
            user_id,
            answers,
            created_at: Utc::now() + Duration::seconds(results.len() as i64),
        };
        results.push(result.clone());
        result
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.failing {
            anyhow::bail!("database unavailable");
        }
        Ok(())
    }
}

#[async_trait]
impl Directory for StubDirectory {
    async fn role_names(&self, user_id: Uuid) -> anyhow::Result<Vec<String>> {
        self.check()?;
        Ok(self.roles.get(&user_id).cloned().unwrap_or_default())
    }

    async fn any_result_id(&self, user_id: Uuid) -> anyhow::Result<Option<Uuid>> {
        self.check()?;
        let results = self.results.lock().unwrap();
        Ok(results.iter().find(|r| r.user_id == user_id).map(|r| r.id))
    }

    async fn latest_result(&self, user_id: Uuid) -> anyhow::Result<Option<AssessmentResult>> {
        self.check()?;
        let results = self.results.lock().unwrap();
        Ok(results
            .iter()
            .filter(|r| r.user_id == user_id)
            .max_by_key(|r| r.created_at)
            .cloned())
    }

    async fn insert_result(
        &self,
        user_id: Uuid,
        answers: serde_json::Value,
    ) -> anyhow::Result<AssessmentResult> {
        self.check()?;
        Ok(self.push_result(user_id, answers))
    }
}

pub fn test_user() -> AuthUser {
    AuthUser {
        id: Uuid::new_v4(),
        email: Some("lens@example.com".to_string()),
    }
}

pub fn test_state(auth: StubAuth, directory: StubDirectory) -> AppState {
    AppState {
        auth: Arc::new(auth),
        directory: Arc::new(directory),
        secure_cookies: false,
    }
}
