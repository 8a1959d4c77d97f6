//! Data access for role membership and assessment results.
//!
//! Handlers and services depend on the [`Directory`] trait; [`PgDirectory`]
//! backs it with the diesel-async pool.

use anyhow::{Context, Result};
use async_trait::async_trait;
use shared::AssessmentResult;
use uuid::Uuid;

use crate::db::{self, DbPool};

#[async_trait]
pub trait Directory: Send + Sync {
    /// Names of the roles joined to the user.
    async fn role_names(&self, user_id: Uuid) -> Result<Vec<String>>;

    /// Any one result id for the user, if the user has results.
    async fn any_result_id(&self, user_id: Uuid) -> Result<Option<Uuid>>;

    /// The user's most recently created result.
    async fn latest_result(&self, user_id: Uuid) -> Result<Option<AssessmentResult>>;

    /// Store a completed assessment.
    async fn insert_result(
        &self,
        user_id: Uuid,
        answers: serde_json::Value,
    ) -> Result<AssessmentResult>;
}

pub struct PgDirectory {
    pool: DbPool,
}

impl PgDirectory {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Directory for PgDirectory {
    async fn role_names(&self, user_id: Uuid) -> Result<Vec<String>> {
        let mut conn = self
            .pool
            .get()
            .await
            .context("Failed to get database connection")?;
        db::roles::names_for_user(&mut conn, user_id).await
    }

    async fn any_result_id(&self, user_id: Uuid) -> Result<Option<Uuid>> {
        let mut conn = self
            .pool
            .get()
            .await
            .context("Failed to get database connection")?;
        db::results::any_id_for_user(&mut conn, user_id).await
    }

    async fn latest_result(&self, user_id: Uuid) -> Result<Option<AssessmentResult>> {
        let mut conn = self
            .pool
            .get()
            .await
            .context("Failed to get database connection")?;
        db::results::latest_for_user(&mut conn, user_id).await
    }

    async fn insert_result(
        &self,
        user_id: Uuid,
        answers: serde_json::Value,
    ) -> Result<AssessmentResult> {
        let mut conn = self
            .pool
            .get()
            .await
            .context("Failed to get database connection")?;
        db::results::create(&mut conn, user_id, answers).await
    }
}
