use anyhow::{Context, Result};
use diesel_async::{
    pooled_connection::{deadpool::Pool, AsyncDieselConnectionManager},
    AsyncPgConnection,
};

pub type DbPool = Pool<AsyncPgConnection>;

pub fn establish_connection_pool(database_url: &str, max_size: usize) -> Result<DbPool> {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(database_url);
    let pool = Pool::builder(manager)
        .max_size(max_size)
        .build()
        .context("Failed to create database pool")?;

    Ok(pool)
}

// Assessment result database operations
pub mod results {
    use super::*;
    use diesel::prelude::*;
    use diesel_async::RunQueryDsl;
    use shared::AssessmentResult;
    use uuid::Uuid;

    /// Id of any one result for the user; existence only, no ordering.
    pub async fn any_id_for_user(
        conn: &mut AsyncPgConnection,
        owner: Uuid,
    ) -> anyhow::Result<Option<Uuid>> {
        use crate::schema::results::dsl::*;

        let found = results
            .filter(user_id.eq(owner))
            .select(id)
            .first::<Uuid>(conn)
            .await
            .optional()?;

        Ok(found)
    }

    pub async fn latest_for_user(
        conn: &mut AsyncPgConnection,
        owner: Uuid,
    ) -> anyhow::Result<Option<AssessmentResult>> {
        use crate::schema::results::dsl::*;

        let result = results
            .filter(user_id.eq(owner))
            .order_by(created_at.desc())
            .first::<AssessmentResult>(conn)
            .await
            .optional()?;

        Ok(result)
    }

    pub async fn create(
        conn: &mut AsyncPgConnection,
        owner: Uuid,
        answers_val: serde_json::Value,
    ) -> anyhow::Result<AssessmentResult> {
        use crate::schema::results::dsl::*;

        let result = diesel::insert_into(results)
            .values((user_id.eq(owner), answers.eq(answers_val)))
            .get_result::<AssessmentResult>(conn)
            .await?;

        Ok(result)
    }
}

// Role membership database operations
pub mod roles {
    use super::*;
    use diesel::prelude::*;
    use diesel_async::RunQueryDsl;
    use uuid::Uuid;

    /// Names of every role joined to the user.
    pub async fn names_for_user(
        conn: &mut AsyncPgConnection,
        owner: Uuid,
    ) -> anyhow::Result<Vec<String>> {
        use crate::schema::{roles, user_roles};

        let names = user_roles::table
            .inner_join(roles::table)
            .filter(user_roles::user_id.eq(owner))
            .select(roles::name)
            .load::<String>(conn)
            .await?;

        Ok(names)
    }
}
