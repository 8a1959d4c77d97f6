//! Assessment completion checks.
//!
//! Lookups are computed as [`QueryOutcome`] and collapsed here, so callers
//! only ever see `bool` / `Option`. A failed query is logged and reads as
//! "no result", the same as a user who has not taken the assessment.

use shared::{AssessmentResult, QueryOutcome};
use uuid::Uuid;

use crate::directory::Directory;

pub async fn completion(directory: &dyn Directory, user_id: Uuid) -> QueryOutcome<Uuid> {
    QueryOutcome::from_result(directory.any_result_id(user_id).await)
}

/// Whether the user has at least one stored result.
pub async fn has_completed_assessment(directory: &dyn Directory, user_id: Uuid) -> bool {
    completion(directory, user_id)
        .await
        .into_option_logged("Assessment completion check")
        .is_some()
}

/// The user's most recent result, if any could be read.
pub async fn latest_result(directory: &dyn Directory, user_id: Uuid) -> Option<AssessmentResult> {
    QueryOutcome::from_result(directory.latest_result(user_id).await)
        .into_option_logged("Latest result lookup")
}
