//! Three-way query result used before errors are collapsed into defaults.
//!
//! Lookups against the auth service or database distinguish "found",
//! "nothing there" and "the query failed". Presentation code only ever sees
//! the collapsed form (`bool`, `Option`, default role), but the failure
//! cause is logged at the point of collapse.

/// Result of a lookup that may find nothing
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome<T> {
    Found(T),
    Empty,
    Failed(String),
}

impl<T> QueryOutcome<T> {
    /// Build an outcome from a fallible optional lookup.
    pub fn from_result<E: std::fmt::Display>(result: Result<Option<T>, E>) -> Self {
        match result {
            Ok(Some(value)) => QueryOutcome::Found(value),
            Ok(None) => QueryOutcome::Empty,
            Err(e) => QueryOutcome::Failed(e.to_string()),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, QueryOutcome::Found(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, QueryOutcome::Failed(_))
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> QueryOutcome<U> {
        match self {
            QueryOutcome::Found(value) => QueryOutcome::Found(f(value)),
            QueryOutcome::Empty => QueryOutcome::Empty,
            QueryOutcome::Failed(cause) => QueryOutcome::Failed(cause),
        }
    }

    /// Collapse to an `Option`, logging a failure under `context`.
    pub fn into_option_logged(self, context: &str) -> Option<T> {
        match self {
            QueryOutcome::Found(value) => Some(value),
            QueryOutcome::Empty => None,
            QueryOutcome::Failed(cause) => {
                tracing::warn!("{} failed, treating as empty: {}", context, cause);
                None
            }
        }
    }
}
