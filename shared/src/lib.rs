//! Types and browser-independent logic shared by the FriendLens backend and
//! frontend.

pub mod api;
pub mod models;
pub mod outcome;
pub mod redirect;
pub mod roles;
pub mod storage;

pub use models::{AssessmentResult, AuthUser, Role, Session};
pub use outcome::QueryOutcome;
