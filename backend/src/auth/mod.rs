//! Session handling backed by the hosted auth service.
//!
//! This module provides:
//! - the `AuthService` client (sign-out, current user, code exchange)
//! - cookie helpers for the session and reset-flow cookies
//! - logout, clear-reset-cookies, callback and password handlers

mod client;
pub mod cookies;
mod handlers;
mod session;

pub use client::{AuthError, AuthService, HostedAuthClient};
pub use handlers::{auth_callback, auth_logout, clear_reset_cookies, update_password};
pub use session::{optional_user, require_user};
