use std::sync::Arc;

use crate::auth::AuthService;
use crate::directory::Directory;

/// Shared handler state, built once in `main`.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthService>,
    pub directory: Arc<dyn Directory>,
    /// Mark every cookie we set as `Secure`
    pub secure_cookies: bool,
}
