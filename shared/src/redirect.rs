//! Auth redirect decisions for the browser.
//!
//! Two handlers run when a page becomes visible:
//! - the code handler forwards an authorization `code` in the query string to
//!   the callback route, replacing the current history entry;
//! - the recovery handler forwards a `#access_token=...&type=recovery`
//!   fragment to the reset-password page, unless it is already there.
//!
//! The decisions are pure; navigation goes through [`Navigator`] so the
//! frontend can plug in browser history and tests can record calls.

use url::form_urlencoded;

pub const AUTH_CALLBACK_PATH: &str = "/auth/callback";
pub const RESET_PASSWORD_PATH: &str = "/reset-password";
pub const RECOVERY_TYPE: &str = "recovery";

/// Client-side navigation capability.
pub trait Navigator {
    /// Navigate without adding a history entry.
    fn replace(&self, url: &str);
    /// Navigate and add a history entry.
    fn push(&self, url: &str);
}

/// The parts of the current URL the handlers look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationSnapshot {
    pub path: String,
    /// Query string without the leading `?`
    pub query: String,
    /// Fragment without the leading `#`
    pub fragment: String,
}

impl LocationSnapshot {
    pub fn new(path: &str, query: &str, fragment: &str) -> Self {
        Self {
            path: path.to_string(),
            query: query.strip_prefix('?').unwrap_or(query).to_string(),
            fragment: fragment.strip_prefix('#').unwrap_or(fragment).to_string(),
        }
    }

    /// Split a relative URL such as `/survey?code=1#x=y`.
    pub fn from_relative(url: &str) -> Self {
        let (rest, fragment) = url.split_once('#').unwrap_or((url, ""));
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
        Self::new(path, query, fragment)
    }

    /// First value of a query parameter.
    pub fn query_param(&self, name: &str) -> Option<String> {
        form_urlencoded::parse(self.query.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// First value of a `key=value` pair in the fragment.
    pub fn fragment_param(&self, name: &str) -> Option<String> {
        form_urlencoded::parse(self.fragment.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    fn is_reset_password(&self) -> bool {
        let path = self.path.trim_end_matches('/');
        path == RESET_PASSWORD_PATH
    }
}

/// Callback URL for an authorization code in the query string, if any.
pub fn code_callback_target(location: &LocationSnapshot) -> Option<String> {
    let code = location.query_param("code").filter(|c| !c.is_empty())?;

    let mut target = format!("{}?code={}", AUTH_CALLBACK_PATH, urlencoding::encode(&code));
    if location.query_param("type").as_deref() == Some(RECOVERY_TYPE) {
        target.push_str("&type=");
        target.push_str(RECOVERY_TYPE);
    }

    Some(target)
}

/// Reset-password URL for a recovery fragment, if any.
///
/// The original fragment is carried over unchanged.
pub fn recovery_target(location: &LocationSnapshot) -> Option<String> {
    if location.is_reset_password() {
        return None;
    }

    let has_token = location
        .fragment_param("access_token")
        .is_some_and(|token| !token.is_empty());
    let is_recovery = location.fragment_param("type").as_deref() == Some(RECOVERY_TYPE);

    if has_token && is_recovery {
        Some(format!("{}#{}", RESET_PASSWORD_PATH, location.fragment))
    } else {
        None
    }
}

/// Access token for the reset-password page.
///
/// A fragment token from an implicit recovery link wins. After a recovery
/// code exchange the page has no fragment and uses the stored session token.
pub fn reset_access_token(
    location: &LocationSnapshot,
    stored_token: Option<String>,
) -> Option<String> {
    location
        .fragment_param("access_token")
        .filter(|token| !token.is_empty())
        .or(stored_token)
        .filter(|token| !token.is_empty())
}

/// Forward an authorization code to the callback route.
///
/// Returns whether a navigation was issued.
pub fn handle_auth_code<N: Navigator + ?Sized>(location: &LocationSnapshot, navigator: &N) -> bool {
    match code_callback_target(location) {
        Some(target) => {
            tracing::debug!("Forwarding auth code to {}", AUTH_CALLBACK_PATH);
            navigator.replace(&target);
            true
        }
        None => false,
    }
}

/// Forward a recovery fragment to the reset-password page.
///
/// Returns whether a navigation was issued.
pub fn handle_recovery_fragment<N: Navigator + ?Sized>(
    location: &LocationSnapshot,
    navigator: &N,
) -> bool {
    match recovery_target(location) {
        Some(target) => {
            tracing::debug!("Forwarding recovery token to {}", RESET_PASSWORD_PATH);
            navigator.push(&target);
            true
        }
        None => false,
    }
}
