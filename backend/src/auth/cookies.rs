//! Cookie reading and `Set-Cookie` construction.

use axum::http::{header, header::InvalidHeaderValue, HeaderMap, HeaderValue};
use cookie::{time::Duration, Cookie, SameSite};
use shared::api::{RESET_COOKIES, SESSION_COOKIE};

/// Read a cookie value from the request's `Cookie` header.
pub fn read_cookie(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;

    for cookie_str in cookie_header.split(';') {
        if let Ok(cookie) = Cookie::parse(cookie_str.trim()) {
            if cookie.name() == cookie_name {
                return Some(cookie.value().to_string());
            }
        }
    }

    None
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Session token from the session cookie, falling back to a bearer header.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    read_cookie(headers, SESSION_COOKIE)
        .or_else(|| bearer_token(headers))
        .filter(|token| !token.is_empty())
}

/// `Set-Cookie` value storing the session token.
pub fn session_cookie(token: &str, max_age_seconds: i64, secure: bool) -> String {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::seconds(max_age_seconds))
        .build()
        .to_string()
}

/// `Set-Cookie` value that deletes the named cookie.
pub fn removal_cookie(name: &str, secure: bool) -> String {
    let mut cookie = Cookie::build((name, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build();
    cookie.make_removal();
    cookie.to_string()
}

/// Removal cookies for both reset-flow cookies.
pub fn reset_cookie_removals(secure: bool) -> Vec<String> {
    RESET_COOKIES
        .iter()
        .map(|name| removal_cookie(name, secure))
        .collect()
}

/// Append each value as its own `Set-Cookie` header.
pub fn append_set_cookies<I, S>(headers: &mut HeaderMap, cookies: I) -> Result<(), InvalidHeaderValue>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for cookie in cookies {
        headers.append(header::SET_COOKIE, HeaderValue::from_str(cookie.as_ref())?);
    }
    Ok(())
}
