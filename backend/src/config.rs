use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_pool_size: usize,
    pub port: u16,
    pub auth_service_url: String,
    pub auth_service_anon_key: String,
    pub frontend_dir: String,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub secure_cookies: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            database_pool_size: env::var("DATABASE_POOL_SIZE")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DATABASE_POOL_SIZE must be a valid number")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            auth_service_url: env::var("AUTH_SERVICE_URL")
                .context("AUTH_SERVICE_URL must be set")?
                .trim_end_matches('/')
                .to_string(),
            auth_service_anon_key: env::var("AUTH_SERVICE_ANON_KEY")
                .context("AUTH_SERVICE_ANON_KEY must be set")?,
            frontend_dir: env::var("FRONTEND_DIR")
                .unwrap_or_else(|_| "frontend/dist".to_string()),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|origins| parse_list(&origins)),
            secure_cookies: parse_flag(env::var("SECURE_COOKIES").ok().as_deref())
                .context("SECURE_COOKIES must be true or false")?,
        })
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_flag(value: Option<&str>) -> Result<bool> {
    match value.map(|v| v.trim().to_lowercase()) {
        None => Ok(false),
        Some(v) if v.is_empty() || v == "false" || v == "0" => Ok(false),
        Some(v) if v == "true" || v == "1" => Ok(true),
        Some(v) => anyhow::bail!("unrecognized flag value: {}", v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_list_skips_blanks() {
        assert_eq!(
            parse_list("https://a.example, ,https://b.example,"),
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn flag_parsing() {
        assert!(!parse_flag(None).unwrap());
        assert!(!parse_flag(Some("false")).unwrap());
        assert!(parse_flag(Some("TRUE")).unwrap());
        assert!(parse_flag(Some("1")).unwrap());
        assert!(parse_flag(Some("maybe")).is_err());
    }
}
