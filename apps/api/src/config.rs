use anyhow::{Context, Result};

const DEFAULT_MATCH_LIMIT: usize = 10;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Number of ranked jobs returned by a match request.
    pub match_limit: usize,
    /// Upper bound on an uploaded resume document.
    pub max_upload_bytes: usize,
    /// Optional JSON file replacing the built-in skill catalog.
    pub skill_catalog_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            match_limit: parse_env("MATCH_LIMIT", DEFAULT_MATCH_LIMIT)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            skill_catalog_path: std::env::var("SKILL_CATALOG_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    /// Configuration for in-process tests; never touches the environment.
    pub fn for_tests() -> Self {
        Config {
            database_url: "postgres://localhost/skilllink_test".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            match_limit: DEFAULT_MATCH_LIMIT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            skill_catalog_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_falls_back_to_default() {
        let value: usize = parse_env("SKILLLINK_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("SKILLLINK_TEST_BAD_LIMIT", "ten");
        let result: Result<usize> = parse_env("SKILLLINK_TEST_BAD_LIMIT", 10);
        assert!(result.is_err());
        std::env::remove_var("SKILLLINK_TEST_BAD_LIMIT");
    }

    #[test]
    fn test_parse_env_trims_whitespace() {
        std::env::set_var("SKILLLINK_TEST_PADDED_LIMIT", " 25 ");
        let value: usize = parse_env("SKILLLINK_TEST_PADDED_LIMIT", 10).unwrap();
        assert_eq!(value, 25);
        std::env::remove_var("SKILLLINK_TEST_PADDED_LIMIT");
    }
}
