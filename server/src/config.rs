//! Server configuration parsed from environment variables.
//!
//! `main` loads `.env` (if present) through `dotenvy` before calling
//! [`ServerConfig::from_env`].

use std::time::Duration;

use crate::services::auth::GitHubConfig;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_DB_QUERY_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_SESSION_SWEEP_SECS: u64 = 3600;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{var} has invalid value {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Connection-pool tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbSettings {
    pub max_connections: u32,
    /// Bounds both pool acquisition and each statement.
    pub query_timeout: Duration,
}

impl Default for DbSettings {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            query_timeout: Duration::from_secs(DEFAULT_DB_QUERY_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub db: DbSettings,
    pub session_sweep_interval: Duration,
    /// `Secure` attribute on session and OAuth state cookies.
    pub cookie_secure: bool,
    /// `None` disables GitHub sign-in.
    pub github: Option<GitHubConfig>,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `DATABASE_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DB_MAX_CONNECTIONS`: default 5, must be > 0
    /// - `DB_QUERY_TIMEOUT_SECS`: default 5, must be > 0
    /// - `SESSION_SWEEP_SECS`: default 3600
    /// - `COOKIE_SECURE`: default true iff `GITHUB_REDIRECT_URI` is https
    /// - `GITHUB_CLIENT_ID`, `GITHUB_CLIENT_SECRET`, `GITHUB_REDIRECT_URI`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `DATABASE_URL` is missing, or a numeric or
    /// boolean variable does not parse or is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let max_connections = non_zero(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;
        let query_timeout_secs = non_zero(&lookup, "DB_QUERY_TIMEOUT_SECS", DEFAULT_DB_QUERY_TIMEOUT_SECS)?;
        let sweep_secs = parse_or(&lookup, "SESSION_SWEEP_SECS", DEFAULT_SESSION_SWEEP_SECS)?;
        let cookie_secure = match lookup("COOKIE_SECURE").filter(|v| !v.trim().is_empty()) {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { var: "COOKIE_SECURE", value: raw })?,
            None => lookup("GITHUB_REDIRECT_URI").is_some_and(|uri| uri.trim().starts_with("https://")),
        };

        Ok(Self {
            database_url,
            port,
            db: DbSettings { max_connections, query_timeout: Duration::from_secs(query_timeout_secs) },
            session_sweep_interval: Duration::from_secs(sweep_secs.max(1)),
            cookie_secure,
            github: GitHubConfig::from_lookup(&lookup),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}

/// Like [`parse_or`], but `0` is rejected: a zero pool size or query timeout
/// would make every request fail.
fn non_zero<T>(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialEq + Default + std::fmt::Display,
{
    let value = parse_or(lookup, var, default)?;
    if value == T::default() {
        return Err(ConfigError::Invalid { var, value: value.to_string() });
    }
    Ok(value)
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
