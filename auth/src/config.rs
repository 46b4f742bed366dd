//! Auth backend configuration parsed from environment variables.

use crate::AuthError;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

const URL_VAR: &str = "SUPABASE_URL";
const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";
const REQUEST_TIMEOUT_VAR: &str = "SUPABASE_REQUEST_TIMEOUT_SECS";
const CONNECT_TIMEOUT_VAR: &str = "SUPABASE_CONNECT_TIMEOUT_SECS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for AuthTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Project URL without trailing slash, e.g. `https://xyz.supabase.co`.
    pub url: String,
    pub anon_key: String,
    pub timeouts: AuthTimeouts,
}

impl AuthConfig {
    /// Build typed auth config from environment variables.
    ///
    /// Required:
    /// - `SUPABASE_URL`
    /// - `SUPABASE_ANON_KEY`
    ///
    /// Optional:
    /// - `SUPABASE_REQUEST_TIMEOUT_SECS`: default 30
    /// - `SUPABASE_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or the URL is not
    /// an http(s) URL.
    pub fn from_env() -> Result<Self, AuthError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AuthConfig::from_env`] but reads through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`AuthConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AuthError> {
        let url = required(&lookup, URL_VAR)?;
        let url = parse_url(&url)?;
        let anon_key = required(&lookup, ANON_KEY_VAR)?;
        let timeouts = AuthTimeouts {
            request_secs: parse_u64(lookup(REQUEST_TIMEOUT_VAR), DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(lookup(CONNECT_TIMEOUT_VAR), DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        Ok(Self { url, anon_key, timeouts })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, var: &str) -> Result<String, AuthError> {
    lookup(var)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AuthError::MissingConfig { var: var.to_owned() })
}

fn parse_url(raw: &str) -> Result<String, AuthError> {
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(AuthError::ConfigParse(format!("{URL_VAR} must be an http(s) URL: {raw}")));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
