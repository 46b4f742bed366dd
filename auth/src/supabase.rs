//! Supabase Auth (GoTrue) client.
//!
//! Thin HTTP wrapper for `/auth/v1/token?grant_type=password` and
//! `/auth/v1/signup`. Pure parsing in `parse_*` for testability.

use std::time::Duration;

use serde_json::Value;

use crate::{AuthConfig, AuthError, AuthService, AuthUser, Credentials};

const TOKEN_PATH: &str = "/auth/v1/token?grant_type=password";
const SIGNUP_PATH: &str = "/auth/v1/signup";

/// Error body fields in the order GoTrue versions have used them.
const ERROR_MESSAGE_FIELDS: [&str; 4] = ["msg", "message", "error_description", "error"];

// =============================================================================
// CLIENT
// =============================================================================

pub struct SupabaseAuthClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseAuthClient {
    /// Build a client from typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: AuthConfig) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| AuthError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.url, anon_key: config.anon_key })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// POST credentials and return the raw success body.
    async fn post_credentials(&self, path: &str, credentials: &Credentials) -> Result<String, AuthError> {
        let response = self
            .http
            .post(self.endpoint(path))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .json(credentials)
            .send()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        tracing::debug!(path, status, "auth backend responded");
        let text = response
            .text()
            .await
            .map_err(|e| AuthError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(parse_error(status, &text));
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl AuthService for SupabaseAuthClient {
    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<Option<AuthUser>, AuthError> {
        let body = self.post_credentials(TOKEN_PATH, credentials).await?;
        parse_session_user(&body)
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<Option<AuthUser>, AuthError> {
        let body = self.post_credentials(SIGNUP_PATH, credentials).await?;
        parse_signup_user(&body)
    }
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_json(body: &str) -> Result<Value, AuthError> {
    serde_json::from_str(body).map_err(|e| AuthError::Parse(e.to_string()))
}

fn user_from_value(value: &Value) -> Result<Option<AuthUser>, AuthError> {
    match value {
        Value::Object(map) if map.contains_key("id") => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| AuthError::Parse(e.to_string())),
        _ => Ok(None),
    }
}

/// Token endpoint: `{ access_token, ..., user: {...} }`.
fn parse_session_user(body: &str) -> Result<Option<AuthUser>, AuthError> {
    let value = parse_json(body)?;
    match value.get("user") {
        Some(user) => user_from_value(user),
        None => Ok(None),
    }
}

/// Signup endpoint: a session when autoconfirm is on, otherwise the bare
/// user awaiting email confirmation.
fn parse_signup_user(body: &str) -> Result<Option<AuthUser>, AuthError> {
    let value = parse_json(body)?;
    if value.get("access_token").is_some() {
        return match value.get("user") {
            Some(user) => user_from_value(user),
            None => Ok(None),
        };
    }
    user_from_value(&value)
}

fn parse_error(status: u16, body: &str) -> AuthError {
    let value = serde_json::from_str::<Value>(body).unwrap_or(Value::Null);

    let message = ERROR_MESSAGE_FIELDS
        .iter()
        .find_map(|field| {
            value
                .get(*field)
                .and_then(Value::as_str)
                .filter(|msg| !msg.trim().is_empty())
        })
        .map_or_else(|| format!("HTTP {status}"), ToOwned::to_owned);

    let code = value
        .get("error_code")
        .and_then(Value::as_str)
        .or_else(|| value.get("error").and_then(Value::as_str))
        .map(ToOwned::to_owned);

    AuthError::Rejected { status, code, message }
}

#[cfg(test)]
#[path = "supabase_test.rs"]
mod tests;
