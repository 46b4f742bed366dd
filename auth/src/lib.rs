//! Auth service boundary shared by the login and registration flows.
//!
//! This crate owns the provider-neutral types (`Credentials`, `AuthUser`,
//! `AuthError`) and the [`AuthService`] trait the flows consume. The hosted
//! backend client lives in [`supabase`]; tests swap in their own doubles.

pub mod config;
pub mod supabase;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use config::{AuthConfig, AuthTimeouts};
pub use supabase::SupabaseAuthClient;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by auth client operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The auth backend answered with an error body (bad credentials,
    /// duplicate signup, server fault).
    #[error("{message}")]
    Rejected {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// The HTTP request never produced a response.
    #[error("auth request failed: {0}")]
    Request(String),

    /// A success response body could not be decoded.
    #[error("auth response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// A required configuration variable is not set.
    #[error("missing config: env var {var} not set")]
    MissingConfig { var: String },

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// Failure with no usable description.
    #[error("unexpected auth failure")]
    Unexpected,
}

impl AuthError {
    /// Human-readable description, or `None` when the failure carried none.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Unexpected => None,
            other => Some(other.to_string()),
        }
    }

    /// Stable code for structured logs.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => "E_AUTH_REJECTED",
            Self::Request(_) => "E_AUTH_REQUEST",
            Self::Parse(_) => "E_AUTH_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::MissingConfig { .. } => "E_MISSING_CONFIG",
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::Unexpected => "E_UNEXPECTED",
        }
    }
}

// =============================================================================
// CREDENTIALS & USER
// =============================================================================

/// Email + password pair sent to the auth backend.
///
/// This is the whole payload for both sign-in and sign-up; nothing else
/// can ride along.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// User record as returned by the auth backend. Opaque to callers beyond
/// display and logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub email_confirmed_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

// =============================================================================
// AUTH SERVICE TRAIT
// =============================================================================

/// The two auth operations the flows consume. Enables mocking in tests.
///
/// `Ok(None)` means the backend reported success without a user.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the backend rejects the credentials or the
    /// request cannot complete.
    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<Option<AuthUser>, AuthError>;

    /// Create an account with email and password.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the backend rejects the signup or the
    /// request cannot complete.
    async fn sign_up(&self, credentials: &Credentials) -> Result<Option<AuthUser>, AuthError>;
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
