//! Login flow: email + password sign-in.

use std::sync::Arc;

use auth::{AuthService, Credentials};

use super::{FlowKind, Notifier, Outcome, settle};

/// Transient login form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

#[derive(Clone)]
pub struct LoginFlow {
    auth: Arc<dyn AuthService>,
    notifier: Arc<dyn Notifier>,
}

impl LoginFlow {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthService>, notifier: Arc<dyn Notifier>) -> Self {
        Self { auth, notifier }
    }

    /// Sign in once with the values exactly as entered.
    ///
    /// Overlapping calls are not coordinated; each reaches the backend.
    pub async fn submit(&self, credentials: &LoginCredentials) -> Outcome {
        tracing::debug!(email = %credentials.email, "submitting login");
        let request = Credentials::new(credentials.email.as_str(), credentials.password.as_str());
        let result = self.auth.sign_in_with_password(&request).await;
        settle(FlowKind::Login, result, self.notifier.as_ref())
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;
