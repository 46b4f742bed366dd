//! Registration flow: account creation with email + password.

use std::sync::Arc;

use auth::{AuthService, Credentials};

use super::{FlowKind, Notifier, Outcome, settle};

/// Transient registration form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDetails {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegistrationDetails {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into(), password: password.into() }
    }

    /// The sign-up payload. `name` is not part of it.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.as_str(), self.password.as_str())
    }
}

#[derive(Clone)]
pub struct RegistrationFlow {
    auth: Arc<dyn AuthService>,
    notifier: Arc<dyn Notifier>,
}

impl RegistrationFlow {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthService>, notifier: Arc<dyn Notifier>) -> Self {
        Self { auth, notifier }
    }

    /// Sign up once with the entered email and password.
    pub async fn submit(&self, details: &RegistrationDetails) -> Outcome {
        tracing::debug!(email = %details.email, "submitting registration");
        // TODO: persist `details.name` to the user profile once a profile
        // write exists on the backend; it is collected but never sent.
        let result = self.auth.sign_up(&details.credentials()).await;
        settle(FlowKind::Registration, result, self.notifier.as_ref())
    }
}

#[cfg(test)]
#[path = "register_test.rs"]
mod tests;
