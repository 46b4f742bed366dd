//! Credential-submission flows.
//!
//! DESIGN
//! ======
//! Each flow makes one auth call per submit and settles the result into an
//! [`Outcome`]. Login and registration share the settle step, so both report
//! failure to the user the same way: one alert through the [`Notifier`] and
//! one `error` log. Navigation is left to the caller.

pub mod login;
pub mod register;

use auth::{AuthError, AuthUser};

pub use login::{LoginCredentials, LoginFlow};
pub use register::{RegistrationDetails, RegistrationFlow};

const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

// =============================================================================
// OUTCOME
// =============================================================================

/// Result of a single submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The backend returned a user.
    Authenticated(AuthUser),
    /// The backend reported success but returned no user. Callers decide
    /// what this means (pending confirmation, misconfigured backend, ...).
    NoUser,
    /// The submission failed; `message` is what the user was shown.
    Failed { message: String },
}

impl Outcome {
    /// User-visible failure text, if this outcome is a failure.
    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

// =============================================================================
// NOTIFIER
// =============================================================================

/// Surface for blocking user-visible messages.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Writes alerts to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        eprintln!("\n  ! {message}\n");
    }
}

// =============================================================================
// SETTLE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FlowKind {
    Login,
    Registration,
}

impl FlowKind {
    fn failure_prefix(self) -> &'static str {
        match self {
            Self::Login => "Login failed: ",
            Self::Registration => "Registration failed: ",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Registration => "registration",
        }
    }
}

/// Compose the alert text for a failed submission.
pub(crate) fn failure_message(kind: FlowKind, error: &AuthError) -> String {
    let detail = error
        .message()
        .unwrap_or_else(|| UNEXPECTED_ERROR_MESSAGE.to_owned());
    format!("{}{detail}", kind.failure_prefix())
}

/// Turn an auth call result into an [`Outcome`], logging it and alerting on
/// failure.
pub(crate) fn settle(
    kind: FlowKind,
    result: Result<Option<AuthUser>, AuthError>,
    notifier: &dyn Notifier,
) -> Outcome {
    match result {
        Ok(Some(user)) => {
            tracing::info!(flow = kind.label(), user_id = %user.id, email = ?user.email, "auth succeeded");
            Outcome::Authenticated(user)
        }
        Ok(None) => {
            tracing::warn!(flow = kind.label(), "auth succeeded without a user");
            Outcome::NoUser
        }
        Err(error) => {
            tracing::error!(flow = kind.label(), code = error.error_code(), error = %error, "auth failed");
            let message = failure_message(kind, &error);
            notifier.alert(&message);
            Outcome::Failed { message }
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
