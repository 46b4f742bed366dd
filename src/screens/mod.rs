//! Terminal rendition of the login and registration screens.
//!
//! DESIGN
//! ======
//! Screens read input through [`Prompter`] and move between each other
//! through the [`Navigator`]. The shell loop dispatches on the current
//! route until a screen finishes the session (authenticated or quit).
//! Layout is plain text; there is nothing here beyond field collection,
//! flow submission, and route pushes.

pub mod login;
pub mod prompt;
pub mod register;

use auth::AuthUser;

use crate::flows::{LoginFlow, RegistrationFlow};
use crate::routes::{Navigator, Route};

pub use prompt::{DialoguerPrompter, Prompter};

#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// What a screen wants the shell to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Step {
    /// Re-render whatever route is now current.
    Continue,
    /// End the session, with the signed-in user if there is one.
    Exit(Option<AuthUser>),
}

/// Run screens until the user signs in or quits.
///
/// # Errors
///
/// Returns an error if reading input fails.
pub async fn run(
    prompter: &mut dyn Prompter,
    login_flow: &LoginFlow,
    register_flow: &RegistrationFlow,
    navigator: &mut dyn Navigator,
) -> Result<Option<AuthUser>, ScreenError> {
    loop {
        let step = match navigator.current() {
            Route::Login => login::show(prompter, login_flow, navigator).await?,
            Route::Register => register::show(prompter, register_flow, navigator).await?,
            Route::Home => {
                tracing::warn!("home route reached without a signed-in user");
                Step::Exit(None)
            }
        };
        if let Step::Exit(user) = step {
            return Ok(user);
        }
    }
}

#[cfg(test)]
#[path = "screens_test.rs"]
mod tests;
