//! Registration screen.

use crate::flows::{Outcome, RegistrationDetails, RegistrationFlow};
use crate::routes::{Navigator, Route};

use super::{Prompter, ScreenError, Step};

pub(crate) const ACTIONS: [&str; 3] = ["Sign Up", "Login", "Quit"];

const SIGN_UP: usize = 0;
const LOGIN: usize = 1;

pub(crate) async fn show(
    prompter: &mut dyn Prompter,
    flow: &RegistrationFlow,
    navigator: &mut dyn Navigator,
) -> Result<Step, ScreenError> {
    prompter.say("");
    prompter.say("★ Create Account");

    match prompter.select("Already have an account? Choose Login", &ACTIONS)? {
        SIGN_UP => {
            let details = RegistrationDetails {
                name: prompter.text("Full Name")?,
                email: prompter.text("Email")?,
                password: prompter.secret("Password")?,
            };
            if let Outcome::Authenticated(user) = flow.submit(&details).await {
                let who = user.email.as_deref().unwrap_or(&user.id);
                prompter.say(&format!("Account created for {who}."));
            }
            Ok(Step::Continue)
        }
        LOGIN => {
            navigator.push(Route::Login);
            Ok(Step::Continue)
        }
        _ => Ok(Step::Exit(None)),
    }
}
