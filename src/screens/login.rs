//! Login screen.

use crate::flows::{LoginCredentials, LoginFlow, Outcome};
use crate::routes::{Navigator, Route};

use super::{Prompter, ScreenError, Step};

pub(crate) const ACTIONS: [&str; 3] = ["Sign In", "Sign up", "Quit"];

const SIGN_IN: usize = 0;
const SIGN_UP: usize = 1;

pub(crate) async fn show(
    prompter: &mut dyn Prompter,
    flow: &LoginFlow,
    navigator: &mut dyn Navigator,
) -> Result<Step, ScreenError> {
    prompter.say("");
    prompter.say("★ Rewards Hub");
    prompter.say("Welcome back");
    prompter.say("Sign in to continue");

    match prompter.select("Don't have an account? Choose Sign up", &ACTIONS)? {
        SIGN_IN => {
            let credentials = LoginCredentials {
                email: prompter.text("Email")?,
                password: prompter.secret("Password")?,
            };
            match flow.submit(&credentials).await {
                Outcome::Authenticated(user) => {
                    navigator.push(Route::Home);
                    Ok(Step::Exit(Some(user)))
                }
                Outcome::NoUser => {
                    prompter.say("Sign-in finished but no account was returned.");
                    Ok(Step::Continue)
                }
                Outcome::Failed { .. } => Ok(Step::Continue),
            }
        }
        SIGN_UP => {
            navigator.push(Route::Register);
            Ok(Step::Continue)
        }
        _ => Ok(Step::Exit(None)),
    }
}
