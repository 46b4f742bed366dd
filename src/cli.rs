//! Command-line surface.
//!
//! `app` (the default) runs the interactive screens; `login` and `register`
//! run a single flow submission from arguments for scripting.

use clap::{Args, Parser, Subcommand};

use crate::flows::Outcome;
use crate::routes::Route;

pub const EXIT_OK: u8 = 0;
pub const EXIT_FAILED: u8 = 1;
pub const EXIT_NO_USER: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "rewards-hub", about = "Rewards Hub sign-in and registration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive login / registration screens.
    App(AppArgs),
    /// Sign in once and exit.
    Login(LoginArgs),
    /// Create an account once and exit.
    Register(RegisterArgs),
}

impl Default for Command {
    fn default() -> Self {
        Self::App(AppArgs { start: Route::Login })
    }
}

#[derive(Args, Debug)]
pub struct AppArgs {
    /// Screen to open first (`/` or `/register`).
    #[arg(long, default_value = "/", value_parser = parse_start_route)]
    pub start: Route,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,

    /// Prompted for when omitted.
    #[arg(long, env = "REWARDS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    /// Prompted for when omitted.
    #[arg(long, env = "REWARDS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

fn parse_start_route(raw: &str) -> Result<Route, String> {
    match Route::from_path(raw) {
        Some(route @ (Route::Login | Route::Register)) => Ok(route),
        Some(Route::Home) => Err("home requires signing in first".to_owned()),
        None => Err(format!("unknown route: {raw}")),
    }
}

/// Process exit status for a one-shot submission.
#[must_use]
pub fn exit_status(outcome: &Outcome) -> u8 {
    match outcome {
        Outcome::Authenticated(_) => EXIT_OK,
        Outcome::NoUser => EXIT_NO_USER,
        Outcome::Failed { .. } => EXIT_FAILED,
    }
}

/// Stdout line for a one-shot submission. Failures were already alerted by
/// the flow, so they yield nothing.
#[must_use]
pub fn one_shot_summary(outcome: &Outcome, verb: &str) -> Option<String> {
    match outcome {
        Outcome::Authenticated(user) => {
            let who = user.email.as_deref().unwrap_or(&user.id);
            Some(format!("{verb} as {who}."))
        }
        Outcome::NoUser => Some(format!("{verb}, but no account was returned.")),
        Outcome::Failed { .. } => None,
    }
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
