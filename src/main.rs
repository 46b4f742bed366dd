mod cli;
mod flows;
mod routes;
mod screens;

use std::process::ExitCode;
use std::sync::Arc;

use auth::{AuthConfig, AuthError, AuthService, SupabaseAuthClient};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use flows::{LoginCredentials, LoginFlow, Notifier, Outcome, RegistrationDetails, RegistrationFlow, TerminalNotifier};
use routes::{History, Navigator};
use screens::{DialoguerPrompter, Prompter, ScreenError};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("auth setup failed: {0}")]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Screen(#[from] ScreenError),
}

#[tokio::main]
async fn main() -> Result<ExitCode, AppError> {
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("ignoring unreadable .env: {e}");
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = AuthConfig::from_env()?;
    tracing::debug!(url = %config.url, "auth backend configured");
    let auth: Arc<dyn AuthService> = Arc::new(SupabaseAuthClient::new(config)?);
    let notifier: Arc<dyn Notifier> = Arc::new(TerminalNotifier);
    let login = LoginFlow::new(Arc::clone(&auth), Arc::clone(&notifier));
    let register = RegistrationFlow::new(auth, notifier);

    let mut prompter = DialoguerPrompter;

    match cli.command.unwrap_or_default() {
        Command::App(args) => {
            let mut history = History::new();
            if args.start != history.current() {
                history.push(args.start);
            }
            match screens::run(&mut prompter, &login, &register, &mut history).await? {
                Some(user) => {
                    let who = user.email.as_deref().unwrap_or(&user.id);
                    println!("Signed in as {who}.");
                }
                None => tracing::info!("session ended without sign-in"),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Login(args) => {
            let password = match args.password {
                Some(password) => password,
                None => prompter.secret("Password")?,
            };
            let outcome = login.submit(&LoginCredentials::new(args.email, password)).await;
            report_one_shot(&outcome, "Signed in");
            Ok(ExitCode::from(cli::exit_status(&outcome)))
        }
        Command::Register(args) => {
            let password = match args.password {
                Some(password) => password,
                None => prompter.secret("Password")?,
            };
            let details = RegistrationDetails::new(args.name, args.email, password);
            let outcome = register.submit(&details).await;
            report_one_shot(&outcome, "Registered");
            Ok(ExitCode::from(cli::exit_status(&outcome)))
        }
    }
}

fn report_one_shot(outcome: &Outcome, verb: &str) {
    if let Some(message) = outcome.alert() {
        tracing::debug!(alert = message, "one-shot submission failed");
    }
    if let Some(line) = cli::one_shot_summary(outcome, verb) {
        println!("{line}");
    }
}
