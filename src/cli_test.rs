use super::*;
use crate::flows::test_helpers::user;
use clap::CommandFactory;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn no_subcommand_defaults_to_app_at_login() {
    let cli = Cli::try_parse_from(["rewards-hub"]).unwrap();
    assert!(cli.command.is_none());
    let Command::App(args) = Command::default() else {
        panic!("default command should be app");
    };
    assert_eq!(args.start, Route::Login);
}

#[test]
fn app_can_start_on_register() {
    let cli = Cli::try_parse_from(["rewards-hub", "app", "--start", "/register"]).unwrap();
    let Some(Command::App(args)) = cli.command else {
        panic!("expected app command");
    };
    assert_eq!(args.start, Route::Register);
}

#[test]
fn app_rejects_home_and_unknown_routes() {
    assert!(Cli::try_parse_from(["rewards-hub", "app", "--start", "/home"]).is_err());
    assert!(Cli::try_parse_from(["rewards-hub", "app", "--start", "/settings"]).is_err());
}

#[test]
fn register_takes_name_email_and_password() {
    let cli = Cli::try_parse_from([
        "rewards-hub",
        "register",
        "--name",
        "Ada",
        "--email",
        "ada@b.com",
        "--password",
        "pw",
    ])
    .unwrap();
    let Some(Command::Register(args)) = cli.command else {
        panic!("expected register command");
    };
    assert_eq!(args.name, "Ada");
    assert_eq!(args.email, "ada@b.com");
    assert_eq!(args.password.as_deref(), Some("pw"));
}

#[test]
fn login_requires_email() {
    assert!(Cli::try_parse_from(["rewards-hub", "login"]).is_err());
}

#[test]
fn exit_status_per_outcome() {
    assert_eq!(exit_status(&Outcome::Authenticated(user("1"))), EXIT_OK);
    assert_eq!(exit_status(&Outcome::NoUser), EXIT_NO_USER);
    assert_eq!(exit_status(&Outcome::Failed { message: "Login failed: x".into() }), EXIT_FAILED);
}

#[test]
fn one_shot_summary_names_signed_in_account() {
    let outcome = Outcome::Authenticated(user("1"));
    assert_eq!(one_shot_summary(&outcome, "Signed in").as_deref(), Some("Signed in as a@b.com."));
}

#[test]
fn one_shot_summary_falls_back_to_user_id() {
    let mut bare = user("42");
    bare.email = None;
    assert_eq!(
        one_shot_summary(&Outcome::Authenticated(bare), "Registered").as_deref(),
        Some("Registered as 42.")
    );
}

#[test]
fn one_shot_summary_reports_missing_account() {
    assert_eq!(
        one_shot_summary(&Outcome::NoUser, "Registered").as_deref(),
        Some("Registered, but no account was returned.")
    );
}

#[test]
fn one_shot_summary_is_silent_on_failure() {
    let failed = Outcome::Failed { message: "Login failed: Invalid login credentials".into() };
    assert_eq!(one_shot_summary(&failed, "Signed in"), None);
}
