use super::*;
use crate::flows::test_helpers::{LogCapture, MockAuth, Op, RecordingNotifier, rejected, user};
use auth::AuthError;

fn flow(mock: &Arc<MockAuth>, notifier: &Arc<RecordingNotifier>) -> RegistrationFlow {
    RegistrationFlow::new(mock.clone(), notifier.clone())
}

#[test]
fn credentials_drop_name() {
    let details = RegistrationDetails::new("Ada Lovelace", "ada@b.com", "pw");
    assert_eq!(details.credentials(), Credentials::new("ada@b.com", "pw"));
}

#[tokio::test]
async fn submit_sends_only_email_and_password_to_sign_up() {
    let mock = Arc::new(MockAuth::new(vec![Ok(Some(user("7")))]));
    let notifier = Arc::new(RecordingNotifier::default());

    flow(&mock, &notifier)
        .submit(&RegistrationDetails::new("Ada Lovelace", "ada@b.com", "pw"))
        .await;

    let calls = mock.calls();
    assert_eq!(calls, vec![(Op::SignUp, Credentials::new("ada@b.com", "pw"))]);
    let rendered = format!("{:?}", calls[0].1);
    assert!(!rendered.contains("Ada Lovelace"));
}

#[tokio::test]
async fn success_returns_user_without_alert() {
    let mock = Arc::new(MockAuth::new(vec![Ok(Some(user("7")))]));
    let notifier = Arc::new(RecordingNotifier::default());

    let outcome = flow(&mock, &notifier)
        .submit(&RegistrationDetails::new("Ada", "ada@b.com", "pw"))
        .await;

    assert_eq!(outcome, Outcome::Authenticated(user("7")));
    assert!(notifier.alerts().is_empty());
}

#[tokio::test]
async fn rejection_is_alerted_like_login() {
    let mock = Arc::new(MockAuth::new(vec![Err(rejected("User already registered"))]));
    let notifier = Arc::new(RecordingNotifier::default());

    let outcome = flow(&mock, &notifier)
        .submit(&RegistrationDetails::new("Ada", "ada@b.com", "pw"))
        .await;

    assert_eq!(outcome.alert(), Some("Registration failed: User already registered"));
    assert_eq!(notifier.alerts(), vec!["Registration failed: User already registered".to_owned()]);
}

#[tokio::test]
async fn messageless_error_alerts_generic_text() {
    let mock = Arc::new(MockAuth::new(vec![Err(AuthError::Unexpected)]));
    let notifier = Arc::new(RecordingNotifier::default());

    let outcome = flow(&mock, &notifier)
        .submit(&RegistrationDetails::new("Ada", "ada@b.com", "pw"))
        .await;

    assert_eq!(outcome.alert(), Some("Registration failed: An unexpected error occurred"));
}

#[tokio::test]
async fn success_without_user_is_no_user() {
    let mock = Arc::new(MockAuth::new(vec![Ok(None)]));
    let notifier = Arc::new(RecordingNotifier::default());

    let outcome = flow(&mock, &notifier)
        .submit(&RegistrationDetails::new("Ada", "ada@b.com", "pw"))
        .await;

    assert_eq!(outcome, Outcome::NoUser);
}

#[tokio::test]
async fn password_never_reaches_logs() {
    let capture = LogCapture::default();
    let _guard = capture.install();
    let mock = Arc::new(MockAuth::new(vec![Ok(Some(user("1"))), Err(rejected("User already registered"))]));
    let notifier = Arc::new(RecordingNotifier::default());
    let register = flow(&mock, &notifier);
    let details = RegistrationDetails::new("Ada", "a@b.com", "hunter2-s3cret");

    register.submit(&details).await;
    register.submit(&details).await;

    let logs = capture.contents();
    assert!(logs.contains("User already registered"));
    assert!(!logs.contains("hunter2-s3cret"));
}
