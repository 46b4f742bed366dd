use super::*;

#[test]
fn paths_round_trip() {
    for route in [Route::Login, Route::Register, Route::Home] {
        assert_eq!(Route::from_path(route.path()), Some(route));
    }
}

#[test]
fn from_path_tolerates_trailing_slash_and_rejects_unknown() {
    assert_eq!(Route::from_path("/register/"), Some(Route::Register));
    assert_eq!(Route::from_path("/settings"), None);
}

#[test]
fn history_starts_at_login_root() {
    assert_eq!(History::new().current(), Route::Login);
}

#[test]
fn push_moves_current_route() {
    let mut history = History::new();
    history.push(Route::Register);
    assert_eq!(history.current(), Route::Register);
    history.push(Route::Login);
    assert_eq!(history.current(), Route::Login);
}

#[test]
fn toggling_between_screens_keeps_history_bounded() {
    let mut history = History::new();
    for _ in 0..50 {
        history.push(Route::Register);
        history.push(Route::Login);
    }
    assert_eq!(history.current(), Route::Login);
    assert_eq!(history.stack, vec![Route::Login]);

    history.push(Route::Register);
    assert_eq!(history.stack, vec![Route::Login, Route::Register]);
}

#[test]
fn push_of_new_route_grows_stack() {
    let mut history = History::new();
    history.push(Route::Register);
    history.push(Route::Home);
    assert_eq!(history.stack, vec![Route::Login, Route::Register, Route::Home]);
}

#[test]
fn display_uses_path() {
    assert_eq!(Route::Register.to_string(), "/register");
}
