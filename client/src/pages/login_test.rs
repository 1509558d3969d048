use super::*;

#[test]
fn login_message_covers_each_status() {
    assert_eq!(login_message(SessionStatus::Loading), "Checking session...");
    assert_eq!(login_message(SessionStatus::SignedIn), "You are already signed in.");
    assert_eq!(login_message(SessionStatus::SignedOut), "Sign in to manage the shop.");
}

#[test]
fn github_sign_in_path_matches_server_route() {
    assert_eq!(GITHUB_SIGN_IN_PATH, "/auth/github");
}
