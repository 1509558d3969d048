use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

fn config() -> GitHubConfig {
    GitHubConfig {
        client_id: "id123".into(),
        client_secret: "secret456".into(),
        redirect_uri: "http://localhost:3000/auth/github/callback".into(),
    }
}

// =============================================================================
// GitHubConfig::from_lookup
// =============================================================================

#[test]
fn from_lookup_all_set_returns_some() {
    let lookup = lookup_from(&[
        ("GITHUB_CLIENT_ID", "id123"),
        ("GITHUB_CLIENT_SECRET", "secret456"),
        ("GITHUB_REDIRECT_URI", "http://localhost:3000/auth/github/callback"),
    ]);
    assert_eq!(GitHubConfig::from_lookup(lookup), Some(config()));
}

#[test]
fn from_lookup_missing_secret_returns_none() {
    let lookup = lookup_from(&[("GITHUB_CLIENT_ID", "id123"), ("GITHUB_REDIRECT_URI", "http://x")]);
    assert!(GitHubConfig::from_lookup(lookup).is_none());
}

#[test]
fn from_lookup_blank_value_returns_none() {
    let lookup = lookup_from(&[
        ("GITHUB_CLIENT_ID", "   "),
        ("GITHUB_CLIENT_SECRET", "secret456"),
        ("GITHUB_REDIRECT_URI", "http://x"),
    ]);
    assert!(GitHubConfig::from_lookup(lookup).is_none());
}

#[test]
fn from_lookup_all_missing_returns_none() {
    assert!(GitHubConfig::from_lookup(|_| None).is_none());
}

// =============================================================================
// authorize_url
// =============================================================================

#[test]
fn authorize_url_contains_client_id_scope_and_state() {
    let url = config().authorize_url("abc123");
    assert!(url.starts_with("https://github.com/login/oauth/authorize?"));
    assert!(url.contains("client_id=id123"));
    assert!(url.contains("scope=read%3Auser"));
    assert!(url.contains("state=abc123"));
}

#[test]
fn authorize_url_encodes_redirect_uri() {
    let url = config().authorize_url("s");
    assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fauth%2Fgithub%2Fcallback"));
}

// =============================================================================
// Token + profile parsing
// =============================================================================

#[test]
fn parse_token_response_extracts_access_token() {
    let token = parse_token_response(r#"{"access_token":"gho_abc","token_type":"bearer"}"#).unwrap();
    assert_eq!(token, "gho_abc");
}

#[test]
fn parse_token_response_error_body_is_token_exchange_error() {
    let err = parse_token_response(r#"{"error":"bad_verification_code"}"#).unwrap_err();
    assert!(matches!(err, AuthError::TokenExchange(msg) if msg.contains("bad_verification_code")));
}

#[test]
fn display_name_prefers_profile_name() {
    let user = GitHubUser { id: 1, login: "octocat".into(), name: Some("Mona Lisa".into()), avatar_url: None };
    assert_eq!(user.display_name(), "Mona Lisa");
}

#[test]
fn display_name_falls_back_to_login() {
    let user = GitHubUser { id: 1, login: "octocat".into(), name: Some(String::new()), avatar_url: None };
    assert_eq!(user.display_name(), "octocat");
    let user = GitHubUser { id: 1, login: "octocat".into(), name: None, avatar_url: None };
    assert_eq!(user.display_name(), "octocat");
}
