use super::*;

#[test]
fn default_state_is_anonymous() {
    assert_eq!(AuthenticationState::default(), AuthenticationState::Anonymous);
    assert!(!AuthenticationState::Anonymous.is_authenticated());
}

#[test]
fn authenticated_uses_jwt_scheme() {
    let state = AuthenticationState::authenticated(vec![Claim::new("sub", "alice")]);
    assert!(state.is_authenticated());
    assert_eq!(state.scheme(), Some("jwt"));
}

#[test]
fn anonymous_has_no_scheme_or_claims() {
    let state = AuthenticationState::Anonymous;
    assert_eq!(state.scheme(), None);
    assert_eq!(state.claim("sub"), None);
    assert_eq!(state.claims_named("role").count(), 0);
}

#[test]
fn claim_returns_first_match() {
    let state = AuthenticationState::authenticated(vec![
        Claim::new("role", "admin"),
        Claim::new("role", "editor"),
    ]);
    assert_eq!(state.claim("role"), Some("admin"));
}

#[test]
fn claims_named_preserves_decoded_order() {
    let state = AuthenticationState::authenticated(vec![
        Claim::new("role", "admin"),
        Claim::new("sub", "alice"),
        Claim::new("role", "editor"),
    ]);
    let roles: Vec<&str> = state.claims_named("role").collect();
    assert_eq!(roles, vec!["admin", "editor"]);
}
