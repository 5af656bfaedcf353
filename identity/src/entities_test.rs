use super::*;

// =============================================================================
// User::new
// =============================================================================

#[test]
fn new_user_normalizes_user_name() {
    let user = User::new("alice");
    assert_eq!(user.user_name.as_deref(), Some("alice"));
    assert_eq!(user.normalized_user_name.as_deref(), Some("ALICE"));
}

#[test]
fn new_user_generates_distinct_ids() {
    let a = User::new("alice");
    let b = User::new("alice");
    assert_ne!(a.id, b.id);
}

#[test]
fn new_user_has_fresh_stamps() {
    let user = User::new("alice");
    assert!(user.security_stamp.is_some());
    assert!(user.concurrency_stamp.is_some());
    assert_ne!(user.security_stamp, user.concurrency_stamp);
}

#[test]
fn new_user_starts_unconfirmed_and_unlocked() {
    let user = User::new("alice");
    assert!(!user.email_confirmed);
    assert!(!user.phone_number_confirmed);
    assert!(!user.two_factor_enabled);
    assert!(user.lockout_end.is_none());
    assert_eq!(user.access_failed_count, 0);
    assert!(user.password_hash.is_none());
}

#[test]
fn with_email_keeps_normalized_form_in_sync() {
    let user = User::new("alice").with_email("Alice@Example.com");
    assert_eq!(user.email.as_deref(), Some("Alice@Example.com"));
    assert_eq!(user.normalized_email.as_deref(), Some("ALICE@EXAMPLE.COM"));
}

// =============================================================================
// Role::new
// =============================================================================

#[test]
fn new_role_normalizes_name() {
    let role = Role::new("admin");
    assert_eq!(role.name.as_deref(), Some("admin"));
    assert_eq!(role.normalized_name.as_deref(), Some("ADMIN"));
}

#[test]
fn new_role_generates_distinct_ids_and_stamps() {
    let a = Role::new("admin");
    let b = Role::new("admin");
    assert_ne!(a.id, b.id);
    assert_ne!(a.concurrency_stamp, b.concurrency_stamp);
}
