//! Row shapes for the identity tables.
//!
//! DESIGN
//! ======
//! One flat struct per table, mirroring the migration columns exactly. The
//! `new` constructors initialize a fresh row the way the identity manager
//! expects one (generated string id, uppercase normalized name, fresh
//! stamps); everything after that initial shape is the manager's business.

#[cfg(test)]
#[path = "entities_test.rs"]
mod entities_test;

use time::OffsetDateTime;
use uuid::Uuid;

/// A persisted user account.
#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct User {
    /// String primary key.
    pub id: String,
    /// Login name as entered by the user.
    pub user_name: Option<String>,
    /// Uppercased login name used for uniqueness lookups.
    pub normalized_user_name: Option<String>,
    /// Email address as entered by the user.
    pub email: Option<String>,
    /// Uppercased email used for lookups.
    pub normalized_email: Option<String>,
    /// Whether the email address has been confirmed.
    pub email_confirmed: bool,
    /// Salted hash of the account password, if one is set.
    pub password_hash: Option<String>,
    /// Opaque value rotated whenever credentials change; outstanding
    /// sessions carrying an older stamp are invalid.
    pub security_stamp: Option<String>,
    /// Opaque value rotated on every row update for optimistic concurrency.
    pub concurrency_stamp: Option<String>,
    /// Phone number, if provided.
    pub phone_number: Option<String>,
    /// Whether the phone number has been confirmed.
    pub phone_number_confirmed: bool,
    /// Whether two-factor authentication is enabled.
    pub two_factor_enabled: bool,
    /// Instant the current lockout lapses, if the account is locked out.
    pub lockout_end: Option<OffsetDateTime>,
    /// Whether this account participates in lockout counting at all.
    pub lockout_enabled: bool,
    /// Consecutive failed sign-in attempts since the last success.
    pub access_failed_count: i32,
}

impl User {
    /// A fresh, unpersisted account row for the given login name.
    #[must_use]
    pub fn new(user_name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_name: Some(user_name.to_owned()),
            normalized_user_name: Some(user_name.to_uppercase()),
            email: None,
            normalized_email: None,
            email_confirmed: false,
            password_hash: None,
            security_stamp: Some(Uuid::new_v4().simple().to_string()),
            concurrency_stamp: Some(Uuid::new_v4().to_string()),
            phone_number: None,
            phone_number_confirmed: false,
            two_factor_enabled: false,
            lockout_end: None,
            lockout_enabled: false,
            access_failed_count: 0,
        }
    }

    /// Attach an email address, keeping the normalized form in sync.
    #[must_use]
    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_owned());
        self.normalized_email = Some(email.to_uppercase());
        self
    }
}

/// A persisted role.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Role {
    /// String primary key.
    pub id: String,
    /// Role name as entered.
    pub name: Option<String>,
    /// Uppercased role name used for uniqueness lookups.
    pub normalized_name: Option<String>,
    /// Opaque value rotated on every row update for optimistic concurrency.
    pub concurrency_stamp: Option<String>,
}

impl Role {
    /// A fresh, unpersisted role row for the given name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: Some(name.to_owned()),
            normalized_name: Some(name.to_uppercase()),
            concurrency_stamp: Some(Uuid::new_v4().to_string()),
        }
    }
}

/// Membership edge between a user and a role.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct UserRole {
    pub user_id: String,
    pub role_id: String,
}

/// A claim granted directly to a user.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct UserClaim {
    pub id: i32,
    pub user_id: String,
    pub claim_type: Option<String>,
    pub claim_value: Option<String>,
}

/// An external login (provider + provider-side key) linked to a user.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct UserLogin {
    pub login_provider: String,
    pub provider_key: String,
    pub provider_display_name: Option<String>,
    pub user_id: String,
}

/// A named token a provider stored for a user (e.g. a refresh token).
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct UserToken {
    pub user_id: String,
    pub login_provider: String,
    pub name: String,
    pub value: Option<String>,
}

/// A claim granted to every member of a role.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct RoleClaim {
    pub id: i32,
    pub role_id: String,
    pub claim_type: Option<String>,
    pub claim_value: Option<String>,
}
