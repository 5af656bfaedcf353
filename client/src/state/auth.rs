//! Authentication state observed by user-aware views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and identity-dependent components render against this value;
//! it is the only authentication fact the UI layer ever sees.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use claims::Claim;

/// Scheme label attached to identities established from a decoded token.
pub const JWT_AUTHENTICATION_SCHEME: &str = "jwt";

/// Whether a user is currently signed in and, if so, which claims apply.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthenticationState {
    /// No identity is present.
    #[default]
    Anonymous,
    /// A signed-in identity with its decoded claim set.
    Authenticated {
        /// Authentication-scheme label the identity was established under.
        scheme: String,
        /// Claim set decoded from the presented token. Names may repeat.
        claims: Vec<Claim>,
    },
}

impl AuthenticationState {
    /// Build an authenticated state under the [`JWT_AUTHENTICATION_SCHEME`].
    #[must_use]
    pub fn authenticated(claims: Vec<Claim>) -> Self {
        Self::Authenticated { scheme: JWT_AUTHENTICATION_SCHEME.to_owned(), claims }
    }

    /// Whether an identity is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// The scheme label, if an identity is present.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { scheme, .. } => Some(scheme),
        }
    }

    /// First claim value with the given name, if an identity is present.
    #[must_use]
    pub fn claim(&self, name: &str) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { claims, .. } => claims
                .iter()
                .find(|c| c.name == name)
                .map(|c| c.value.as_str()),
        }
    }

    /// All claim values with the given name, in decoded order.
    pub fn claims_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> {
        let claims: &[Claim] = match self {
            Self::Anonymous => &[],
            Self::Authenticated { claims, .. } => claims,
        };
        claims
            .iter()
            .filter(move |c| c.name == name)
            .map(|c| c.value.as_str())
    }
}
