//! Browser-side authentication state for identity-aware views.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host application persists an issued token in `localStorage` after
//! login; this crate turns that stored token into an observable
//! [`state::auth::AuthenticationState`] that authorization-aware views can
//! query and subscribe to. Token decoding is display-only: nothing here
//! verifies a signature, so the server remains the authorization boundary.

pub mod state;
pub mod util;
