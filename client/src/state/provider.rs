//! Storage-backed authentication state provider.
//!
//! ARCHITECTURE
//! ============
//! The provider answers on-demand state queries by reading the persisted
//! token, and pushes state changes to subscribers after login/logout. The two
//! paths are independent: queries touch storage (and purge an expired token),
//! notifications only decode and fan out. Persisting the token around a
//! login is the host application's job.
//!
//! TRADE-OFFS
//! ==========
//! Expiry is detected lazily at query time rather than by a timer; a signed-in
//! view whose token lapses stays rendered until the next query or an explicit
//! logout.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use claims::DecodeError;

use crate::state::auth::AuthenticationState;
use crate::util::token_store::{StorageError, TOKEN_STORAGE_KEY, TokenStore};

/// Error resolving the current authentication state.
#[derive(Debug, thiserror::Error)]
pub enum AuthStateError {
    /// The token store could not be read or mutated.
    #[error("token storage failed: {0}")]
    Storage(#[from] StorageError),
    /// A stored token was present but could not be decoded. The token is
    /// left in place; a malformed token is an application bug, not a
    /// signed-out user.
    #[error("stored token could not be decoded: {0}")]
    Decode(#[from] DecodeError),
}

/// Handle identifying one subscriber registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

struct Subscriber {
    id: SubscriptionId,
    callback: Rc<dyn Fn(&AuthenticationState)>,
}

/// Supplies the current [`AuthenticationState`] on demand and broadcasts
/// state changes after login/logout events.
pub struct AuthStateProvider<S> {
    store: S,
    subscribers: RefCell<Vec<Subscriber>>,
    next_subscription: Cell<u64>,
}

impl<S: TokenStore> AuthStateProvider<S> {
    /// Build a provider over the given token store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            subscribers: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
        }
    }

    /// Resolve the current authentication state from the persisted token.
    ///
    /// An absent or empty token is an anonymous user. An expired token is
    /// treated identically to no token and is purged from storage as a side
    /// effect; that purge is the only storage mutation this provider ever
    /// performs.
    ///
    /// # Errors
    ///
    /// Propagates storage failures and decode failures of a present token;
    /// neither is locally recovered.
    pub async fn authentication_state(&self) -> Result<AuthenticationState, AuthStateError> {
        let Some(token) = self.store.get(TOKEN_STORAGE_KEY).await? else {
            return Ok(AuthenticationState::Anonymous);
        };
        if token.is_empty() {
            return Ok(AuthenticationState::Anonymous);
        }

        let decoded = claims::decode(&token)?;
        if decoded.is_expired(unix_now_secs()) {
            self.store.remove(TOKEN_STORAGE_KEY).await?;
            return Ok(AuthenticationState::Anonymous);
        }

        Ok(AuthenticationState::authenticated(decoded.claims))
    }

    /// Announce a completed login to all subscribers.
    ///
    /// Decodes `token` (no expiry check; the caller just received it) and
    /// publishes the resulting authenticated state. Storage is not touched;
    /// the host application persists the token before calling this.
    ///
    /// # Errors
    ///
    /// Returns the decode failure unpublished if `token` is malformed.
    pub fn notify_user_authentication(&self, token: &str) -> Result<(), DecodeError> {
        let decoded = claims::decode(token)?;
        self.publish(&AuthenticationState::authenticated(decoded.claims));
        Ok(())
    }

    /// Announce a logout to all subscribers, unconditionally.
    pub fn notify_user_logout(&self) {
        self.publish(&AuthenticationState::Anonymous);
    }

    /// Register a callback invoked with every published state change.
    ///
    /// Callbacks run synchronously in registration order. Only the latest
    /// value is delivered; there is no replay of past states.
    pub fn subscribe(&self, callback: impl Fn(&AuthenticationState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.subscribers.borrow_mut().push(Subscriber {
            id,
            callback: Rc::new(callback),
        });
        id
    }

    /// Drop a subscriber registration. Returns whether it was present.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        subscribers.len() != before
    }

    fn publish(&self, state: &AuthenticationState) {
        // Snapshot the registry so callbacks may subscribe/unsubscribe
        // mid-fan-out without poisoning the borrow.
        let snapshot: Vec<Rc<dyn Fn(&AuthenticationState)>> = self
            .subscribers
            .borrow()
            .iter()
            .map(|s| Rc::clone(&s.callback))
            .collect();
        for callback in snapshot {
            callback(state);
        }
    }
}

/// Current UTC time in whole Unix seconds.
#[allow(clippy::cast_possible_truncation)]
fn unix_now_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}
