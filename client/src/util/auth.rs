//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authorization-aware views render against one `RwSignal` of the current
//! authentication state; this module wires that signal to the provider so a
//! login/logout notification invalidates every view that reads it.

use std::rc::Rc;

use leptos::prelude::*;

use crate::state::auth::AuthenticationState;
use crate::state::provider::{AuthStateProvider, SubscriptionId};
use crate::util::token_store::TokenStore;

/// Drive `state` from the provider: seed it with the stored-token query and
/// keep it current from the state-changed signal.
///
/// The seeding query runs as a spawned task; a failed query (broken storage,
/// malformed token) is logged and leaves the signal untouched rather than
/// crashing hydration. Returns the subscription handle so callers tied to a
/// component lifetime can unsubscribe on cleanup.
pub fn install_auth_signal<S>(
    provider: &Rc<AuthStateProvider<S>>,
    state: RwSignal<AuthenticationState>,
) -> SubscriptionId
where
    S: TokenStore + 'static,
{
    let subscription = provider.subscribe(move |next| state.set(next.clone()));

    let provider = Rc::clone(provider);
    leptos::task::spawn_local(async move {
        match provider.authentication_state().await {
            Ok(initial) => state.set(initial),
            Err(e) => leptos::logging::warn!("authentication state query failed: {e}"),
        }
    });

    subscription
}
