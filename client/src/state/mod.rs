//! Client-observable authentication state and its provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` defines the state value user-aware views render against; `provider`
//! owns the storage-backed query and the state-changed fan-out that keeps
//! those views current after login and logout.

pub mod auth;
pub mod provider;
