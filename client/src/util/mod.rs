//! Utility helpers shared across client auth modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from provider logic
//! to improve reuse and testability.

pub mod auth;
pub mod token_store;
