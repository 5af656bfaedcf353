//! Identity persistence context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Declares how user identity records map onto relational storage: the pool
//! plus embedded schema migrations (`db`) and the row shapes those tables
//! hold (`entities`). Account lifecycle (creating, updating, deleting rows)
//! belongs to the identity-management service that owns this database; this
//! crate only declares the shape it operates on.

pub mod db;
pub mod entities;
