//! Immutable statement stores.
//!
//! Each store is built wholesale from an iterator of decoded statements and
//! never mutated afterwards. A (re)load produces a brand-new store; callers
//! hold a handle and swap it, they never patch a live store in place. That
//! makes every query a pure function of a snapshot, safe for concurrent
//! readers with no coordination.

pub mod auth;
pub mod membership;

pub use auth::AuthorizationStore;
pub use membership::{MembershipStore, SetRecord};
