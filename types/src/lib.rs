//! Fundamental types for RASA bidirectional AS-SET authorization.
//!
//! This crate defines the decoded statement shapes shared across the rest of
//! the workspace: ASNs, AS-SET names, authorization statements published by
//! member ASes, and membership statements published by AS-SET operators.

pub mod asn;
pub mod set_name;
pub mod statement;

pub use asn::Asn;
pub use set_name::SetName;
pub use statement::{
    AuthorizationStatement, AuthorizedEntry, Issuer, MembershipStatement, PropagationScope,
    SetFlags, Validity,
};
