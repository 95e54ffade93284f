//! Decoded RASA-AUTH and RASA-SET statement shapes.
//!
//! These are the records the decoding collaborator hands to the stores:
//! already parsed, already signature-checked, already inside their validity
//! window. Nothing in this crate touches raw bytes or the wall clock.

use crate::asn::Asn;
use crate::set_name::SetName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Statement format version. Version 0 is the only one defined.
pub const STATEMENT_VERSION: u32 = 0;

/// Propagation scope attached to an authorized entry.
///
/// Advisory metadata for a BGP import-policy consumer (peer locking). It
/// never influences the authorized/unauthorized decision itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropagationScope {
    /// No propagation constraint.
    #[default]
    #[serde(rename = "unrestricted")]
    Unrestricted,
    /// Advise the containing AS to accept routes with this ASN only from
    /// direct BGP sessions.
    #[serde(rename = "directOnly")]
    DirectOnly,
}

impl fmt::Display for PropagationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrestricted => write!(f, "unrestricted"),
            Self::DirectOnly => write!(f, "directOnly"),
        }
    }
}

/// The entity that issued an authorization statement.
///
/// Exactly one of the two cases is ever set. Member ASes issue under their
/// ASN; nested AS-SETs issue under their set name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Issuer {
    /// An ASN authorizing its own inclusion.
    As(Asn),
    /// An AS-SET authorizing its inclusion as a nested member.
    Set(SetName),
}

impl fmt::Display for Issuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::As(asn) => write!(f, "{asn}"),
            Self::Set(name) => write!(f, "{name}"),
        }
    }
}

/// One AS-SET the issuer consents to be included in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizedEntry {
    /// Name of the containing AS-SET, exactly as published.
    pub as_set: SetName,
    /// Propagation constraint for this inclusion.
    #[serde(default)]
    pub propagation: PropagationScope,
}

impl AuthorizedEntry {
    /// Entry with the default (unrestricted) propagation scope.
    pub fn new(as_set: impl Into<SetName>) -> Self {
        Self {
            as_set: as_set.into(),
            propagation: PropagationScope::Unrestricted,
        }
    }

    /// Entry carrying a peer-lock (direct sessions only) constraint.
    pub fn direct_only(as_set: impl Into<SetName>) -> Self {
        Self {
            as_set: as_set.into(),
            propagation: PropagationScope::DirectOnly,
        }
    }
}

/// Opaque validity window of a published object.
///
/// The timestamps are kept as the GeneralizedTime / RFC 3339 strings they
/// were published with. The core never evaluates them against the wall
/// clock; enforcing the window is the decoding collaborator's job.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validity {
    /// Start of the validity window.
    pub not_before: String,
    /// End of the validity window.
    pub not_after: String,
}

impl Validity {
    pub fn new(not_before: impl Into<String>, not_after: impl Into<String>) -> Self {
        Self {
            not_before: not_before.into(),
            not_after: not_after.into(),
        }
    }

    /// Lexical window check for the decoding layer.
    ///
    /// RFC 3339 timestamps in the same offset order lexically, so a plain
    /// string comparison suffices. Empty bounds are treated as open.
    pub fn contains(&self, now: &str) -> bool {
        (self.not_before.is_empty() || self.not_before.as_str() <= now)
            && (self.not_after.is_empty() || now <= self.not_after.as_str())
    }
}

/// A decoded RASA-AUTH statement: one issuer consenting to inclusion in a
/// list of AS-SETs.
///
/// `authorized_in` order is irrelevant to matching, and duplicates are
/// permitted and idempotent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationStatement {
    /// Statement format version.
    pub version: u32,
    /// Who issued the statement.
    pub issuer: Issuer,
    /// AS-SETs the issuer consents to be included in.
    pub authorized_in: Vec<AuthorizedEntry>,
    /// When true, AS-SETs not listed here must be rejected rather than
    /// merely unendorsed. Surfaced to callers as metadata; does not change
    /// the matching outcome.
    pub strict_mode: bool,
    /// Validity window, opaque to the core.
    pub validity: Validity,
}

impl AuthorizationStatement {
    /// Statement issued by an ASN.
    pub fn by_asn(asn: Asn, authorized_in: Vec<AuthorizedEntry>) -> Self {
        Self {
            version: STATEMENT_VERSION,
            issuer: Issuer::As(asn),
            authorized_in,
            strict_mode: false,
            validity: Validity::default(),
        }
    }

    /// Statement issued by a (nested) AS-SET.
    pub fn by_set(set: impl Into<SetName>, authorized_in: Vec<AuthorizedEntry>) -> Self {
        Self {
            version: STATEMENT_VERSION,
            issuer: Issuer::Set(set.into()),
            authorized_in,
            strict_mode: false,
            validity: Validity::default(),
        }
    }

    /// Same statement with strict mode enabled.
    pub fn strict(mut self) -> Self {
        self.strict_mode = true;
        self
    }
}

/// Optional RASA-SET flags, passed through as metadata.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetFlags {
    /// Members of nested sets must not be inherited into this set.
    pub do_not_inherit: bool,
    /// This statement supersedes IRR data for the set.
    pub authoritative: bool,
}

/// A decoded RASA-SET statement: one AS-SET operator naming the set's
/// members.
///
/// Membership is a set: order and duplicates are immaterial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipStatement {
    /// Statement format version.
    pub version: u32,
    /// Name of the set this statement describes.
    pub as_set: SetName,
    /// The AS operating the set, when published.
    pub containing_as: Option<Asn>,
    /// Member ASNs, deduplicated.
    pub members: BTreeSet<Asn>,
    /// Nested member AS-SETs.
    pub nested_sets: BTreeSet<SetName>,
    /// Passthrough flags.
    pub flags: SetFlags,
    /// Validity window, opaque to the core.
    pub validity: Validity,
}

impl MembershipStatement {
    /// Statement with just a name and members; everything else defaulted.
    pub fn new(as_set: impl Into<SetName>, members: impl IntoIterator<Item = u32>) -> Self {
        Self {
            version: STATEMENT_VERSION,
            as_set: as_set.into(),
            containing_as: None,
            members: members.into_iter().map(Asn::new).collect(),
            nested_sets: BTreeSet::new(),
            flags: SetFlags::default(),
            validity: Validity::default(),
        }
    }
}
