//! Outcome value objects produced by the evaluators.
//!
//! Each check produces a fresh value; nothing here is shared or mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an authorization check answered the way it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthReason {
    /// The ASN never published a RASA-AUTH statement; absence is implicit
    /// consent.
    NoStatement,
    /// The target set appears in the issuer's authorized list.
    Authorized,
    /// A statement exists but its authorized list is empty.
    EmptyAuthorizedList,
    /// A statement exists and has entries, but none match the target set.
    NotInAuthorizedList,
}

impl fmt::Display for AuthReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NoStatement => "no authorization statement for this ASN",
            Self::Authorized => "asset authorized",
            Self::EmptyAuthorizedList => "no RASA-AUTH for this ASN",
            Self::NotInAuthorizedList => "asset not in authorized list",
        };
        write!(f, "{text}")
    }
}

/// Result of one authorization check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthOutcome {
    /// Whether the issuer consents to the inclusion.
    pub authorized: bool,
    /// Why.
    pub reason: AuthReason,
    /// Whether any of the issuer's statements carried the strictMode flag.
    /// Metadata for downstream policy (escalate a violation to a hard
    /// failure); it never changes `authorized` itself.
    pub strict_mode: bool,
}

impl AuthOutcome {
    pub(crate) fn allow(reason: AuthReason, strict_mode: bool) -> Self {
        Self {
            authorized: true,
            reason,
            strict_mode,
        }
    }

    pub(crate) fn deny(reason: AuthReason, strict_mode: bool) -> Self {
        Self {
            authorized: false,
            reason,
            strict_mode,
        }
    }
}

/// Why a membership check answered the way it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipReason {
    /// The AS-SET never published a RASA-SET statement; absence cannot deny
    /// membership.
    NoStatement,
    /// The ASN appears in the merged member set.
    Member,
    /// The ASN does not appear in the merged member set.
    NotInMemberList,
}

impl fmt::Display for MembershipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NoStatement => "no RASA-SET for this AS-SET",
            Self::Member => "ASN in member list",
            Self::NotInMemberList => "ASN not in member list",
        };
        write!(f, "{text}")
    }
}

/// Result of one membership check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipOutcome {
    /// Whether the set operator lists the ASN.
    pub is_member: bool,
    /// Why.
    pub reason: MembershipReason,
}

/// Reconciled result of one bidirectional check.
///
/// The two booleans are deliberately kept separate: all four combinations
/// are meaningful. A caller that wants a strict "both must agree" policy
/// combines them itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationVerdict {
    /// The member's side: does the ASN consent?
    pub authorized: bool,
    /// The operator's side: is the ASN listed?
    pub is_member: bool,
    /// Why the authorization side answered as it did.
    pub auth_reason: AuthReason,
    /// Why the membership side answered as it did.
    pub member_reason: MembershipReason,
    /// strictMode metadata from the authorization side.
    pub strict_mode: bool,
}
