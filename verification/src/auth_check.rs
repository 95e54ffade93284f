//! Authorization evaluator — the RASA-AUTH side of verification.

use crate::outcome::{AuthOutcome, AuthReason};
use rasa_store::AuthorizationStore;
use rasa_types::{Asn, AuthorizationStatement, PropagationScope, SetName};

pub struct AuthorizationEvaluator;

impl AuthorizationEvaluator {
    /// Does `asn` authorize its inclusion in `as_set`?
    ///
    /// An ASN with no statement at all is authorized by default: RASA-AUTH
    /// is opt-in, and its absence must not break memberships that predate
    /// it. Once a statement exists, the answer is driven purely by an exact
    /// byte match against the union of its authorized entries.
    pub fn is_authorized(
        &self,
        store: &AuthorizationStore,
        asn: Asn,
        as_set: &SetName,
    ) -> AuthOutcome {
        let statements = store.statements_for_asn(asn);
        if statements.is_empty() {
            return AuthOutcome::allow(AuthReason::NoStatement, false);
        }
        Self::match_statements(statements, as_set)
    }

    /// Does nested AS-SET `nested` authorize its inclusion in `parent`?
    ///
    /// Same rules as [`is_authorized`](Self::is_authorized), keyed by the
    /// AS-SET issuer instead of an ASN.
    pub fn is_set_authorized(
        &self,
        store: &AuthorizationStore,
        nested: &SetName,
        parent: &SetName,
    ) -> AuthOutcome {
        let statements = store.statements_for_set(nested);
        if statements.is_empty() {
            return AuthOutcome::allow(AuthReason::NoStatement, false);
        }
        Self::match_statements(statements, parent)
    }

    /// AS-SETs the ASN authorized with a `directOnly` propagation scope.
    ///
    /// These are the sets a BGP-import-policy consumer should peer-lock:
    /// accept routes carrying this ASN only from direct sessions. Empty when
    /// the ASN never published a statement.
    pub fn peer_lock_sets(&self, store: &AuthorizationStore, asn: Asn) -> Vec<SetName> {
        store
            .statements_for_asn(asn)
            .iter()
            .flat_map(|stmt| stmt.authorized_in.iter())
            .filter(|entry| entry.propagation == PropagationScope::DirectOnly)
            .map(|entry| entry.as_set.clone())
            .collect()
    }

    /// Shared matching over an issuer's statements.
    ///
    /// Matching is pure byte equality on the set name: no wildcards, no
    /// prefixes, no case folding, no trimming. strictMode is carried along
    /// as metadata and never alters the boolean.
    fn match_statements(statements: &[AuthorizationStatement], target: &SetName) -> AuthOutcome {
        let strict = statements.iter().any(|s| s.strict_mode);
        let mut has_entries = false;
        for stmt in statements {
            for entry in &stmt.authorized_in {
                has_entries = true;
                if &entry.as_set == target {
                    return AuthOutcome::allow(AuthReason::Authorized, strict);
                }
            }
        }
        if has_entries {
            AuthOutcome::deny(AuthReason::NotInAuthorizedList, strict)
        } else {
            // Statement present but nothing authorized: an explicit denial,
            // distinct from having no statement at all.
            AuthOutcome::deny(AuthReason::EmptyAuthorizedList, strict)
        }
    }
}
