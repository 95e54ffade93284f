//! Bidirectional verifier — reconciles the two independent answers.

use crate::auth_check::AuthorizationEvaluator;
use crate::membership_check::MembershipEvaluator;
use crate::outcome::VerificationVerdict;
use rasa_store::{AuthorizationStore, MembershipStore};
use rasa_types::{Asn, SetName};

pub struct BidirectionalVerifier;

impl BidirectionalVerifier {
    /// Check both directions of consent for `(as_set, asn)`.
    ///
    /// Both evaluators always run; there is no short-circuiting, because
    /// callers need both partial answers for diagnostics even when one side
    /// already settles their policy. The verifier introduces no matching
    /// rules of its own.
    pub fn verify(
        &self,
        auth_store: &AuthorizationStore,
        member_store: &MembershipStore,
        as_set: &SetName,
        asn: Asn,
    ) -> VerificationVerdict {
        let auth = AuthorizationEvaluator.is_authorized(auth_store, asn, as_set);
        let membership = MembershipEvaluator.is_member(member_store, as_set, asn);
        VerificationVerdict {
            authorized: auth.authorized,
            is_member: membership.is_member,
            auth_reason: auth.reason,
            member_reason: membership.reason,
            strict_mode: auth.strict_mode,
        }
    }
}
