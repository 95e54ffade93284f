//! Membership evaluator — the RASA-SET side of verification.

use crate::outcome::{MembershipOutcome, MembershipReason};
use rasa_store::MembershipStore;
use rasa_types::{Asn, SetName};

pub struct MembershipEvaluator;

impl MembershipEvaluator {
    /// Does AS-SET `as_set` list `asn` as a member?
    ///
    /// A set with no published statement cannot be used to deny membership
    /// (default-allow, same rationale as the authorization side). Set names
    /// are looked up literally; the empty string is an ordinary key, not a
    /// wildcard.
    pub fn is_member(
        &self,
        store: &MembershipStore,
        as_set: &SetName,
        asn: Asn,
    ) -> MembershipOutcome {
        match store.get(as_set) {
            None => MembershipOutcome {
                is_member: true,
                reason: MembershipReason::NoStatement,
            },
            Some(record) if record.members.contains(&asn) => MembershipOutcome {
                is_member: true,
                reason: MembershipReason::Member,
            },
            Some(_) => MembershipOutcome {
                is_member: false,
                reason: MembershipReason::NotInMemberList,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasa_types::MembershipStatement;

    #[test]
    fn absent_set_is_default_allow() {
        let eval = MembershipEvaluator;
        let outcome = eval.is_member(
            &MembershipStore::empty(),
            &SetName::new("AS-TEST"),
            Asn::new(64496),
        );
        assert!(outcome.is_member);
        assert_eq!(outcome.reason, MembershipReason::NoStatement);
    }

    #[test]
    fn listed_member_is_a_member() {
        let eval = MembershipEvaluator;
        let store =
            MembershipStore::from_statements([MembershipStatement::new("AS-TEST", [64496, 64497])]);
        let outcome = eval.is_member(&store, &SetName::new("AS-TEST"), Asn::new(64497));
        assert!(outcome.is_member);
        assert_eq!(outcome.reason, MembershipReason::Member);
    }

    #[test]
    fn unlisted_asn_is_denied() {
        let eval = MembershipEvaluator;
        let store =
            MembershipStore::from_statements([MembershipStatement::new("AS-TEST", [64496])]);
        let outcome = eval.is_member(&store, &SetName::new("AS-TEST"), Asn::new(64499));
        assert!(!outcome.is_member);
        assert_eq!(outcome.reason, MembershipReason::NotInMemberList);
    }

    #[test]
    fn empty_member_list_denies_everyone() {
        let eval = MembershipEvaluator;
        let store = MembershipStore::from_statements([MembershipStatement::new("AS-EMPTY", [])]);
        let outcome = eval.is_member(&store, &SetName::new("AS-EMPTY"), Asn::new(64496));
        assert!(!outcome.is_member);
    }

    #[test]
    fn wrong_set_name_falls_back_to_default_allow() {
        let eval = MembershipEvaluator;
        let store =
            MembershipStore::from_statements([MembershipStatement::new("AS-TEST", [64496])]);
        let outcome = eval.is_member(&store, &SetName::new("AS-OTHER"), Asn::new(64499));
        assert!(outcome.is_member);
        assert_eq!(outcome.reason, MembershipReason::NoStatement);
    }

    #[test]
    fn set_name_lookup_is_case_sensitive() {
        let eval = MembershipEvaluator;
        let store =
            MembershipStore::from_statements([MembershipStatement::new("AS-TEST", [64496])]);
        // "as-test" has no statement, so default-allow applies even for an
        // ASN the uppercase set would deny.
        let outcome = eval.is_member(&store, &SetName::new("as-test"), Asn::new(99999));
        assert!(outcome.is_member);
        assert_eq!(outcome.reason, MembershipReason::NoStatement);
    }

    #[test]
    fn empty_set_name_is_looked_up_literally() {
        let eval = MembershipEvaluator;
        let store = MembershipStore::from_statements([MembershipStatement::new("", [64496])]);
        let hit = eval.is_member(&store, &SetName::new(""), Asn::new(64496));
        assert!(hit.is_member);
        assert_eq!(hit.reason, MembershipReason::Member);
        let miss = eval.is_member(&store, &SetName::new(""), Asn::new(64497));
        assert!(!miss.is_member);
    }

    #[test]
    fn boundary_asn_values_are_ordinary_members() {
        let eval = MembershipEvaluator;
        let store = MembershipStore::from_statements([MembershipStatement::new(
            "AS-TEST",
            [0, 65535, 65536, u32::MAX],
        )]);
        for asn in [0, 65535, 65536, u32::MAX] {
            assert!(
                eval.is_member(&store, &SetName::new("AS-TEST"), Asn::new(asn))
                    .is_member
            );
        }
    }
}
