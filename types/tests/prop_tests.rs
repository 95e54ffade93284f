use proptest::prelude::*;

use rasa_types::{Asn, MembershipStatement, SetName, Validity};

proptest! {
    /// Asn roundtrip: new -> as_u32 -> new produces an identical ASN.
    #[test]
    fn asn_roundtrip(value in any::<u32>()) {
        let asn = Asn::new(value);
        prop_assert_eq!(asn.as_u32(), value);
        prop_assert_eq!(Asn::new(asn.as_u32()), asn);
    }

    /// Asn JSON serialization is transparent over the numeric value.
    #[test]
    fn asn_json_roundtrip(value in any::<u32>()) {
        let asn = Asn::new(value);
        let encoded = serde_json::to_string(&asn).unwrap();
        prop_assert_eq!(&encoded, &value.to_string());
        let decoded: Asn = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, asn);
    }

    /// SetName equality agrees with byte equality of the raw strings.
    #[test]
    fn set_name_equality_is_byte_exact(a in ".*", b in ".*") {
        let na = SetName::new(a.clone());
        let nb = SetName::new(b.clone());
        prop_assert_eq!(na == nb, a == b);
    }

    /// SetName preserves the raw string exactly, whitespace included.
    #[test]
    fn set_name_preserves_raw(s in ".*") {
        let name = SetName::new(s.clone());
        prop_assert_eq!(name.as_str(), s.as_str());
    }

    /// Membership members behave as a set: duplicates collapse, order is lost.
    #[test]
    fn membership_members_are_a_set(mut members in prop::collection::vec(any::<u32>(), 0..32)) {
        let stmt = MembershipStatement::new("AS-PROP", members.clone());
        members.sort_unstable();
        members.dedup();
        prop_assert_eq!(stmt.members.len(), members.len());
        for m in members {
            prop_assert!(stmt.members.contains(&Asn::new(m)));
        }
    }

    /// Validity::contains is the conjunction of the two lexical bounds.
    #[test]
    fn validity_contains_matches_bounds(
        nb in "[0-9]{4}-01-01T00:00:00Z",
        na in "[0-9]{4}-01-01T00:00:00Z",
        now in "[0-9]{4}-06-15T12:00:00Z",
    ) {
        let v = Validity::new(nb.clone(), na.clone());
        let expected = nb.as_str() <= now.as_str() && now.as_str() <= na.as_str();
        prop_assert_eq!(v.contains(&now), expected);
    }
}
