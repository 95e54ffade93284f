//! RASA-AUTH statement store, keyed by issuer.

use rasa_types::{Asn, AuthorizationStatement, Issuer, SetName};
use std::collections::HashMap;

/// All loaded RASA-AUTH statements, indexed for lookup by issuer.
///
/// ASN-issued statements are keyed by ASN; AS-SET-issued statements (nested
/// set authorizations) are keyed by set name. An issuer normally publishes a
/// single statement, but the store tolerates several: authorization is
/// satisfied if *any* of them authorizes the target set.
#[derive(Clone, Debug, Default)]
pub struct AuthorizationStore {
    by_asn: HashMap<Asn, Vec<AuthorizationStatement>>,
    by_set: HashMap<SetName, Vec<AuthorizationStatement>>,
}

impl AuthorizationStore {
    /// Empty store: no issuer has published anything.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a store from decoded statements.
    pub fn from_statements(statements: impl IntoIterator<Item = AuthorizationStatement>) -> Self {
        let mut store = Self::default();
        for stmt in statements {
            match &stmt.issuer {
                Issuer::As(asn) => store.by_asn.entry(*asn).or_default().push(stmt),
                Issuer::Set(name) => store.by_set.entry(name.clone()).or_default().push(stmt),
            }
        }
        store
    }

    /// Statements published by the given ASN. Empty when the ASN never
    /// published one — which the evaluator treats as implicit consent.
    pub fn statements_for_asn(&self, asn: Asn) -> &[AuthorizationStatement] {
        self.by_asn.get(&asn).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Statements published by the given AS-SET (nested-set authorization).
    pub fn statements_for_set(&self, set: &SetName) -> &[AuthorizationStatement] {
        self.by_set.get(set).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the ASN has published at least one statement.
    pub fn has_asn(&self, asn: Asn) -> bool {
        self.by_asn.contains_key(&asn)
    }

    /// Whether the AS-SET has published at least one statement.
    pub fn has_set(&self, set: &SetName) -> bool {
        self.by_set.contains_key(set)
    }

    /// Number of distinct issuers with at least one statement.
    pub fn issuer_count(&self) -> usize {
        self.by_asn.len() + self.by_set.len()
    }

    /// Whether the store holds no statements at all.
    pub fn is_empty(&self) -> bool {
        self.by_asn.is_empty() && self.by_set.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasa_types::AuthorizedEntry;

    fn stmt(asn: u32, sets: &[&str]) -> AuthorizationStatement {
        AuthorizationStatement::by_asn(
            Asn::new(asn),
            sets.iter().map(|s| AuthorizedEntry::new(*s)).collect(),
        )
    }

    #[test]
    fn empty_store_has_no_issuers() {
        let store = AuthorizationStore::empty();
        assert!(store.is_empty());
        assert_eq!(store.issuer_count(), 0);
        assert!(store.statements_for_asn(Asn::new(64496)).is_empty());
    }

    #[test]
    fn statements_index_by_issuer_asn() {
        let store = AuthorizationStore::from_statements([
            stmt(64496, &["AS-A"]),
            stmt(64497, &["AS-B"]),
        ]);
        assert!(store.has_asn(Asn::new(64496)));
        assert!(store.has_asn(Asn::new(64497)));
        assert!(!store.has_asn(Asn::new(64498)));
        assert_eq!(store.statements_for_asn(Asn::new(64496)).len(), 1);
    }

    #[test]
    fn multiple_statements_per_asn_are_all_kept() {
        let store = AuthorizationStore::from_statements([
            stmt(64496, &["AS-A"]),
            stmt(64496, &["AS-B"]),
        ]);
        assert_eq!(store.statements_for_asn(Asn::new(64496)).len(), 2);
        assert_eq!(store.issuer_count(), 1);
    }

    #[test]
    fn set_issued_statements_index_by_set_name() {
        let store = AuthorizationStore::from_statements([AuthorizationStatement::by_set(
            "AS-CUSTOMER",
            vec![AuthorizedEntry::new("AS-PARENT")],
        )]);
        assert!(store.has_set(&SetName::new("AS-CUSTOMER")));
        assert!(!store.has_asn(Asn::new(64496)));
        assert_eq!(
            store.statements_for_set(&SetName::new("AS-CUSTOMER")).len(),
            1
        );
    }

    #[test]
    fn set_lookup_is_case_sensitive() {
        let store = AuthorizationStore::from_statements([AuthorizationStatement::by_set(
            "AS-CUSTOMER",
            vec![],
        )]);
        assert!(!store.has_set(&SetName::new("as-customer")));
    }
}
