//! RASA-SET membership store, keyed by AS-SET name.

use rasa_types::{Asn, MembershipStatement, SetFlags, SetName};
use std::collections::{BTreeSet, HashMap};

/// Merged view of every RASA-SET statement published for one AS-SET name.
///
/// Multiple statements for the same name are unioned: an ASN is a member if
/// any statement lists it, a set is nested if any statement nests it, and a
/// flag is set if any statement sets it.
#[derive(Clone, Debug, Default)]
pub struct SetRecord {
    /// Union of member ASNs across statements.
    pub members: BTreeSet<Asn>,
    /// Union of nested member AS-SETs.
    pub nested_sets: BTreeSet<SetName>,
    /// The operating AS from the first statement that published one.
    pub containing_as: Option<Asn>,
    /// OR of flags across statements.
    pub flags: SetFlags,
}

/// All loaded RASA-SET statements, merged per AS-SET name.
#[derive(Clone, Debug, Default)]
pub struct MembershipStore {
    sets: HashMap<SetName, SetRecord>,
}

impl MembershipStore {
    /// Empty store: no AS-SET has published a membership statement.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a store from decoded statements, merging per set name.
    pub fn from_statements(statements: impl IntoIterator<Item = MembershipStatement>) -> Self {
        let mut sets: HashMap<SetName, SetRecord> = HashMap::new();
        for stmt in statements {
            let record = sets.entry(stmt.as_set).or_default();
            record.members.extend(stmt.members);
            record.nested_sets.extend(stmt.nested_sets);
            if record.containing_as.is_none() {
                record.containing_as = stmt.containing_as;
            }
            record.flags.do_not_inherit |= stmt.flags.do_not_inherit;
            record.flags.authoritative |= stmt.flags.authoritative;
        }
        Self { sets }
    }

    /// Merged record for the given set name, if any statement was published.
    pub fn get(&self, set: &SetName) -> Option<&SetRecord> {
        self.sets.get(set)
    }

    /// Whether the set has published at least one statement.
    pub fn has_set(&self, set: &SetName) -> bool {
        self.sets.contains_key(set)
    }

    /// Number of distinct set names with a statement.
    pub fn set_count(&self) -> usize {
        self.sets.len()
    }

    /// Whether the store holds no statements at all.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
