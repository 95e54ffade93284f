//! JSON statement document decoding.
//!
//! Wire shapes:
//!
//! ```json
//! {"rasas": [{"rasa": {
//!     "authorized_as": 64496,
//!     "authorized_in": [{"entry": {"asset": "AS-TEST", "propagation": "directOnly"}}],
//!     "strict_mode": false,
//!     "not_before": "...", "not_after": "..."
//! }}]}
//! ```
//!
//! ```json
//! {"rasa_sets": [{"rasa_set": {
//!     "as_set_name": "AS-TEST",
//!     "containing_as": 1299,
//!     "members": [64496, 64497],
//!     "nested_sets": ["AS-INNER"]
//! }}]}
//! ```
//!
//! Unknown fields are ignored everywhere. Individual fields that fail to
//! decode (a non-integer member, an entry without an asset name, an
//! unrecognized propagation value) are discarded rather than failing the
//! document; a record without its discriminating field (issuer or set name)
//! is skipped entirely.

use crate::error::ConfigError;
use rasa_types::{
    AuthorizationStatement, AuthorizedEntry, Asn, Issuer, MembershipStatement, PropagationScope,
    SetFlags, SetName, Validity,
};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;

// ── Raw wire structs ───────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
struct AuthDocument {
    #[serde(default)]
    rasas: Vec<AuthRecord>,
}

#[derive(Debug, Default, Deserialize)]
struct AuthRecord {
    #[serde(default)]
    rasa: Option<RawAuth>,
}

#[derive(Debug, Default, Deserialize)]
struct RawAuth {
    #[serde(default)]
    version: Option<Value>,
    #[serde(default)]
    authorized_as: Option<Value>,
    #[serde(default)]
    authorized_set: Option<Value>,
    #[serde(default)]
    authorized_in: Vec<RawEntryWrapper>,
    #[serde(default)]
    strict_mode: bool,
    #[serde(default)]
    not_before: String,
    #[serde(default)]
    not_after: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawEntryWrapper {
    #[serde(default)]
    entry: Option<RawEntry>,
}

#[derive(Debug, Default, Deserialize)]
struct RawEntry {
    #[serde(default)]
    asset: Option<Value>,
    #[serde(default)]
    propagation: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct SetDocument {
    #[serde(default)]
    rasa_sets: Vec<SetRecordWrapper>,
}

#[derive(Debug, Default, Deserialize)]
struct SetRecordWrapper {
    #[serde(default)]
    rasa_set: Option<RawSet>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSet {
    #[serde(default)]
    version: Option<Value>,
    #[serde(default)]
    as_set_name: Option<Value>,
    #[serde(default)]
    containing_as: Option<Value>,
    #[serde(default)]
    members: Vec<Value>,
    #[serde(default)]
    nested_sets: Vec<Value>,
    #[serde(default)]
    do_not_inherit: bool,
    #[serde(default)]
    authoritative: bool,
    #[serde(default)]
    not_before: String,
    #[serde(default)]
    not_after: String,
}

// ── Field helpers ──────────────────────────────────────────────────────

/// Integer in u32 range, or nothing. Negative, fractional, string, and
/// oversized values all fall out here.
fn value_as_asn(value: &Value) -> Option<Asn> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .map(Asn::new)
}

fn value_as_string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_owned)
}

fn value_as_version(value: Option<&Value>) -> u32 {
    value
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

/// `"directOnly"` is the only value with semantics; everything else,
/// including the absent case and historic object-shaped values, decodes as
/// unrestricted.
fn value_as_propagation(value: Option<&Value>) -> PropagationScope {
    match value.and_then(Value::as_str) {
        Some("directOnly") => PropagationScope::DirectOnly,
        _ => PropagationScope::Unrestricted,
    }
}

// ── Decoding ───────────────────────────────────────────────────────────

/// Decode an authorization document from its JSON text.
///
/// Fails only when the document itself is not valid JSON of the expected
/// outer shape; individual bad records are skipped with a warning.
pub fn decode_auth_document(text: &str) -> Result<Vec<AuthorizationStatement>, ConfigError> {
    let doc: AuthDocument = serde_json::from_str(text)?;
    let mut statements = Vec::with_capacity(doc.rasas.len());
    for (index, record) in doc.rasas.into_iter().enumerate() {
        let Some(raw) = record.rasa else {
            tracing::warn!(index, "skipping RASA-AUTH record without a body");
            continue;
        };
        let issuer = match (
            raw.authorized_as.as_ref().and_then(value_as_asn),
            raw.authorized_set.as_ref().and_then(value_as_string),
        ) {
            (Some(asn), _) => Issuer::As(asn),
            (None, Some(set)) => Issuer::Set(SetName::new(set)),
            (None, None) => {
                tracing::warn!(index, "skipping RASA-AUTH record without a usable issuer");
                continue;
            }
        };
        let authorized_in: Vec<AuthorizedEntry> = raw
            .authorized_in
            .iter()
            .filter_map(|wrapper| {
                let entry = wrapper.entry.as_ref()?;
                let asset = entry.asset.as_ref().and_then(value_as_string)?;
                Some(AuthorizedEntry {
                    as_set: SetName::new(asset),
                    propagation: value_as_propagation(entry.propagation.as_ref()),
                })
            })
            .collect();
        statements.push(AuthorizationStatement {
            version: value_as_version(raw.version.as_ref()),
            issuer,
            authorized_in,
            strict_mode: raw.strict_mode,
            validity: Validity::new(raw.not_before, raw.not_after),
        });
    }
    Ok(statements)
}

/// Decode a membership document from its JSON text.
pub fn decode_membership_document(text: &str) -> Result<Vec<MembershipStatement>, ConfigError> {
    let doc: SetDocument = serde_json::from_str(text)?;
    let mut statements = Vec::with_capacity(doc.rasa_sets.len());
    for (index, record) in doc.rasa_sets.into_iter().enumerate() {
        let Some(raw) = record.rasa_set else {
            tracing::warn!(index, "skipping RASA-SET record without a body");
            continue;
        };
        let Some(name) = raw.as_set_name.as_ref().and_then(value_as_string) else {
            tracing::warn!(index, "skipping RASA-SET record without a set name");
            continue;
        };
        let members: BTreeSet<Asn> = raw.members.iter().filter_map(value_as_asn).collect();
        let nested_sets: BTreeSet<SetName> = raw
            .nested_sets
            .iter()
            .filter_map(value_as_string)
            .map(SetName::new)
            .collect();
        statements.push(MembershipStatement {
            version: value_as_version(raw.version.as_ref()),
            as_set: SetName::new(name),
            containing_as: raw.containing_as.as_ref().and_then(value_as_asn),
            members,
            nested_sets,
            flags: SetFlags {
                do_not_inherit: raw.do_not_inherit,
                authoritative: raw.authoritative,
            },
            validity: Validity::new(raw.not_before, raw.not_after),
        });
    }
    Ok(statements)
}
