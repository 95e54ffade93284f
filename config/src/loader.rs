//! File loading: statement document → fresh store, all or nothing.

use crate::document::{decode_auth_document, decode_membership_document};
use crate::error::ConfigError;
use rasa_store::{AuthorizationStore, MembershipStore};
use std::path::Path;

/// Read and decode a RASA-AUTH document, producing a new store.
///
/// Any failure (unreadable file, undecodable document) yields an error and
/// no store; there is no partially populated result to misuse.
pub fn load_authorization_store(path: &Path) -> Result<AuthorizationStore, ConfigError> {
    let text = read(path)?;
    let statements = decode_auth_document(&text)?;
    let store = AuthorizationStore::from_statements(statements);
    tracing::info!(
        path = %path.display(),
        issuers = store.issuer_count(),
        "loaded RASA-AUTH statements"
    );
    Ok(store)
}

/// Read and decode a RASA-SET document, producing a new store.
pub fn load_membership_store(path: &Path) -> Result<MembershipStore, ConfigError> {
    let text = read(path)?;
    let statements = decode_membership_document(&text)?;
    let store = MembershipStore::from_statements(statements);
    tracing::info!(
        path = %path.display(),
        sets = store.set_count(),
        "loaded RASA-SET statements"
    );
    Ok(store)
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasa_types::{Asn, SetName};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn load_valid_auth_document() {
        let file = temp_file(
            r#"{"rasas":[{"rasa":{"authorized_as":64496,"authorized_in":[{"entry":{"asset":"AS-TEST"}}]}}]}"#,
        );
        let store = load_authorization_store(file.path()).unwrap();
        assert!(store.has_asn(Asn::new(64496)));
    }

    #[test]
    fn load_valid_membership_document() {
        let file = temp_file(
            r#"{"rasa_sets":[{"rasa_set":{"as_set_name":"AS-TEST","members":[64496]}}]}"#,
        );
        let store = load_membership_store(file.path()).unwrap();
        assert!(store.has_set(&SetName::new("AS-TEST")));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_authorization_store(Path::new("/nonexistent/auth.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn invalid_json_fails_the_whole_load() {
        let file = temp_file("{invalid json");
        assert!(matches!(
            load_authorization_store(file.path()),
            Err(ConfigError::Document(_))
        ));
        assert!(matches!(
            load_membership_store(file.path()),
            Err(ConfigError::Document(_))
        ));
    }

    #[test]
    fn loading_twice_answers_identically() {
        let file = temp_file(
            r#"{"rasa_sets":[{"rasa_set":{"as_set_name":"AS-TEST","members":[64496,64497]}}]}"#,
        );
        let first = load_membership_store(file.path()).unwrap();
        let second = load_membership_store(file.path()).unwrap();
        let name = SetName::new("AS-TEST");
        assert_eq!(
            first.get(&name).unwrap().members,
            second.get(&name).unwrap().members
        );
    }
}
