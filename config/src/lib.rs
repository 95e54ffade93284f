//! The decoding collaborator for the RASA core.
//!
//! Everything the verification core is *not* allowed to do lives here:
//! reading statement documents from disk, tolerating the malformed records
//! real publication pipelines produce, and turning what survives into the
//! immutable stores the evaluators consume. The core only ever sees fully
//! decoded statements.
//!
//! Decoding is lenient per record and strict per document: a record missing
//! its discriminating field is skipped with a warning, but an undecodable
//! document fails the whole load and no store is produced.

pub mod document;
pub mod error;
pub mod loader;
pub mod settings;

pub use error::ConfigError;
pub use loader::{load_authorization_store, load_membership_store};
pub use settings::ValidatorSettings;
