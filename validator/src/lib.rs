//! RASA validator — one loaded snapshot of both statement stores plus the
//! query surface.
//!
//! The validator owns an immutable pair of stores and passes queries through
//! to the evaluators. Reload is all-or-nothing: both new stores are built
//! completely before either replaces the old pair, and a failed reload
//! leaves the previous snapshot untouched. Callers that serve concurrent
//! readers wrap the validator in an `Arc` and swap the whole handle.

pub mod error;
pub mod logging;

pub use error::ValidatorError;
pub use logging::{init_logging, LogFormat};

use rasa_config::{load_authorization_store, load_membership_store, ValidatorSettings};
use rasa_store::{AuthorizationStore, MembershipStore};
use rasa_types::{Asn, SetName};
use rasa_verification::{
    AuthOutcome, AuthorizationEvaluator, BidirectionalVerifier, MembershipEvaluator,
    MembershipOutcome, VerificationVerdict,
};

/// A loaded RASA validator: one immutable snapshot of both stores.
#[derive(Clone, Debug, Default)]
pub struct RasaValidator {
    auth: AuthorizationStore,
    sets: MembershipStore,
}

impl RasaValidator {
    /// Validator over explicit stores (programmatic construction, tests).
    pub fn from_stores(auth: AuthorizationStore, sets: MembershipStore) -> Self {
        Self { auth, sets }
    }

    /// Load both statement documents named by the settings.
    ///
    /// A missing path loads that store empty, which makes every query on
    /// that side default-allow. Any load failure is a hard error and no
    /// validator is produced.
    pub fn load(settings: &ValidatorSettings) -> Result<Self, ValidatorError> {
        let (auth, sets) = Self::load_stores(settings)?;
        Ok(Self { auth, sets })
    }

    /// Replace the snapshot from the settings' documents.
    ///
    /// Both stores are rebuilt in full before either is swapped in; on
    /// failure the existing snapshot is left exactly as it was and the error
    /// is returned for the caller to act on.
    pub fn reload(&mut self, settings: &ValidatorSettings) -> Result<(), ValidatorError> {
        let (auth, sets) = Self::load_stores(settings)?;
        self.auth = auth;
        self.sets = sets;
        tracing::info!(
            issuers = self.auth.issuer_count(),
            sets = self.sets.set_count(),
            "statement stores reloaded"
        );
        Ok(())
    }

    fn load_stores(
        settings: &ValidatorSettings,
    ) -> Result<(AuthorizationStore, MembershipStore), ValidatorError> {
        let auth = match &settings.auth_objects {
            Some(path) => load_authorization_store(path)?,
            None => AuthorizationStore::empty(),
        };
        let sets = match &settings.set_objects {
            Some(path) => load_membership_store(path)?,
            None => MembershipStore::empty(),
        };
        Ok((auth, sets))
    }

    /// Does `asn` authorize its inclusion in `as_set`?
    pub fn is_authorized(&self, asn: Asn, as_set: &SetName) -> AuthOutcome {
        AuthorizationEvaluator.is_authorized(&self.auth, asn, as_set)
    }

    /// Does nested AS-SET `nested` authorize its inclusion in `parent`?
    pub fn is_set_authorized(&self, nested: &SetName, parent: &SetName) -> AuthOutcome {
        AuthorizationEvaluator.is_set_authorized(&self.auth, nested, parent)
    }

    /// Does AS-SET `as_set` list `asn` as a member?
    pub fn is_member(&self, as_set: &SetName, asn: Asn) -> MembershipOutcome {
        MembershipEvaluator.is_member(&self.sets, as_set, asn)
    }

    /// Both directions of consent for `(as_set, asn)`.
    pub fn verify(&self, as_set: &SetName, asn: Asn) -> VerificationVerdict {
        BidirectionalVerifier.verify(&self.auth, &self.sets, as_set, asn)
    }

    /// AS-SETs the ASN authorized with `directOnly` propagation.
    pub fn peer_lock_sets(&self, asn: Asn) -> Vec<SetName> {
        AuthorizationEvaluator.peer_lock_sets(&self.auth, asn)
    }

    /// The authorization store snapshot.
    pub fn authorization_store(&self) -> &AuthorizationStore {
        &self.auth
    }

    /// The membership store snapshot.
    pub fn membership_store(&self) -> &MembershipStore {
        &self.sets
    }
}
