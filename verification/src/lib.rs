//! Bidirectional AS-SET authorization verification.
//!
//! Two independent questions, answered from two independent statement
//! stores:
//! 1. **Authorization**: does ASN X consent to inclusion in AS-SET Y?
//!    (RASA-AUTH, published by the member.)
//! 2. **Membership**: does AS-SET Y list ASN X as a member?
//!    (RASA-SET, published by the set operator.)
//!
//! The bidirectional verifier runs both and reports both, never collapsing
//! them into a single pass/fail bit — "listed but never consented" and
//! "consented but never listed" are different operational problems.
//!
//! The load-bearing policy throughout is **default-allow**: an absent
//! statement is implicit consent, so deployments that predate RASA keep
//! working untouched.

pub mod auth_check;
pub mod membership_check;
pub mod outcome;
pub mod verify;

pub use auth_check::AuthorizationEvaluator;
pub use membership_check::MembershipEvaluator;
pub use outcome::{AuthOutcome, AuthReason, MembershipOutcome, MembershipReason, VerificationVerdict};
pub use verify::BidirectionalVerifier;
