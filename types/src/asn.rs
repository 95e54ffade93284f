//! Autonomous System Number newtype.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-bit Autonomous System Number.
///
/// The decoding layer discards values outside the u32 range before they reach
/// this type, so every `Asn` in the system is representable on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Asn(u32);

impl Asn {
    /// Create an ASN from its numeric value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Return the numeric value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Whether this is a 4-byte ("32-bit") ASN, i.e. above the 16-bit range.
    pub fn is_four_byte(&self) -> bool {
        self.0 > u16::MAX as u32
    }
}

impl fmt::Display for Asn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AS{}", self.0)
    }
}

impl From<u32> for Asn {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_as_prefix() {
        assert_eq!(Asn::new(64496).to_string(), "AS64496");
        assert_eq!(Asn::new(0).to_string(), "AS0");
    }

    #[test]
    fn four_byte_boundary() {
        assert!(!Asn::new(65535).is_four_byte());
        assert!(Asn::new(65536).is_four_byte());
        assert!(Asn::new(u32::MAX).is_four_byte());
    }

    #[test]
    fn serde_is_transparent() {
        let asn = Asn::new(64512);
        let json = serde_json::to_string(&asn).unwrap();
        assert_eq!(json, "64512");
        let back: Asn = serde_json::from_str(&json).unwrap();
        assert_eq!(back, asn);
    }
}
