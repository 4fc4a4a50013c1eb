//! Curve, point-format and hash identifiers
//!
//! These enums are fixed at construction time and determine byte lengths,
//! point encodings and the arithmetic backend used by a recipient KEM.

use core::fmt;

/// Length of an X25519 private scalar in bytes.
///
/// Numerically equal to [`X25519_PUBLIC_VALUE_LEN`], but kept as a distinct
/// constant: a private scalar and a public value are different objects even
/// when their encodings happen to share a width.
pub const X25519_PRIVATE_KEY_LEN: usize = 32;

/// Length of an X25519 public value (u-coordinate) in bytes.
pub const X25519_PUBLIC_VALUE_LEN: usize = 32;

/// Length of an X25519 shared secret in bytes.
pub const X25519_SHARED_SECRET_LEN: usize = 32;

/// Supported elliptic curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    /// NIST P-256 (secp256r1)
    P256,
    /// NIST P-384 (secp384r1)
    P384,
    /// NIST P-521 (secp521r1)
    P521,
    /// Curve25519 in Montgomery form (X25519 Diffie-Hellman)
    X25519,
}

impl CurveKind {
    /// Width of one field element (and of the curve's scalars) in bytes.
    pub fn field_element_len(self) -> usize {
        match self {
            CurveKind::P256 => 32,
            CurveKind::P384 => 48,
            CurveKind::P521 => 66,
            CurveKind::X25519 => 32,
        }
    }

    /// Length of a point encoded in `format` on this curve.
    ///
    /// For X25519 only the raw 32-byte u-coordinate exists, which this crate
    /// files under [`EcPointFormat::Compressed`].
    pub fn point_len(self, format: EcPointFormat) -> usize {
        if self == CurveKind::X25519 {
            return X25519_PUBLIC_VALUE_LEN;
        }
        match format {
            EcPointFormat::Compressed => self.field_element_len() + 1,
            EcPointFormat::Uncompressed => 2 * self.field_element_len() + 1,
        }
    }

    /// True for the NIST prime-curve family.
    pub fn is_nist_prime(self) -> bool {
        matches!(self, CurveKind::P256 | CurveKind::P384 | CurveKind::P521)
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CurveKind::P256 => "NIST P-256",
            CurveKind::P384 => "NIST P-384",
            CurveKind::P521 => "NIST P-521",
            CurveKind::X25519 => "X25519",
        };
        f.write_str(name)
    }
}

/// Byte encoding convention for an elliptic-curve point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcPointFormat {
    /// SEC1 compressed: tag byte 0x02/0x03 plus the x-coordinate. For X25519
    /// this means the bare 32-byte u-coordinate.
    Compressed,
    /// SEC1 uncompressed: tag byte 0x04 plus both coordinates.
    Uncompressed,
}

/// Hash function backing the HKDF derivation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashKind {
    /// SHA-1 (legacy interoperability only)
    Sha1,
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl HashKind {
    /// Digest output size in bytes.
    pub fn output_len(self) -> usize {
        match self {
            HashKind::Sha1 => 20,
            HashKind::Sha256 => 32,
            HashKind::Sha384 => 48,
            HashKind::Sha512 => 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_lengths_match_sec1() {
        assert_eq!(CurveKind::P256.point_len(EcPointFormat::Compressed), 33);
        assert_eq!(CurveKind::P256.point_len(EcPointFormat::Uncompressed), 65);
        assert_eq!(CurveKind::P384.point_len(EcPointFormat::Compressed), 49);
        assert_eq!(CurveKind::P384.point_len(EcPointFormat::Uncompressed), 97);
        assert_eq!(CurveKind::P521.point_len(EcPointFormat::Compressed), 67);
        assert_eq!(CurveKind::P521.point_len(EcPointFormat::Uncompressed), 133);
        assert_eq!(CurveKind::X25519.point_len(EcPointFormat::Compressed), 32);
    }

    #[test]
    fn curve_families() {
        assert!(CurveKind::P256.is_nist_prime());
        assert!(CurveKind::P384.is_nist_prime());
        assert!(CurveKind::P521.is_nist_prime());
        assert!(!CurveKind::X25519.is_nist_prime());
    }
}
