//! Recipient-side KEM strategies
//!
//! [`RecipientKem`] is the entry point: a tagged union over the two concrete
//! strategies, selected once by curve family when the recipient's private key
//! is installed. A constructed instance is immutable and every
//! [`generate_key`](RecipientKem::generate_key) call is independent, so one
//! instance can serve any number of callers concurrently.

use zeroize::Zeroizing;

use crate::curve::{CurveKind, EcPointFormat, HashKind};
use crate::error::Result;

pub mod nist;
pub mod x25519;

pub use nist::NistPCurveRecipientKem;
pub use x25519::X25519RecipientKem;

/// Parameters for the key-derivation step of one `generate_key` call.
#[derive(Debug, Clone, Copy)]
pub struct DerivationParams<'a> {
    /// Hash backing the HKDF derivation
    pub hash: HashKind,
    /// HKDF salt (may be empty)
    pub salt: &'a [u8],
    /// HKDF context info (may be empty)
    pub info: &'a [u8],
    /// Length of the derived symmetric key in bytes
    pub key_length: usize,
    /// Encoding the KEM bytes are expected to use
    pub point_format: EcPointFormat,
}

/// A recipient KEM bound to one static private key.
pub enum RecipientKem {
    /// NIST prime-curve strategy (P-256, P-384, P-521)
    NistP(NistPCurveRecipientKem),
    /// Montgomery-curve strategy (X25519)
    X25519(X25519RecipientKem),
}

impl core::fmt::Debug for RecipientKem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // The inner strategies hold private key material, so only the
        // selected variant is shown.
        match self {
            RecipientKem::NistP(_) => f.write_str("RecipientKem::NistP"),
            RecipientKem::X25519(_) => f.write_str("RecipientKem::X25519"),
        }
    }
}

impl RecipientKem {
    /// Construct the strategy matching `curve` around `private_key`.
    ///
    /// Prime-curve private keys are big-endian unsigned integers of any
    /// non-zero length; X25519 private keys must be exactly 32 bytes.
    pub fn new(curve: CurveKind, private_key: &[u8]) -> Result<Self> {
        match curve {
            CurveKind::P256 | CurveKind::P384 | CurveKind::P521 => Ok(RecipientKem::NistP(
                NistPCurveRecipientKem::new(curve, private_key)?,
            )),
            CurveKind::X25519 => Ok(RecipientKem::X25519(X25519RecipientKem::new(
                curve,
                private_key,
            )?)),
        }
    }

    /// The curve this instance was constructed for.
    pub fn curve(&self) -> CurveKind {
        match self {
            RecipientKem::NistP(kem) => kem.curve(),
            RecipientKem::X25519(_) => CurveKind::X25519,
        }
    }

    /// Recover the symmetric key from the sender's KEM bytes.
    ///
    /// Validates the KEM bytes, computes the Diffie-Hellman shared secret
    /// with the stored private key and expands it through the HKDF binder.
    /// Either a complete derived key is returned or an error; no partial
    /// output ever escapes, and transient secrets are zeroized on all paths.
    pub fn generate_key(
        &self,
        kem_bytes: &[u8],
        params: &DerivationParams<'_>,
    ) -> Result<Zeroizing<Vec<u8>>> {
        match self {
            RecipientKem::NistP(kem) => kem.generate_key(kem_bytes, params),
            RecipientKem::X25519(kem) => kem.generate_key(kem_bytes, params),
        }
    }
}
