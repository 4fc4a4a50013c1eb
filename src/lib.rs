//! Recipient-side ECIES key encapsulation
//!
//! This crate implements the recipient half of an ECIES KEM: given a static
//! private key and the sender's ephemeral public value (the "KEM bytes"), it
//! recovers the symmetric key that the sender derived during encapsulation.
//! Two strategies implement the capability, selected once at construction by
//! curve family:
//!
//! - NIST prime curves (P-256, P-384, P-521): SEC1 point decoding, ECDH via
//!   the curve's group arithmetic, then HKDF.
//! - X25519: fixed-length Montgomery scalar multiplication on raw 32-byte
//!   buffers, then HKDF.
//!
//! Both strategies bind the KEM bytes themselves (not just the shared secret)
//! into the derivation, so distinct ephemeral values cannot collide onto the
//! same derived key.
//!
//! # Security Features
//!
//! - Point validation before any use of secret material
//! - Constant-time scalar multiplication in both curve backends
//! - Secret intermediates (scalars, shared secrets, IKM) zeroized on all
//!   exit paths
//! - No panicking paths: every fallible operation returns a [`Result`]
//!
//! # Example
//!
//! ```no_run
//! use ecies_kem::{CurveKind, DerivationParams, EcPointFormat, HashKind, RecipientKem};
//!
//! # fn main() -> ecies_kem::Result<()> {
//! # let (private_key, kem_bytes) = ([0u8; 32], [0u8; 33]);
//! let kem = RecipientKem::new(CurveKind::P256, &private_key)?;
//! let params = DerivationParams {
//!     hash: HashKind::Sha256,
//!     salt: b"",
//!     info: b"ecies demo",
//!     key_length: 32,
//!     point_format: EcPointFormat::Compressed,
//! };
//! let symmetric_key = kem.generate_key(&kem_bytes, &params)?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod curve;
pub mod error;
pub mod kdf;
pub mod recipient;

pub use curve::{CurveKind, EcPointFormat, HashKind};
pub use error::{Error, Result};
pub use recipient::{DerivationParams, NistPCurveRecipientKem, RecipientKem, X25519RecipientKem};
