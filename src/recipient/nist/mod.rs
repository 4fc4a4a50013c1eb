//! Recipient KEM over the NIST prime curves (P-256, P-384, P-521)
//!
//! The sender's KEM bytes are a SEC1-encoded ephemeral point. Decoding and
//! validation happen first, so malformed or off-curve input is rejected
//! before the private key is touched; the ECDH shared secret is the
//! big-endian x-coordinate of `private_scalar * ephemeral_point`, which then
//! feeds the HKDF binder together with the KEM bytes themselves.

use elliptic_curve::{
    ecdh::diffie_hellman,
    sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint},
    AffinePoint, CurveArithmetic, FieldBytes, FieldBytesSize, NonZeroScalar, PublicKey,
};
use p256::NistP256;
use p384::NistP384;
use p521::NistP521;
use zeroize::{Zeroize, Zeroizing};

use crate::curve::{CurveKind, EcPointFormat};
use crate::error::{validate, Error, Result};
use crate::kdf;
use crate::recipient::DerivationParams;

/// Recipient KEM bound to a NIST prime-curve private key.
///
/// The private key is kept as raw big-endian bytes for the lifetime of the
/// instance and zeroized on drop; the scalar itself is only materialized
/// inside [`generate_key`](Self::generate_key) and wiped before the call
/// returns.
pub struct NistPCurveRecipientKem {
    curve: CurveKind,
    private_key: Zeroizing<Vec<u8>>,
}

impl core::fmt::Debug for NistPCurveRecipientKem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // The private key is deliberately omitted.
        f.debug_struct("NistPCurveRecipientKem")
            .field("curve", &self.curve)
            .finish_non_exhaustive()
    }
}

impl NistPCurveRecipientKem {
    /// Create a recipient KEM for `curve` around a big-endian private key.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` if `private_key` is empty
    /// * `UnsupportedCurve` if `curve` is not a NIST prime curve
    ///
    /// The scalar's range is not validated here; an out-of-range value is
    /// reported by the Diffie-Hellman step of `generate_key`.
    pub fn new(curve: CurveKind, private_key: &[u8]) -> Result<Self> {
        validate::arg(
            !private_key.is_empty(),
            "NistPCurveRecipientKem::new",
            "empty private key",
        )?;
        validate::curve(curve.is_nist_prime(), curve)?;
        Ok(Self {
            curve,
            private_key: Zeroizing::new(private_key.to_vec()),
        })
    }

    /// The curve this instance was constructed for.
    pub fn curve(&self) -> CurveKind {
        self.curve
    }

    /// Recover the symmetric key from a SEC1-encoded ephemeral point.
    pub fn generate_key(
        &self,
        kem_bytes: &[u8],
        params: &DerivationParams<'_>,
    ) -> Result<Zeroizing<Vec<u8>>> {
        check_point_encoding(self.curve, params.point_format, kem_bytes)?;

        let shared_secret = match self.curve {
            CurveKind::P256 => shared_secret_x::<NistP256>(&self.private_key, kem_bytes)?,
            CurveKind::P384 => shared_secret_x::<NistP384>(&self.private_key, kem_bytes)?,
            CurveKind::P521 => shared_secret_x::<NistP521>(&self.private_key, kem_bytes)?,
            // Construction only admits NIST prime curves.
            CurveKind::X25519 => return Err(Error::UnsupportedCurve { curve: self.curve }),
        };

        kdf::derive_key(
            params.hash,
            kem_bytes,
            &shared_secret,
            params.salt,
            params.info,
            params.key_length,
        )
    }
}

/// Check that `kem_bytes` carries the SEC1 tag and exact length the requested
/// format prescribes for `curve`.
///
/// `PublicKey::from_sec1_bytes` would accept either encoding; the caller's
/// point format is authoritative, so a mismatch is rejected up front.
fn check_point_encoding(
    curve: CurveKind,
    format: EcPointFormat,
    kem_bytes: &[u8],
) -> Result<()> {
    let well_formed = kem_bytes.len() == curve.point_len(format)
        && match format {
            EcPointFormat::Compressed => matches!(kem_bytes.first(), Some(0x02) | Some(0x03)),
            EcPointFormat::Uncompressed => kem_bytes.first() == Some(&0x04),
        };
    validate::arg(
        well_formed,
        "NistPCurveRecipientKem::generate_key",
        "invalid KEM bytes",
    )
}

/// Decode the ephemeral point, then compute the x-coordinate of
/// `private_key * point`.
///
/// The private key is interpreted as a big-endian unsigned integer: leading
/// zeros are stripped and the remainder left-padded to the scalar width. A
/// value of zero, at or above the group order, or wider than a field element
/// is an arithmetic-layer failure (`Internal`).
fn shared_secret_x<C>(private_key: &[u8], kem_bytes: &[u8]) -> Result<Zeroizing<Vec<u8>>>
where
    C: CurveArithmetic,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
{
    // Rejects malformed encodings, points off the curve and the identity.
    let ephemeral = PublicKey::<C>::from_sec1_bytes(kem_bytes).map_err(|_| {
        Error::InvalidArgument {
            context: "NistPCurveRecipientKem::generate_key",
            reason: "invalid KEM bytes",
        }
    })?;

    let significant = strip_leading_zeros(private_key);
    let mut repr = FieldBytes::<C>::default();
    if significant.len() > repr.len() {
        return Err(Error::Internal {
            context: "ECDH: private key wider than the scalar field",
        });
    }
    let pad = repr.len() - significant.len();
    repr.as_mut_slice()[pad..].copy_from_slice(significant);

    let scalar = Option::<NonZeroScalar<C>>::from(NonZeroScalar::<C>::from_repr(repr.clone()));
    repr.as_mut_slice().zeroize();
    let scalar = scalar.ok_or(Error::Internal {
        context: "ECDH: private scalar out of range",
    })?;

    // Cofactor-1 curve with a validated non-identity point and a non-zero
    // scalar: the product cannot be the identity.
    let shared = diffie_hellman(&scalar, ephemeral.as_affine());
    Ok(Zeroizing::new(shared.raw_secret_bytes().to_vec()))
}

fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let first_nonzero = bytes
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(bytes.len());
    &bytes[first_nonzero..]
}
