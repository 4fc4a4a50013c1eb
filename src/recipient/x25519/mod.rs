//! Recipient KEM over X25519
//!
//! The sender's KEM bytes are the raw 32-byte u-coordinate of the ephemeral
//! public value; the only legal point format is compressed. The scalar
//! multiplication runs in constant time on fixed-length buffers, so the only
//! validation needed per call is the format and length of the KEM bytes.

use x25519_dalek::x25519;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::curve::{
    CurveKind, EcPointFormat, X25519_PRIVATE_KEY_LEN, X25519_PUBLIC_VALUE_LEN,
};
use crate::error::{validate, Result};
use crate::kdf;
use crate::recipient::DerivationParams;

/// Recipient KEM bound to an X25519 private scalar.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct X25519RecipientKem {
    private_key: [u8; X25519_PRIVATE_KEY_LEN],
}

impl core::fmt::Debug for X25519RecipientKem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // The private key is deliberately omitted.
        f.write_str("X25519RecipientKem")
    }
}

impl X25519RecipientKem {
    /// Create a recipient KEM around a 32-byte X25519 private scalar.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `curve` is not [`CurveKind::X25519`] or
    /// `private_key` is not exactly [`X25519_PRIVATE_KEY_LEN`] bytes.
    pub fn new(curve: CurveKind, private_key: &[u8]) -> Result<Self> {
        validate::arg(
            curve == CurveKind::X25519,
            "X25519RecipientKem::new",
            "curve is not X25519",
        )?;
        validate::arg(
            private_key.len() == X25519_PRIVATE_KEY_LEN,
            "X25519RecipientKem::new",
            "private key has unexpected length",
        )?;
        let mut key = [0u8; X25519_PRIVATE_KEY_LEN];
        key.copy_from_slice(private_key);
        Ok(Self { private_key: key })
    }

    /// Recover the symmetric key from a 32-byte ephemeral public value.
    ///
    /// The format and length checks run before the private key is read.
    pub fn generate_key(
        &self,
        kem_bytes: &[u8],
        params: &DerivationParams<'_>,
    ) -> Result<Zeroizing<Vec<u8>>> {
        validate::arg(
            params.point_format == EcPointFormat::Compressed,
            "X25519RecipientKem::generate_key",
            "X25519 supports only compressed points",
        )?;
        validate::arg(
            kem_bytes.len() == X25519_PUBLIC_VALUE_LEN,
            "X25519RecipientKem::generate_key",
            "KEM bytes have unexpected length",
        )?;

        let mut public = [0u8; X25519_PUBLIC_VALUE_LEN];
        public.copy_from_slice(kem_bytes);
        let shared_secret = Zeroizing::new(x25519(self.private_key, public));

        kdf::derive_key(
            params.hash,
            kem_bytes,
            shared_secret.as_slice(),
            params.salt,
            params.info,
            params.key_length,
        )
    }
}
