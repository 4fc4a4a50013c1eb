//! ECIES symmetric-key derivation
//!
//! Both recipient strategies funnel their shared secret through
//! [`derive_key`], which expands `kem_bytes || shared_secret` with HKDF.
//! Prepending the KEM bytes binds the sender's ephemeral value into the
//! derivation, so two different ephemeral points cannot collide onto the same
//! symmetric key even if they produced the same shared secret.

use hkdf::Hkdf;
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};
use zeroize::Zeroizing;

use crate::curve::HashKind;
use crate::error::{validate, Error, Result};

/// Derive an ECIES symmetric key of `key_length` bytes.
///
/// The HKDF input keying material is `kem_bytes || shared_secret`; `salt`
/// feeds the extract step and `info` the expand step. Identical inputs always
/// yield identical output.
///
/// # Errors
///
/// `InvalidArgument` for a zero output length or one beyond the HKDF limit of
/// 255 digest lengths for the chosen hash.
pub fn derive_key(
    hash: HashKind,
    kem_bytes: &[u8],
    shared_secret: &[u8],
    salt: &[u8],
    info: &[u8],
    key_length: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    validate::arg(
        key_length > 0,
        "ECIES HKDF",
        "output length must be non-zero",
    )?;

    let mut ikm = Zeroizing::new(Vec::with_capacity(kem_bytes.len() + shared_secret.len()));
    ikm.extend_from_slice(kem_bytes);
    ikm.extend_from_slice(shared_secret);

    let mut okm = Zeroizing::new(vec![0u8; key_length]);
    let expanded = match hash {
        HashKind::Sha1 => Hkdf::<Sha1>::new(Some(salt), &ikm).expand(info, &mut okm),
        HashKind::Sha256 => Hkdf::<Sha256>::new(Some(salt), &ikm).expand(info, &mut okm),
        HashKind::Sha384 => Hkdf::<Sha384>::new(Some(salt), &ikm).expand(info, &mut okm),
        HashKind::Sha512 => Hkdf::<Sha512>::new(Some(salt), &ikm).expand(info, &mut okm),
    };
    expanded.map_err(|_| Error::InvalidArgument {
        context: "ECIES HKDF",
        reason: "output length too large for hash",
    })?;

    Ok(okm)
}
