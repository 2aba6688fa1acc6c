//! Key derivation: SHA-256 over shared secret and salt

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{CryptoError, CryptoResult, KEY_SIZE, SALT_SIZE, SHARED_SECRET_SIZE, SharedSecret};

/// 256-bit key for the AEAD cipher, scoped to a single message
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey([u8; KEY_SIZE]);

impl SymmetricKey {
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricKey(..)")
    }
}

/// Derive the message key as `SHA-256(shared_secret || salt)`
///
/// The digest length equals [`KEY_SIZE`], so the output is used as-is.
pub fn derive_key(
    shared_secret: &SharedSecret,
    salt: &[u8; SALT_SIZE],
) -> CryptoResult<SymmetricKey> {
    if shared_secret.is_empty() {
        return Err(CryptoError::InvalidParameterLength {
            name: "shared secret",
            expected: SHARED_SECRET_SIZE,
            actual: 0,
        });
    }

    let mut digest = Sha256::new()
        .chain_update(shared_secret.as_bytes())
        .chain_update(salt)
        .finalize();

    let mut key = [0u8; KEY_SIZE];
    key.copy_from_slice(&digest);
    digest.as_mut_slice().zeroize();

    Ok(SymmetricKey(key))
}
