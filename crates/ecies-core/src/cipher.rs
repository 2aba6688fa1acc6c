//! Authenticated encryption with ChaCha20Poly1305
//!
//! The tag is kept detached from the ciphertext; framing both is the
//! codec's job.

use chacha20poly1305::{
    ChaCha20Poly1305, Nonce, Tag,
    aead::{AeadInPlace, KeyInit},
};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::{CryptoError, CryptoResult, KEY_SIZE, NONCE_SIZE, TAG_SIZE};

/// Output of [`seal`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedPayload {
    /// Random nonce drawn for this encryption
    pub nonce: [u8; NONCE_SIZE],
    /// Poly1305 authentication tag
    pub tag: [u8; TAG_SIZE],
    /// Ciphertext, same length as the plaintext
    pub ciphertext: Vec<u8>,
}

fn new_cipher(key: &[u8]) -> CryptoResult<ChaCha20Poly1305> {
    if key.len() != KEY_SIZE {
        return Err(CryptoError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: key.len(),
        });
    }

    ChaCha20Poly1305::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyLength {
        expected: KEY_SIZE,
        actual: key.len(),
    })
}

/// Encrypt `plaintext` under `key` with a fresh random nonce
///
/// The nonce is drawn from `rng` on every call and never derived, so `rng`
/// must be a cryptographically secure generator.
pub fn seal<R: RngCore + CryptoRng>(
    rng: &mut R,
    key: &[u8],
    plaintext: &[u8],
) -> CryptoResult<SealedPayload> {
    let cipher = new_cipher(key)?;

    let mut nonce = [0u8; NONCE_SIZE];
    rng.try_fill_bytes(&mut nonce)
        .map_err(|e| CryptoError::RandomSource(e.to_string()))?;

    let mut ciphertext = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(Nonce::from_slice(&nonce), b"", &mut ciphertext)
        .map_err(|e| {
            ciphertext.zeroize();
            CryptoError::Encryption(e.to_string())
        })?;

    let mut tag_bytes = [0u8; TAG_SIZE];
    tag_bytes.copy_from_slice(&tag);

    Ok(SealedPayload {
        nonce,
        tag: tag_bytes,
        ciphertext,
    })
}

/// Verify `tag` and decrypt `ciphertext`
///
/// Either the whole plaintext is returned or nothing is: on a tag mismatch
/// the working buffer is wiped and [`CryptoError::AuthenticationFailed`] is
/// returned, with no distinction between a wrong key and tampered data.
pub fn open(
    key: &[u8],
    nonce: &[u8; NONCE_SIZE],
    tag: &[u8; TAG_SIZE],
    ciphertext: &[u8],
) -> CryptoResult<Vec<u8>> {
    let cipher = new_cipher(key)?;

    let mut buffer = ciphertext.to_vec();
    match cipher.decrypt_in_place_detached(
        Nonce::from_slice(nonce),
        b"",
        &mut buffer,
        Tag::from_slice(tag),
    ) {
        Ok(()) => Ok(buffer),
        Err(_) => {
            buffer.zeroize();
            Err(CryptoError::AuthenticationFailed)
        }
    }
}
