//! ECIES entry points
//!
//! `encrypt`: agree -> random salt -> derive -> seal -> frame
//! `decrypt`: parse -> agree -> derive -> open

use bytes::Bytes;
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};

use crate::{AgreementKey, CryptoError, CryptoResult, SALT_SIZE, codec, derive_key, open, seal};

/// Encrypt `plaintext` from `sender` to `recipient`
///
/// Salt and nonce are drawn from `rng`, so encrypting the same plaintext
/// twice gives two different wire messages.
pub fn encrypt<K, R>(
    rng: &mut R,
    sender: &K,
    recipient: &K::PublicKey,
    plaintext: &[u8],
) -> CryptoResult<Bytes>
where
    K: AgreementKey,
    R: RngCore + CryptoRng,
{
    let shared = sender.agree(recipient)?;

    let mut salt = [0u8; SALT_SIZE];
    rng.try_fill_bytes(&mut salt)
        .map_err(|e| CryptoError::RandomSource(e.to_string()))?;

    let key = derive_key(&shared, &salt)?;
    drop(shared);

    let sealed = seal(rng, key.as_bytes(), plaintext)?;
    let wire = codec::frame(&salt, &sealed.nonce, &sealed.tag, &sealed.ciphertext);

    debug!(
        plaintext_len = plaintext.len(),
        wire_len = wire.len(),
        "Encrypted message"
    );

    Ok(wire)
}

/// Decrypt a wire message sent by `sender` to `recipient`
///
/// Any error means the message is rejected; no partial plaintext is ever
/// returned.
pub fn decrypt<K>(recipient: &K, sender: &K::PublicKey, message: &[u8]) -> CryptoResult<Vec<u8>>
where
    K: AgreementKey,
{
    let parsed = codec::parse(message)?;

    let shared = recipient.agree(sender)?;
    let key = derive_key(&shared, &parsed.salt)?;
    drop(shared);

    let plaintext = open(key.as_bytes(), &parsed.nonce, &parsed.tag, parsed.ciphertext)
        .inspect_err(|_| trace!(wire_len = message.len(), "Rejected message"))?;

    debug!(
        wire_len = message.len(),
        plaintext_len = plaintext.len(),
        "Decrypted message"
    );

    Ok(plaintext)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::{HEADER_SIZE, PUBLIC_KEY_SIZE, X25519KeyPair, X25519PublicKey, wire_len};

    fn parties(seed: u64) -> (StdRng, X25519KeyPair, X25519KeyPair) {
        let mut rng = StdRng::seed_from_u64(seed);
        let alice = X25519KeyPair::generate(&mut rng);
        let bob = X25519KeyPair::generate(&mut rng);
        (rng, alice, bob)
    }

    #[test]
    fn test_encrypt_and_decrypt() {
        let (mut rng, alice, bob) = parties(11);

        let message = b"Hello from Alice!";
        let wire = encrypt(&mut rng, &alice, &bob.public_key(), message).unwrap();
        assert_eq!(wire.len(), wire_len(message.len()));

        let decrypted = decrypt(&bob, &alice.public_key(), &wire).unwrap();
        assert_eq!(message.as_slice(), decrypted.as_slice());
    }

    #[test]
    fn test_both_directions() {
        let (mut rng, alice, bob) = parties(12);

        let wire = encrypt(&mut rng, &bob, &alice.public_key(), b"Hi Alice").unwrap();
        let decrypted = decrypt(&alice, &bob.public_key(), &wire).unwrap();
        assert_eq!(decrypted, b"Hi Alice");
    }

    #[test]
    fn test_same_plaintext_gives_different_messages() {
        let (mut rng, alice, bob) = parties(13);

        let first = encrypt(&mut rng, &alice, &bob.public_key(), b"repeat").unwrap();
        let second = encrypt(&mut rng, &alice, &bob.public_key(), b"repeat").unwrap();

        assert_ne!(first, second);
        assert_ne!(first[..HEADER_SIZE], second[..HEADER_SIZE]);
        assert_eq!(decrypt(&bob, &alice.public_key(), &first).unwrap(), b"repeat");
        assert_eq!(decrypt(&bob, &alice.public_key(), &second).unwrap(), b"repeat");
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let (mut rng_a, alice, bob) = parties(14);
        let (mut rng_b, _, _) = parties(14);

        let a = encrypt(&mut rng_a, &alice, &bob.public_key(), b"fixed").unwrap();
        let b = encrypt(&mut rng_b, &alice, &bob.public_key(), b"fixed").unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_short_message_is_malformed() {
        let (_, alice, bob) = parties(15);

        assert!(matches!(
            decrypt(&bob, &alice.public_key(), &[0u8; HEADER_SIZE - 1]),
            Err(CryptoError::MalformedMessage { .. })
        ));
    }

    #[test]
    fn test_small_order_recipient_rejected() {
        let (mut rng, alice, _) = parties(16);
        let bogus = X25519PublicKey::from([0u8; PUBLIC_KEY_SIZE]);

        assert!(matches!(
            encrypt(&mut rng, &alice, &bogus, b"data"),
            Err(CryptoError::InvalidKey)
        ));
    }
}
