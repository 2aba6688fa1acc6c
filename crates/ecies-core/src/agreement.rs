//! Key handles and ECDH key agreement
//!
//! The scheme only sees keys through [`AgreementKey`] and [`PublicKeyHandle`],
//! so a different curve backend can be dropped in without touching
//! [`crate::encrypt`] or [`crate::decrypt`]. X25519 is the backend shipped here.

use std::fmt;

use rand::{CryptoRng, RngCore};
use x25519_dalek::{PublicKey, StaticSecret};
use zeroize::Zeroizing;

use crate::{CryptoError, CryptoResult, PUBLIC_KEY_SIZE};

/// Public half of a key pair, as handed over by the key exchange layer
pub trait PublicKeyHandle {
    /// Encoded public key, suitable for transport to the peer
    fn to_bytes(&self) -> Vec<u8>;
}

/// Private half of a key pair, usable in key agreement
pub trait AgreementKey {
    /// Public key type of the same curve
    type PublicKey: PublicKeyHandle;

    /// Our own public key
    fn public_key(&self) -> Self::PublicKey;

    /// Compute the ECDH shared secret with a peer's public key
    ///
    /// `a.agree(&b.public_key())` and `b.agree(&a.public_key())` yield the
    /// same bytes.
    fn agree(&self, peer: &Self::PublicKey) -> CryptoResult<SharedSecret>;
}

/// Raw ECDH output
///
/// Not uniformly distributed; only ever fed into [`crate::derive_key`].
/// Wiped on drop.
pub struct SharedSecret(Zeroizing<Vec<u8>>);

impl SharedSecret {
    /// Wrap raw shared secret bytes produced by a backend
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(Zeroizing::new(bytes.to_vec()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecret")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}

/// X25519 public key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct X25519PublicKey(PublicKey);

impl X25519PublicKey {
    /// Parse a public key received from the peer
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        let bytes: [u8; PUBLIC_KEY_SIZE] =
            bytes.try_into().map_err(|_| CryptoError::InvalidKey)?;
        Ok(Self(PublicKey::from(bytes)))
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        self.0.as_bytes()
    }
}

impl From<[u8; PUBLIC_KEY_SIZE]> for X25519PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self(PublicKey::from(bytes))
    }
}

impl PublicKeyHandle for X25519PublicKey {
    fn to_bytes(&self) -> Vec<u8> {
        self.0.as_bytes().to_vec()
    }
}

/// Long-term X25519 key pair
#[derive(Clone)]
pub struct X25519KeyPair {
    secret: StaticSecret,
    public: PublicKey,
}

impl X25519KeyPair {
    /// Generate a new key pair
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let secret = StaticSecret::random_from_rng(rng);
        let public = PublicKey::from(&secret);
        Self { secret, public }
    }

    /// Restore a key pair from its 32-byte secret scalar
    pub fn from_secret_bytes(bytes: [u8; 32]) -> Self {
        let secret = StaticSecret::from(bytes);
        let public = PublicKey::from(&secret);
        Self { secret, public }
    }

    /// Get the public key bytes
    pub fn public_key_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        *self.public.as_bytes()
    }
}

impl fmt::Debug for X25519KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("X25519KeyPair")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

impl AgreementKey for X25519KeyPair {
    type PublicKey = X25519PublicKey;

    fn public_key(&self) -> X25519PublicKey {
        X25519PublicKey(self.public)
    }

    fn agree(&self, peer: &X25519PublicKey) -> CryptoResult<SharedSecret> {
        let shared = self.secret.diffie_hellman(&peer.0);

        // Small-order peer points force an all-zero output
        if !shared.was_contributory() {
            return Err(CryptoError::InvalidKey);
        }

        Ok(SharedSecret::from_bytes(shared.as_bytes()))
    }
}
