//! ECIES Core - Public-key hybrid encryption
//!
//! Static-static X25519 key agreement, SHA-256 key derivation over a
//! per-message salt, and ChaCha20Poly1305 with a detached tag.
//!
//! Wire format: `[16-byte salt][12-byte nonce][16-byte tag][ciphertext]`

mod agreement;
mod cipher;
mod codec;
mod error;
mod kdf;
mod scheme;

pub use agreement::*;
pub use cipher::*;
pub use codec::*;
pub use error::*;
pub use kdf::*;
pub use scheme::*;

/// KDF salt size (128 bits / 16 bytes)
pub const SALT_SIZE: usize = 16;

/// Nonce size for ChaCha20Poly1305 (96 bits / 12 bytes)
pub const NONCE_SIZE: usize = 12;

/// Authentication tag size (128 bits / 16 bytes)
pub const TAG_SIZE: usize = 16;

/// Symmetric key size (256 bits / 32 bytes), equal to the SHA-256 output
pub const KEY_SIZE: usize = 32;

/// X25519 public key size (256 bits / 32 bytes)
pub const PUBLIC_KEY_SIZE: usize = 32;

/// X25519 shared secret size (256 bits / 32 bytes)
pub const SHARED_SECRET_SIZE: usize = 32;

/// Fixed-size prefix of every wire message: salt, nonce and tag
pub const HEADER_SIZE: usize = SALT_SIZE + NONCE_SIZE + TAG_SIZE;

/// Smallest valid wire message (empty plaintext)
pub const MIN_MESSAGE_SIZE: usize = HEADER_SIZE;
