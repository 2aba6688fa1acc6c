//! ECIES error types

use thiserror::Error;

/// Cryptographic operation error
///
/// Every failure during decryption of an otherwise well-framed message is
/// reported as [`CryptoError::AuthenticationFailed`], whatever the cause.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Invalid key")]
    InvalidKey,

    #[error("Malformed message: {len} bytes (min: {min})")]
    MalformedMessage { len: usize, min: usize },

    #[error("Message rejected: authentication failed")]
    AuthenticationFailed,

    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Invalid {name} length: expected {expected}, got {actual}")]
    InvalidParameterLength {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Encryption failed: {0}")]
    Encryption(String),

    #[error("Random source failed: {0}")]
    RandomSource(String),
}

pub type CryptoResult<T> = Result<T, CryptoError>;
