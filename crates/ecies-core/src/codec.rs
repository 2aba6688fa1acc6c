//! Wire framing
//!
//! ```text
//! 0        16        28        44
//! +--------+---------+---------+------------------+
//! |  salt  |  nonce  |   tag   |  ciphertext ...  |
//! +--------+---------+---------+------------------+
//! ```
//!
//! Every field but the ciphertext has a fixed size, and the ciphertext runs
//! to the end of the buffer, so no length prefix or version byte is carried.

use bytes::{BufMut, Bytes, BytesMut};

use crate::{
    CryptoError, CryptoResult, HEADER_SIZE, MIN_MESSAGE_SIZE, NONCE_SIZE, SALT_SIZE, TAG_SIZE,
};

const NONCE_OFFSET: usize = SALT_SIZE;
const TAG_OFFSET: usize = NONCE_OFFSET + NONCE_SIZE;
const CIPHERTEXT_OFFSET: usize = TAG_OFFSET + TAG_SIZE;

/// A wire message split into its fields
///
/// The ciphertext borrows from the parsed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedMessage<'a> {
    pub salt: [u8; SALT_SIZE],
    pub nonce: [u8; NONCE_SIZE],
    pub tag: [u8; TAG_SIZE],
    pub ciphertext: &'a [u8],
}

/// Total wire size for a plaintext of `plaintext_len` bytes
pub const fn wire_len(plaintext_len: usize) -> usize {
    HEADER_SIZE + plaintext_len
}

/// Concatenate `salt || nonce || tag || ciphertext`
pub fn frame(
    salt: &[u8; SALT_SIZE],
    nonce: &[u8; NONCE_SIZE],
    tag: &[u8; TAG_SIZE],
    ciphertext: &[u8],
) -> Bytes {
    let mut buf = BytesMut::with_capacity(wire_len(ciphertext.len()));
    buf.put_slice(salt);
    buf.put_slice(nonce);
    buf.put_slice(tag);
    buf.put_slice(ciphertext);
    buf.freeze()
}

/// Split a wire message at its fixed offsets
pub fn parse(message: &[u8]) -> CryptoResult<ParsedMessage<'_>> {
    if message.len() < MIN_MESSAGE_SIZE {
        return Err(CryptoError::MalformedMessage {
            len: message.len(),
            min: MIN_MESSAGE_SIZE,
        });
    }

    let (header, ciphertext) = message.split_at(CIPHERTEXT_OFFSET);

    Ok(ParsedMessage {
        salt: fixed(&header[..NONCE_OFFSET], "salt")?,
        nonce: fixed(&header[NONCE_OFFSET..TAG_OFFSET], "nonce")?,
        tag: fixed(&header[TAG_OFFSET..], "tag")?,
        ciphertext,
    })
}

fn fixed<const N: usize>(field: &[u8], name: &'static str) -> CryptoResult<[u8; N]> {
    field
        .try_into()
        .map_err(|_| CryptoError::InvalidParameterLength {
            name,
            expected: N,
            actual: field.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_offsets() {
        let salt = [1u8; SALT_SIZE];
        let nonce = [2u8; NONCE_SIZE];
        let tag = [3u8; TAG_SIZE];
        let ciphertext = b"payload";

        let wire = frame(&salt, &nonce, &tag, ciphertext);

        assert_eq!(wire.len(), wire_len(ciphertext.len()));
        assert_eq!(&wire[0..16], &salt);
        assert_eq!(&wire[16..28], &nonce);
        assert_eq!(&wire[28..44], &tag);
        assert_eq!(&wire[44..], ciphertext);
    }

    #[test]
    fn test_parse_recovers_fields() {
        let salt = [0xA1u8; SALT_SIZE];
        let nonce = [0xB2u8; NONCE_SIZE];
        let tag = [0xC3u8; TAG_SIZE];

        let wire = frame(&salt, &nonce, &tag, b"xyz");
        let parsed = parse(&wire).unwrap();

        assert_eq!(parsed.salt, salt);
        assert_eq!(parsed.nonce, nonce);
        assert_eq!(parsed.tag, tag);
        assert_eq!(parsed.ciphertext, b"xyz");
    }

    #[test]
    fn test_minimum_length_message() {
        let wire = [0u8; MIN_MESSAGE_SIZE];
        let parsed = parse(&wire).unwrap();
        assert!(parsed.ciphertext.is_empty());
    }

    #[test]
    fn test_short_message_rejected() {
        for len in [0, 1, SALT_SIZE, TAG_OFFSET, MIN_MESSAGE_SIZE - 1] {
            let wire = vec![0u8; len];
            assert!(matches!(
                parse(&wire),
                Err(CryptoError::MalformedMessage { len: l, min: MIN_MESSAGE_SIZE }) if l == len
            ));
        }
    }
}
