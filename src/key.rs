use crate::{
    Error
};
use secp256k1::PublicKey;

/// Length of a compressed public key
pub const COMPRESSED_LEN: usize = 33;
/// Length of an uncompressed public key
pub const UNCOMPRESSED_LEN: usize = 65;

/// Serialized secp256k1 public key as handed over by the key layer.
///
/// Only the encoding is checked here (length and tag byte), the point
/// itself is not validated.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PubKey {
    bytes: Vec<u8>
}

impl PubKey {
    /**
        Use a predefined byte array as a public key.
        Accepts 0x02/0x03 | x (33 bytes) or 0x04 | x | y (65 bytes).
    */
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let valid = match bytes.len() {
            COMPRESSED_LEN => bytes[0] == 0x02 || bytes[0] == 0x03,
            UNCOMPRESSED_LEN => bytes[0] == 0x04,
            _ => false
        };
        if !valid { return Err(Error::InvalidPublicKey(bytes.len())) }

        Ok(Self { bytes: bytes.to_vec() })
    }

    /// Serializes a secp256k1 key, compressed or not.
    pub fn from_secp(key: &PublicKey, compressed: bool) -> Self {
        let bytes = if compressed {
            key.serialize().to_vec()
        } else {
            key.serialize_uncompressed().to_vec()
        };
        Self { bytes }
    }

    pub fn is_compressed(&self) -> bool {
        self.bytes.len() == COMPRESSED_LEN
    }

    /// The bytes exactly as supplied
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /**
        Returns the compressed form: the parity of y as the tag byte, then x.
    */
    pub fn compressed(&self) -> [u8; COMPRESSED_LEN] {
        let mut out = [0; COMPRESSED_LEN];
        if self.is_compressed() {
            out.copy_from_slice(&self.bytes);
        } else {
            out[0] = 0x02 | (self.bytes[UNCOMPRESSED_LEN - 1] & 1);
            out[1..].copy_from_slice(&self.bytes[1..COMPRESSED_LEN]);
        }
        out
    }
}

impl From<PublicKey> for PubKey {
    fn from(key: PublicKey) -> Self {
        Self::from_secp(&key, true)
    }
}
