use edhd_types::Fingerprint;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// `RIPEMD-160(SHA-256(public_key))`.
pub fn identifier(public_key: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(public_key);
    Ripemd160::digest(sha.as_slice()).into()
}

/// First four bytes of the key [`identifier`].
///
/// SLIP-0010 path annotations fingerprint the serialized public key
/// (`0x00 || pk`, see [`serialize_public_key`](crate::serialize_public_key)),
/// not the raw 32 bytes.
pub fn fingerprint(public_key: &[u8]) -> Fingerprint {
    let id = identifier(public_key);
    Fingerprint::from_bytes([id[0], id[1], id[2], id[3]])
}
