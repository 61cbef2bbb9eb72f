use crate::key::KeyMaterial;
use crate::mac::hmac_sha512_split;

/// HMAC key for ed25519 master key generation.
pub const ED25519_CURVE: &[u8] = b"ed25519 seed";

/// Expand a root seed into depth-0 key material.
///
/// `I = HMAC-SHA512(key = "ed25519 seed", data = seed)`; the left half is the
/// master private key and the right half the master chain code. Any seed
/// length is accepted, including empty.
pub fn expand(seed: &[u8]) -> KeyMaterial {
    tracing::debug!(seed_len = seed.len(), "expanding master key");
    hmac_sha512_split(ED25519_CURVE, &[seed])
}
