use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::key::KeyMaterial;

type HmacSha512 = Hmac<Sha512>;

/// `HMAC-SHA512(key, parts...)`, split into `I_L` (key) and `I_R` (chain code).
pub(crate) fn hmac_sha512_split(key: &[u8], parts: &[&[u8]]) -> KeyMaterial {
    // HMAC hashes oversized keys and pads short ones, so no key length fails.
    let mut mac =
        HmacSha512::new_from_slice(key).expect("HMAC-SHA512 accepts keys of any length");
    for part in parts {
        mac.update(part);
    }
    let output = mac.finalize().into_bytes();

    let mut private_key = [0u8; 32];
    let mut chain_code = [0u8; 32];
    private_key.copy_from_slice(&output[..32]);
    chain_code.copy_from_slice(&output[32..]);
    KeyMaterial::new(private_key, chain_code)
}
