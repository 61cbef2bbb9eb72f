use edhd_types::ChildIndex;

use crate::error::{DeriveError, DeriveResult};
use crate::key::{to_array32, KeyMaterial};
use crate::mac::hmac_sha512_split;

/// Derive the hardened child of a parent key and chain code.
///
/// `I = HMAC-SHA512(key = parent_chain_code, data = 0x00 || parent_key || ser32(index))`.
///
/// Both parent inputs must be exactly 32 bytes. Non-hardened indices are
/// rejected with [`DeriveError::InvalidIndex`]; use
/// [`ChildIndex::hardened`] to build a valid one.
pub fn derive(
    parent_key: &[u8],
    parent_chain_code: &[u8],
    index: ChildIndex,
) -> DeriveResult<KeyMaterial> {
    let parent_key = to_array32("parent key", parent_key)?;
    let parent_chain_code = to_array32("parent chain code", parent_chain_code)?;
    if !index.is_hardened() {
        return Err(DeriveError::InvalidIndex(index));
    }

    tracing::debug!(%index, "deriving hardened child");
    Ok(hmac_sha512_split(
        &parent_chain_code,
        &[&[0x00u8], &parent_key, &index.ser32()],
    ))
}
