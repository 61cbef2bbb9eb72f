use edhd_types::{ChildIndex, DerivationPath};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{DeriveError, DeriveResult};
use crate::signer::PublicKeySource;

/// A private key and its chain code at one node of the derivation tree.
///
/// Both halves are exactly 32 bytes. Values are never mutated after
/// construction and are wiped from memory when dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    private_key: [u8; 32],
    chain_code: [u8; 32],
}

impl KeyMaterial {
    pub fn new(private_key: [u8; 32], chain_code: [u8; 32]) -> Self {
        Self {
            private_key,
            chain_code,
        }
    }

    /// Build from byte slices, rejecting anything that is not 32 bytes.
    pub fn from_slices(private_key: &[u8], chain_code: &[u8]) -> DeriveResult<Self> {
        Ok(Self {
            private_key: to_array32("private key", private_key)?,
            chain_code: to_array32("chain code", chain_code)?,
        })
    }

    /// Master key material for `seed` (depth 0).
    pub fn from_seed(seed: &[u8]) -> Self {
        crate::seed::expand(seed)
    }

    /// Hardened child at `index`.
    pub fn derive_child(&self, index: ChildIndex) -> DeriveResult<Self> {
        crate::child::derive(&self.private_key, &self.chain_code, index)
    }

    /// Descendant reached by following `path` from this node.
    pub fn derive_path(&self, path: &DerivationPath) -> DeriveResult<Self> {
        let mut current = self.clone();
        for (step, index) in path.iter().enumerate() {
            current = current
                .derive_child(*index)
                .map_err(|e| DeriveError::AtDepth {
                    depth: step + 1,
                    index: *index,
                    source: Box::new(e),
                })?;
        }
        Ok(current)
    }

    pub fn private_key(&self) -> &[u8; 32] {
        &self.private_key
    }

    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    /// Public key for this node, computed by `source`.
    pub fn public_key<S: PublicKeySource + ?Sized>(&self, source: &S) -> [u8; 32] {
        source.public_key(&self.private_key)
    }
}

pub(crate) fn to_array32(field: &'static str, bytes: &[u8]) -> DeriveResult<[u8; 32]> {
    bytes.try_into().map_err(|_| DeriveError::LengthMismatch {
        field,
        expected: 32,
        actual: bytes.len(),
    })
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "KeyMaterial(private_key: <redacted>, chain_code: {}...)",
            hex::encode(&self.chain_code[..4])
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signer::Ed25519KeySource;

    fn h(n: u32) -> ChildIndex {
        ChildIndex::hardened(n).unwrap()
    }

    #[test]
    fn from_slices_accepts_32_bytes() {
        let km = KeyMaterial::from_slices(&[1u8; 32], &[2u8; 32]).unwrap();
        assert_eq!(km.private_key(), &[1u8; 32]);
        assert_eq!(km.chain_code(), &[2u8; 32]);
    }

    #[test]
    fn from_slices_rejects_short_key() {
        let err = KeyMaterial::from_slices(&[1u8; 31], &[2u8; 32]).unwrap_err();
        assert_eq!(
            err,
            DeriveError::LengthMismatch {
                field: "private key",
                expected: 32,
                actual: 31
            }
        );
    }

    #[test]
    fn from_slices_rejects_long_chain_code() {
        let err = KeyMaterial::from_slices(&[1u8; 32], &[2u8; 33]).unwrap_err();
        assert!(matches!(
            err,
            DeriveError::LengthMismatch {
                field: "chain code",
                actual: 33,
                ..
            }
        ));
    }

    #[test]
    fn derive_path_matches_sequential_children() {
        let master = KeyMaterial::from_seed(b"path independence");
        let path: DerivationPath = "m/7'/9'".parse().unwrap();
        let stepwise = master.derive_child(h(7)).unwrap().derive_child(h(9)).unwrap();
        assert_eq!(master.derive_path(&path).unwrap(), stepwise);
    }

    #[test]
    fn derive_path_from_intermediate_node() {
        let master = KeyMaterial::from_seed(&[0x42; 64]);
        let first: DerivationPath = "m/1'".parse().unwrap();
        let full: DerivationPath = "m/1'/2'".parse().unwrap();
        let mid = master.derive_path(&first).unwrap();
        let rest: DerivationPath = "m/2'".parse().unwrap();
        assert_eq!(mid.derive_path(&rest).unwrap(), master.derive_path(&full).unwrap());
    }

    #[test]
    fn derive_master_path_is_identity() {
        let master = KeyMaterial::from_seed(b"seed");
        assert_eq!(master.derive_path(&DerivationPath::master()).unwrap(), master);
    }

    #[test]
    fn derive_path_reports_failing_depth() {
        let master = KeyMaterial::from_seed(b"seed");
        let path: DerivationPath = "m/0'/5".parse().unwrap();
        let err = master.derive_path(&path).unwrap_err();
        let bad = ChildIndex::normal(5).unwrap();
        assert_eq!(
            err,
            DeriveError::AtDepth {
                depth: 2,
                index: bad,
                source: Box::new(DeriveError::InvalidIndex(bad)),
            }
        );
    }

    #[test]
    fn public_key_uses_source() {
        let master = KeyMaterial::from_seed(b"seed");
        let pk1 = master.public_key(&Ed25519KeySource);
        let pk2 = master.public_key(&Ed25519KeySource);
        assert_eq!(pk1, pk2);
        assert_ne!(&pk1, master.private_key());
    }

    #[test]
    fn debug_redacts_private_key() {
        let km = KeyMaterial::new([0xab; 32], [0xcd; 32]);
        let debug = format!("{km:?}");
        assert!(debug.contains("redacted"));
        assert!(!debug.contains("abab"));
        assert!(debug.contains("cdcdcdcd"));
    }
}
