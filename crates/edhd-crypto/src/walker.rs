use edhd_types::{DerivationPath, Fingerprint};
use serde::Serialize;

use crate::error::{DeriveError, DeriveResult};
use crate::fingerprint::fingerprint;
use crate::key::KeyMaterial;
use crate::seed::expand;
use crate::signer::{serialize_public_key, PublicKeySource};

/// Key material at one depth of a walked path.
#[derive(Clone, Debug)]
pub struct DerivedNode {
    pub depth: usize,
    pub path: DerivationPath,
    pub key: KeyMaterial,
}

/// Display record for one depth: key material plus public key and the
/// fingerprint of its parent.
///
/// Holds hex strings, including the private key; it exists only to be
/// printed or serialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NodeReport {
    pub depth: usize,
    pub path: DerivationPath,
    pub parent_fingerprint: Fingerprint,
    pub chain_code: String,
    pub private_key: String,
    pub public_key: String,
}

/// Expand `seed` and follow `path`, returning every node from the master
/// (depth 0) down to the leaf.
///
/// Steps run strictly in order since each child is keyed by its parent's
/// chain code. The first failing step aborts the walk.
pub fn walk(seed: &[u8], path: &DerivationPath) -> DeriveResult<Vec<DerivedNode>> {
    let mut nodes = Vec::with_capacity(path.depth() + 1);
    let mut current = DerivedNode {
        depth: 0,
        path: DerivationPath::master(),
        key: expand(seed),
    };

    for index in path {
        let depth = current.depth + 1;
        let key = current
            .key
            .derive_child(*index)
            .map_err(|e| DeriveError::AtDepth {
                depth,
                index: *index,
                source: Box::new(e),
            })?;
        let next = DerivedNode {
            depth,
            path: current.path.child(*index),
            key,
        };
        nodes.push(std::mem::replace(&mut current, next));
    }
    nodes.push(current);

    tracing::debug!(%path, nodes = nodes.len(), "walked derivation path");
    Ok(nodes)
}

/// Pair walked nodes with their already computed public keys.
///
/// `public_keys[i]` must belong to `nodes[i]`. Each node after the first is
/// labelled with the fingerprint of the previous node's serialized public key;
/// the master is labelled [`Fingerprint::MASTER`].
pub fn attach_public_keys(
    nodes: &[DerivedNode],
    public_keys: &[[u8; 32]],
) -> DeriveResult<Vec<NodeReport>> {
    if nodes.len() != public_keys.len() {
        return Err(DeriveError::LengthMismatch {
            field: "public keys",
            expected: nodes.len(),
            actual: public_keys.len(),
        });
    }

    Ok(build_reports(nodes, public_keys))
}

fn build_reports(nodes: &[DerivedNode], public_keys: &[[u8; 32]]) -> Vec<NodeReport> {
    let mut parent_fingerprint = Fingerprint::MASTER;
    let mut reports = Vec::with_capacity(nodes.len());
    for (node, public_key) in nodes.iter().zip(public_keys) {
        let serialized = serialize_public_key(public_key);
        reports.push(NodeReport {
            depth: node.depth,
            path: node.path.clone(),
            parent_fingerprint,
            chain_code: hex::encode(node.key.chain_code()),
            private_key: hex::encode(node.key.private_key()),
            public_key: hex::encode(serialized),
        });
        parent_fingerprint = fingerprint(&serialized);
    }
    reports
}

/// Compute public keys with `source` and build the display records.
pub fn annotate<S: PublicKeySource + ?Sized>(
    nodes: &[DerivedNode],
    source: &S,
) -> Vec<NodeReport> {
    let public_keys: Vec<[u8; 32]> = nodes.iter().map(|n| n.key.public_key(source)).collect();
    build_reports(nodes, &public_keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signer::Ed25519KeySource;
    use edhd_types::ChildIndex;

    fn h(n: u32) -> ChildIndex {
        ChildIndex::hardened(n).unwrap()
    }

    #[test]
    fn walk_master_only() {
        let nodes = walk(b"seed", &DerivationPath::master()).unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].depth, 0);
        assert!(nodes[0].path.is_master());
        assert_eq!(nodes[0].key, expand(b"seed"));
    }

    #[test]
    fn walk_yields_every_depth() {
        let path: DerivationPath = "m/0'/1'/2'".parse().unwrap();
        let nodes = walk(b"seed", &path).unwrap();
        assert_eq!(nodes.len(), 4);
        for (i, node) in nodes.iter().enumerate() {
            assert_eq!(node.depth, i);
            assert_eq!(node.path, path.prefix(i));
        }
    }

    #[test]
    fn walk_matches_two_sequential_derives() {
        let seed = [0x11u8; 32];
        let path = DerivationPath::from(vec![h(3), h(4)]);
        let nodes = walk(&seed, &path).unwrap();

        let master = expand(&seed);
        let first = crate::child::derive(master.private_key(), master.chain_code(), h(3)).unwrap();
        let second = crate::child::derive(first.private_key(), first.chain_code(), h(4)).unwrap();
        assert_eq!(nodes[1].key, first);
        assert_eq!(nodes[2].key, second);
    }

    #[test]
    fn walk_is_stable_across_invocations() {
        let short: DerivationPath = "m/5'".parse().unwrap();
        let long: DerivationPath = "m/5'/6'".parse().unwrap();
        let a = walk(b"stable", &short).unwrap();
        let b = walk(b"stable", &long).unwrap();
        let c = walk(b"stable", &long).unwrap();
        assert_eq!(a[1].key, b[1].key);
        assert_eq!(b[2].key, c[2].key);
        assert_eq!(a[1].key.derive_child(h(6)).unwrap(), b[2].key);
    }

    #[test]
    fn walk_aborts_on_unhardened_segment() {
        let path: DerivationPath = "m/0'/1'/2".parse().unwrap();
        let err = walk(b"seed", &path).unwrap_err();
        match err {
            DeriveError::AtDepth { depth, index, .. } => {
                assert_eq!(depth, 3);
                assert_eq!(index.to_string(), "2");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn attach_rejects_count_mismatch() {
        let nodes = walk(b"seed", &"m/0'".parse().unwrap()).unwrap();
        let err = attach_public_keys(&nodes, &[[0u8; 32]]).unwrap_err();
        assert_eq!(
            err,
            DeriveError::LengthMismatch {
                field: "public keys",
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn annotate_chains_parent_fingerprints() {
        let path: DerivationPath = "m/0'/1'".parse().unwrap();
        let nodes = walk(b"fingerprints", &path).unwrap();
        let reports = annotate(&nodes, &Ed25519KeySource);
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].parent_fingerprint, Fingerprint::MASTER);
        for pair in reports.windows(2) {
            let parent_pk = hex::decode(&pair[0].public_key).unwrap();
            assert_eq!(pair[1].parent_fingerprint, fingerprint(&parent_pk));
        }
        assert!(reports.iter().all(|r| r.public_key.starts_with("00")));
        assert!(reports.iter().all(|r| r.public_key.len() == 66));
    }

    #[test]
    fn report_serializes_paths_and_fingerprints_as_strings() {
        let nodes = walk(b"json", &"m/0'".parse().unwrap()).unwrap();
        let reports = annotate(&nodes, &Ed25519KeySource);
        let json = serde_json::to_value(&reports[1]).unwrap();
        assert_eq!(json["path"], "m/0'");
        assert_eq!(json["depth"], 1);
        assert_eq!(
            json["parent_fingerprint"],
            reports[1].parent_fingerprint.to_string()
        );
    }
}
