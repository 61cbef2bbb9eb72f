use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;
use crate::index::ChildIndex;

/// An ordered walk from the master key to a descendant.
///
/// The textual form is `m` followed by `/`-separated segments, e.g.
/// `m/0'/1'/2'`. The empty path (`m`) addresses the master key itself.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    indices: Vec<ChildIndex>,
}

impl DerivationPath {
    /// The master path `m`.
    pub fn master() -> Self {
        Self::default()
    }

    /// Number of derivation steps below the master key.
    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    pub fn is_master(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChildIndex> {
        self.indices.iter()
    }

    pub fn as_slice(&self) -> &[ChildIndex] {
        &self.indices
    }

    /// A new path one level deeper.
    pub fn child(&self, index: ChildIndex) -> Self {
        let mut indices = self.indices.clone();
        indices.push(index);
        Self { indices }
    }

    /// The first `depth` segments of this path.
    pub fn prefix(&self, depth: usize) -> Self {
        Self {
            indices: self.indices[..depth.min(self.indices.len())].to_vec(),
        }
    }

    /// Copy of this path with every segment hardened.
    pub fn hardened(&self) -> Self {
        Self {
            indices: self.indices.iter().map(|i| i.harden()).collect(),
        }
    }

    /// Whether every segment is hardened.
    pub fn is_fully_hardened(&self) -> bool {
        self.indices.iter().all(|i| i.is_hardened())
    }
}

impl From<Vec<ChildIndex>> for DerivationPath {
    fn from(indices: Vec<ChildIndex>) -> Self {
        Self { indices }
    }
}

impl FromIterator<ChildIndex> for DerivationPath {
    fn from_iter<T: IntoIterator<Item = ChildIndex>>(iter: T) -> Self {
        Self {
            indices: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DerivationPath {
    type Item = &'a ChildIndex;
    type IntoIter = std::slice::Iter<'a, ChildIndex>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.iter()
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for index in &self.indices {
            write!(f, "/{index}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DerivationPath({self})")
    }
}

impl FromStr for DerivationPath {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s.trim().split('/');
        match segments.next() {
            Some("m") | Some("M") => {}
            _ => {
                return Err(TypeError::InvalidPath(format!(
                    "{s:?} does not start with \"m\""
                )))
            }
        }
        segments.map(ChildIndex::from_str).collect()
    }
}

impl Serialize for DerivationPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DerivationPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(n: u32) -> ChildIndex {
        ChildIndex::hardened(n).unwrap()
    }

    #[test]
    fn master_path() {
        let path: DerivationPath = "m".parse().unwrap();
        assert!(path.is_master());
        assert_eq!(path.depth(), 0);
        assert_eq!(path.to_string(), "m");
        assert_eq!(path, DerivationPath::master());
    }

    #[test]
    fn parse_canonical_path() {
        let path: DerivationPath = "m/0'/1'/2'/2'/1000000000'".parse().unwrap();
        assert_eq!(
            path.as_slice(),
            &[h(0), h(1), h(2), h(2), h(1_000_000_000)]
        );
        assert_eq!(path.to_string(), "m/0'/1'/2'/2'/1000000000'");
        assert!(path.is_fully_hardened());
    }

    #[test]
    fn parse_normalizes_hardened_markers() {
        let path: DerivationPath = "m/44h/501H/0'".parse().unwrap();
        assert_eq!(path.to_string(), "m/44'/501'/0'");
    }

    #[test]
    fn parse_rejects_malformed_paths() {
        for s in ["", "0'/1'", "x/0'", "m/", "m//1'", "m/1'/", "m/abc", "m/2147483648'"] {
            assert!(s.parse::<DerivationPath>().is_err(), "{s:?} should not parse");
        }
    }

    #[test]
    fn hardened_forces_every_segment() {
        let path: DerivationPath = "m/0'/1/2'/2/1000000000".parse().unwrap();
        assert!(!path.is_fully_hardened());
        let forced = path.hardened();
        assert!(forced.is_fully_hardened());
        assert_eq!(forced.to_string(), "m/0'/1'/2'/2'/1000000000'");
    }

    #[test]
    fn child_and_prefix() {
        let path = DerivationPath::master().child(h(0)).child(h(1));
        assert_eq!(path.depth(), 2);
        assert_eq!(path.prefix(1), DerivationPath::from(vec![h(0)]));
        assert_eq!(path.prefix(0), DerivationPath::master());
        assert_eq!(path.prefix(10), path);
    }

    #[test]
    fn serde_roundtrip() {
        let path: DerivationPath = "m/0'/2147483647'".parse().unwrap();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"m/0'/2147483647'\"");
        let parsed: DerivationPath = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, path);
    }
}
