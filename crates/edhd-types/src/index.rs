use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// Top bit of a child index; set for hardened derivation.
pub const HARDENED_BIT: u32 = 0x8000_0000;

/// A single derivation path segment.
///
/// Wraps the raw 32-bit index exactly as it is fed to the derivation
/// function. Indices at or above [`HARDENED_BIT`] are hardened; ed25519 only
/// defines derivation for those.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChildIndex(u32);

impl ChildIndex {
    /// Hardened index for child number `number` (`number'`).
    pub fn hardened(number: u32) -> Result<Self, TypeError> {
        if number & HARDENED_BIT != 0 {
            return Err(TypeError::IndexOutOfRange(number));
        }
        Ok(Self(number | HARDENED_BIT))
    }

    /// Non-hardened index for child number `number`.
    pub fn normal(number: u32) -> Result<Self, TypeError> {
        if number & HARDENED_BIT != 0 {
            return Err(TypeError::IndexOutOfRange(number));
        }
        Ok(Self(number))
    }

    /// Wrap a raw index as supplied by a caller, hardened bit included.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The same child number with the hardened bit forced on.
    pub const fn harden(self) -> Self {
        Self(self.0 | HARDENED_BIT)
    }

    /// The raw 32-bit value.
    pub const fn to_raw(self) -> u32 {
        self.0
    }

    /// The child number without the hardened bit.
    pub const fn number(self) -> u32 {
        self.0 & !HARDENED_BIT
    }

    pub const fn is_hardened(self) -> bool {
        self.0 & HARDENED_BIT != 0
    }

    /// `ser32`: fixed-width 4-byte big-endian encoding of the raw value.
    pub const fn ser32(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_hardened() {
            write!(f, "{}'", self.number())
        } else {
            write!(f, "{}", self.number())
        }
    }
}

impl fmt::Debug for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChildIndex({self})")
    }
}

impl FromStr for ChildIndex {
    type Err = TypeError;

    /// Accepts `5`, `5'`, `5h` and `5H`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (digits, hardened) = match s.strip_suffix(['\'', 'h', 'H']) {
            Some(digits) => (digits, true),
            None => (s, false),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TypeError::InvalidPath(format!("bad path segment {s:?}")));
        }
        let number: u32 = digits
            .parse()
            .map_err(|_| TypeError::InvalidPath(format!("path segment {s:?} overflows u32")))?;
        if hardened {
            Self::hardened(number)
        } else {
            Self::normal(number)
        }
    }
}

impl Serialize for ChildIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ChildIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
