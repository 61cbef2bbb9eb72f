//! SLIP-0010 hierarchical deterministic key derivation for ed25519.
//!
//! Turns a root seed into a master key and chain code, derives hardened
//! children from any parent, and labels public keys with short fingerprints.
//! Every operation is a pure function over fixed-size byte arrays; nothing
//! here performs I/O or keeps state between calls.
//!
//! Public keys are produced by a [`PublicKeySource`]. The derivation code
//! itself never does curve arithmetic.
//!
//! All hashing wraps established libraries; there is no custom cryptography.

pub mod child;
pub mod error;
pub mod fingerprint;
pub mod key;
mod mac;
pub mod seed;
pub mod signer;
pub mod vectors;
pub mod walker;

pub use child::derive;
pub use error::{DeriveError, DeriveResult};
pub use fingerprint::{fingerprint, identifier};
pub use key::KeyMaterial;
pub use seed::{expand, ED25519_CURVE};
pub use signer::{serialize_public_key, Ed25519KeySource, PublicKeySource};
pub use vectors::TestVector;
pub use walker::{annotate, attach_public_keys, walk, DerivedNode, NodeReport};
