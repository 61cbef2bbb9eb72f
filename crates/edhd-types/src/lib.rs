//! Foundation types for edhd.
//!
//! This crate provides the value types shared by the derivation core and the
//! command-line front end. None of them carry secret material.
//!
//! # Key Types
//!
//! - [`ChildIndex`]: One 32-bit path segment, aware of the hardened bit
//! - [`DerivationPath`]: Ordered walk from the master key (`m/0'/1'`)
//! - [`Fingerprint`]: 4-byte display label for a public key

pub mod error;
pub mod fingerprint;
pub mod index;
pub mod path;

pub use error::TypeError;
pub use fingerprint::Fingerprint;
pub use index::{ChildIndex, HARDENED_BIT};
pub use path::DerivationPath;
