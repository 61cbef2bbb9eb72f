/// Turns a 32-byte ed25519 private key seed into its public key.
///
/// Derivation never calls this; it only feeds display and fingerprinting.
/// Implementations must be deterministic.
pub trait PublicKeySource: Send + Sync {
    fn public_key(&self, private_key: &[u8; 32]) -> [u8; 32];
}

/// Public keys via `ed25519-dalek` (clamping + base-point multiplication).
#[derive(Clone, Copy, Debug, Default)]
pub struct Ed25519KeySource;

impl Ed25519KeySource {
    /// Signing key for a derived private key.
    pub fn signing_key(&self, private_key: &[u8; 32]) -> ed25519_dalek::SigningKey {
        ed25519_dalek::SigningKey::from_bytes(private_key)
    }
}

impl PublicKeySource for Ed25519KeySource {
    fn public_key(&self, private_key: &[u8; 32]) -> [u8; 32] {
        self.signing_key(private_key).verifying_key().to_bytes()
    }
}

impl<S: PublicKeySource + ?Sized> PublicKeySource for &S {
    fn public_key(&self, private_key: &[u8; 32]) -> [u8; 32] {
        (**self).public_key(private_key)
    }
}

/// SLIP-0010 serialized ed25519 public key: `0x00 || pk`.
pub fn serialize_public_key(public_key: &[u8; 32]) -> [u8; 33] {
    let mut out = [0u8; 33];
    out[1..].copy_from_slice(public_key);
    out
}
