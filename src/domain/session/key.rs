//! Process-wide signing secret

use rand::RngCore;

/// Number of random bytes in a generated secret
pub const SECRET_KEY_BYTES: usize = 32;

/// Symmetric secret used to both sign and verify session tokens
///
/// The random bytes are held hex-encoded and the hex text is the HMAC key
/// material. A key is never persisted, so a restarted process cannot verify
/// tokens issued before the restart.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey {
    hex: String,
}

impl SecretKey {
    /// Generate a fresh key from the thread-local CSPRNG
    pub fn generate() -> Self {
        let mut random_bytes = [0u8; SECRET_KEY_BYTES];
        rand::thread_rng().fill_bytes(&mut random_bytes);

        Self::from_bytes(&random_bytes)
    }

    /// Build a key from known bytes (fixed keys in tests)
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            hex: hex::encode(bytes),
        }
    }

    /// Key material handed to the signing library
    pub(crate) fn material(&self) -> &[u8] {
        self.hex.as_bytes()
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretKey").field("hex", &"[hidden]").finish()
    }
}
