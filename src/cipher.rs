//! Credential cipher collaborator contract
//!
//! Fabric entities store device credentials encrypted and never retain
//! cleartext. The cipher is an injected dependency — any operation that
//! touches a credential takes `&dyn CredentialCipher` — so key material
//! stays outside the model and rotation or test doubles need no global
//! state.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use sha2::{Digest, Sha256};

use crate::errors::{FabricError, FabricResult};

/// Reversible encryption plus one-way hashing of device credentials
///
/// All three operations are pure with respect to model state. Failures
/// (corrupted ciphertext, key mismatch, misconfiguration) surface as
/// [`FabricError::CipherFailure`] — implementations must never silently
/// return empty output.
pub trait CredentialCipher {
    /// Encrypt cleartext into a transportable ciphertext string
    fn encrypt(&self, cleartext: &str) -> FabricResult<String>;

    /// Exact inverse of [`encrypt`](Self::encrypt)
    fn decrypt(&self, ciphertext: &str) -> FabricResult<String>;

    /// One-way hash used for display and verification, never for decryption
    fn hash(&self, cleartext: &str) -> FabricResult<String>;
}

/// Key-XOR cipher with base64 transport encoding
///
/// Obfuscation-grade, matching what small fabric controllers ship by
/// default; deployments with real key-management requirements inject their
/// own [`CredentialCipher`]. Hashing is SHA-256 over key material plus
/// cleartext, hex-encoded.
#[derive(Debug, Clone)]
pub struct KeyedCipher {
    key: Vec<u8>,
}

impl KeyedCipher {
    /// Create a cipher from non-empty key material
    pub fn new(key: impl AsRef<[u8]>) -> FabricResult<Self> {
        let key = key.as_ref().to_vec();
        if key.is_empty() {
            return Err(FabricError::CipherFailure(
                "cipher key material is empty".to_string(),
            ));
        }
        Ok(Self { key })
    }

    fn xor(&self, data: &[u8]) -> Vec<u8> {
        data.iter()
            .zip(self.key.iter().cycle())
            .map(|(byte, key)| byte ^ key)
            .collect()
    }
}

impl CredentialCipher for KeyedCipher {
    fn encrypt(&self, cleartext: &str) -> FabricResult<String> {
        Ok(BASE64.encode(self.xor(cleartext.as_bytes())))
    }

    fn decrypt(&self, ciphertext: &str) -> FabricResult<String> {
        let raw = BASE64
            .decode(ciphertext)
            .map_err(|e| FabricError::CipherFailure(format!("bad ciphertext: {e}")))?;
        String::from_utf8(self.xor(&raw)).map_err(|_| {
            FabricError::CipherFailure("ciphertext does not decrypt to valid UTF-8".to_string())
        })
    }

    fn hash(&self, cleartext: &str) -> FabricResult<String> {
        let mut hasher = Sha256::new();
        hasher.update(&self.key);
        hasher.update(cleartext.as_bytes());
        let digest = hasher.finalize();
        Ok(digest.iter().map(|b| format!("{b:02x}")).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cipher() -> KeyedCipher {
        KeyedCipher::new("unit-test-key").unwrap()
    }

    #[test]
    fn test_encrypt_decrypt_round_trip() {
        let cipher = cipher();
        let ciphertext = cipher.encrypt("Embe1mpls").unwrap();
        assert_ne!(ciphertext, "Embe1mpls");
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "Embe1mpls");
    }

    #[test]
    fn test_hash_is_deterministic_and_one_way() {
        let cipher = cipher();
        let first = cipher.hash("Embe1mpls").unwrap();
        let second = cipher.hash("Embe1mpls").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert_ne!(cipher.hash("other").unwrap(), first);
    }

    #[test]
    fn test_bad_ciphertext_is_a_cipher_failure() {
        let err = cipher().decrypt("***not-base64***").unwrap_err();
        assert!(matches!(err, FabricError::CipherFailure(_)));
    }

    #[test]
    fn test_empty_key_is_rejected() {
        assert!(matches!(
            KeyedCipher::new(""),
            Err(FabricError::CipherFailure(_))
        ));
    }

    #[test]
    fn test_different_keys_produce_different_hashes() {
        let a = KeyedCipher::new("key-a").unwrap();
        let b = KeyedCipher::new("key-b").unwrap();
        assert_ne!(a.hash("secret").unwrap(), b.hash("secret").unwrap());
    }
}
