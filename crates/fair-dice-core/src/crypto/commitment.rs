//! Keyed-hash commitment and its reveal.

use super::key::CommitmentKey;
use crate::error::{FrgError, Result};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Commitment = HMAC-SHA256(key, decimal(secret))
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Commitment(#[serde(with = "super::hex_bytes")] [u8; 32]);

impl Commitment {
    /// Commit to `secret` under `key`
    pub fn new(secret: u64, key: &CommitmentKey) -> Self {
        let mut mac = HmacSha256::new_from_slice(key.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(secret.to_string().as_bytes());
        Self(mac.finalize().into_bytes().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse a digest published as a hex string
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s.trim())
            .map_err(|e| FrgError::violation(format!("malformed digest: {e}")))?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|_| FrgError::violation("digest must be 32 bytes"))?;
        Ok(Self(bytes))
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that the given secret and key produce this commitment
    pub fn verify(&self, secret: u64, key: &CommitmentKey) -> bool {
        let mut mac = match HmacSha256::new_from_slice(key.as_bytes()) {
            Ok(mac) => mac,
            Err(_) => return false,
        };
        mac.update(secret.to_string().as_bytes());
        mac.verify_slice(&self.0).is_ok()
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Opening of a commitment: the secret and the key, disclosed once the
/// counterpart's value is fixed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub secret: u64,
    pub key: CommitmentKey,
}

impl Reveal {
    pub fn new(secret: u64, key: CommitmentKey) -> Self {
        Self { secret, key }
    }

    /// Recompute the commitment this reveal opens
    pub fn commitment(&self) -> Commitment {
        Commitment::new(self.secret, &self.key)
    }

    /// Check this reveal against a previously published commitment
    pub fn verify(&self, published: &Commitment) -> Result<()> {
        if published.verify(self.secret, &self.key) {
            Ok(())
        } else {
            Err(FrgError::violation(format!(
                "reveal of secret {} does not match published digest {}",
                self.secret, published
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    fn key() -> CommitmentKey {
        CommitmentKey::random_with(&mut OsRng)
    }

    #[test]
    fn test_commitment_verification() {
        let key = key();
        let commitment = Commitment::new(3, &key);

        assert!(commitment.verify(3, &key));
    }

    #[test]
    fn test_different_secrets_different_commitments() {
        let key = key();
        assert_ne!(Commitment::new(0, &key), Commitment::new(1, &key));
    }

    #[test]
    fn test_different_keys_different_commitments() {
        assert_ne!(Commitment::new(5, &key()), Commitment::new(5, &key()));
    }

    #[test]
    fn test_wrong_secret_fails_verification() {
        let key = key();
        let commitment = Commitment::new(4, &key);

        assert!(!commitment.verify(5, &key));
    }

    #[test]
    fn test_wrong_key_fails_verification() {
        let commitment = Commitment::new(4, &key());

        assert!(!commitment.verify(4, &key()));
    }

    #[test]
    fn test_known_hmac_vectors() {
        let zero_key = CommitmentKey::from_bytes([0u8; 32]);
        assert_eq!(
            Commitment::new(0, &zero_key).to_string(),
            "9979e4c3ee19965f9ecc6dca6b3954b10c18c1bfa105c512cc3ae58be85db71c"
        );

        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        let counting_key = CommitmentKey::from_bytes(bytes);
        assert_eq!(
            Commitment::new(17, &counting_key).to_string(),
            "47cdebcdb73f89f2b9deff1a4852aab11ac006bfcc7307cfe76e4b7c47b5571a"
        );
    }

    #[test]
    fn test_hex_roundtrip_through_display() {
        let commitment = Commitment::new(42, &key());
        let parsed = Commitment::from_hex(&commitment.to_string()).unwrap();
        assert_eq!(parsed, commitment);
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(matches!(
            Commitment::from_hex("not hex"),
            Err(FrgError::ProtocolViolation(_))
        ));
        assert!(matches!(
            Commitment::from_hex("abcd"),
            Err(FrgError::ProtocolViolation(_))
        ));
    }

    #[test]
    fn test_reveal_verify_mismatch_is_violation() {
        let reveal = Reveal::new(1, key());
        let other = Commitment::new(2, &reveal.key);

        assert!(reveal.verify(&reveal.commitment()).is_ok());
        assert!(matches!(
            reveal.verify(&other),
            Err(FrgError::ProtocolViolation(_))
        ));
    }
}
