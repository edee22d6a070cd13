//! Cryptographic primitives for the fair value negotiation.
//!
//! This module provides:
//! - CommitmentKey, the fresh 256-bit HMAC key of one round
//! - Commitment and Reveal for the keyed-hash commit-reveal scheme
//! - CommitmentGenerator, the per-round commit/reveal state machine

mod commitment;
mod generator;
mod key;

pub use commitment::{Commitment, Reveal};
pub use generator::{CommitmentGenerator, RoundState};
pub use key::{CommitmentKey, KEY_LEN};

/// Serde helpers for fixed 32-byte values carried as hex strings.
pub(crate) mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        hex::encode(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        let hex_str = String::deserialize(d)?;
        let bytes = hex::decode(&hex_str).map_err(serde::de::Error::custom)?;
        bytes
            .try_into()
            .map_err(|_| serde::de::Error::custom("expected 32 bytes"))
    }
}
