//! Per-round commitment generator.
//!
//! A generator lives for exactly one negotiation round and moves through
//! `Uncommitted -> Committed -> Revealed`. The secret is drawn and the digest
//! published on `commit`; the secret and key are released on `reveal`.

use super::commitment::{Commitment, Reveal};
use super::key::CommitmentKey;
use crate::error::{FrgError, Result};
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Observable state of a generator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    Uncommitted,
    Committed,
    Revealed,
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundState::Uncommitted => write!(f, "uncommitted"),
            RoundState::Committed => write!(f, "committed"),
            RoundState::Revealed => write!(f, "revealed"),
        }
    }
}

enum Phase {
    Uncommitted,
    Committed(Opening),
    Revealed(Opening),
}

struct Opening {
    reveal: Reveal,
    commitment: Commitment,
}

/// Commit-reveal generator owning its own entropy source
pub struct CommitmentGenerator<R = OsRng> {
    rng: R,
    phase: Phase,
}

impl CommitmentGenerator<OsRng> {
    /// Generator backed by the operating system CSPRNG
    pub fn new() -> Self {
        Self::with_rng(OsRng)
    }
}

impl Default for CommitmentGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> CommitmentGenerator<R> {
    /// Generator backed by an explicit cryptographically secure source
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            phase: Phase::Uncommitted,
        }
    }

    /// Draw a secret uniformly from `[0, max]`, bind it under a fresh key and
    /// return the digest to publish. Allowed once per generator.
    pub fn commit(&mut self, max: u64) -> Result<Commitment> {
        if !matches!(self.phase, Phase::Uncommitted) {
            return Err(FrgError::violation(format!(
                "commit requested in {} state",
                self.state()
            )));
        }
        if max == u64::MAX {
            return Err(FrgError::config("range upper bound must be below u64::MAX"));
        }

        let key = CommitmentKey::random_with(&mut self.rng);
        let secret = self.rng.gen_range(0..=max);
        let commitment = Commitment::new(secret, &key);

        self.phase = Phase::Committed(Opening {
            reveal: Reveal::new(secret, key),
            commitment,
        });
        Ok(commitment)
    }

    /// Release the secret and key. Repeated calls return the same opening.
    pub fn reveal(&mut self) -> Result<Reveal> {
        match std::mem::replace(&mut self.phase, Phase::Uncommitted) {
            Phase::Uncommitted => Err(FrgError::violation("reveal requested before commit")),
            Phase::Committed(opening) | Phase::Revealed(opening) => {
                let reveal = opening.reveal.clone();
                self.phase = Phase::Revealed(opening);
                Ok(reveal)
            }
        }
    }
}

impl<R> CommitmentGenerator<R> {
    pub fn state(&self) -> RoundState {
        match self.phase {
            Phase::Uncommitted => RoundState::Uncommitted,
            Phase::Committed(_) => RoundState::Committed,
            Phase::Revealed(_) => RoundState::Revealed,
        }
    }

    /// The published digest, once committed
    pub fn digest(&self) -> Option<Commitment> {
        match &self.phase {
            Phase::Uncommitted => None,
            Phase::Committed(o) | Phase::Revealed(o) => Some(o.commitment),
        }
    }
}
