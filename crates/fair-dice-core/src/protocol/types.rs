//! Protocol types.

use crate::crypto::{Commitment, CommitmentKey, Reveal};
use crate::error::{FrgError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique negotiation round identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(Uuid);

impl RoundId {
    /// Create a new random round ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RoundId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for RoundId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Debug for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundId({})", self.0)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a negotiated value is used for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPurpose {
    FirstMove,
    UserRoll,
    ComputerRoll,
}

impl RoundPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundPurpose::FirstMove => "first move",
            RoundPurpose::UserRoll => "user roll",
            RoundPurpose::ComputerRoll => "computer roll",
        }
    }
}

impl fmt::Display for RoundPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the counterpart sees when asked for its value. The commitment is
/// already fixed at this point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRequest {
    pub round: RoundId,
    pub purpose: RoundPurpose,
    pub min: u64,
    pub max: u64,
    pub commitment: Commitment,
}

impl ValueRequest {
    pub fn contains(&self, value: u64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Outcome of one round, with everything needed to audit it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegotiationResult {
    pub round: RoundId,
    pub purpose: RoundPurpose,
    /// Digest published before the counterpart chose
    pub commitment: Commitment,
    /// Revealed secret
    pub secret: u64,
    /// Revealed HMAC key
    pub key: CommitmentKey,
    pub counterpart_value: u64,
    /// Size of the value space, `max + 1`
    pub range: u64,
    /// Agreed value, `(secret + counterpart_value) mod range`
    pub value: u64,
}

impl NegotiationResult {
    /// Upper bound of the negotiated range; `None` for a record claiming an
    /// empty range
    pub fn max(&self) -> Option<u64> {
        self.range.checked_sub(1)
    }

    pub fn reveal(&self) -> Reveal {
        Reveal::new(self.secret, self.key.clone())
    }

    /// Re-check the commitment against the reveal and the published value
    /// against the combination formula
    pub fn verify(&self) -> Result<()> {
        self.reveal().verify(&self.commitment)?;
        if self.range == 0 || self.secret >= self.range || self.counterpart_value >= self.range {
            return Err(FrgError::violation(format!(
                "round {} has inputs outside range {}",
                self.round, self.range
            )));
        }
        let expected = super::combine(self.secret, self.counterpart_value, self.range);
        if expected != Some(self.value) {
            return Err(FrgError::violation(format!(
                "round {} published {} but ({} + {}) mod {} = {}",
                self.round,
                self.value,
                self.secret,
                self.counterpart_value,
                self.range,
                expected.unwrap_or_default()
            )));
        }
        Ok(())
    }
}
