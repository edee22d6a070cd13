//! The fair value negotiator.

use super::types::{NegotiationResult, RoundId, RoundPurpose, ValueRequest};
use crate::crypto::CommitmentGenerator;
use crate::error::{FrgError, Result};
use async_trait::async_trait;
use rand::{CryptoRng, RngCore};
use tracing::{debug, info, warn};

/// Source of the counterpart's contribution to a round.
///
/// Implementations may suspend (waiting on a remote user, a terminal, a
/// network peer). Returning `FrgError::CounterpartAbandoned` ends the round
/// without revealing anything.
#[async_trait]
pub trait CounterpartValueProvider: Send {
    /// Return a value in `[request.min, request.max]`
    async fn provide_value(&mut self, request: &ValueRequest) -> Result<u64>;
}

/// `(secret + counterpart) mod range`, computed without overflow. `None`
/// for an empty range.
pub fn combine(secret: u64, counterpart: u64, range: u64) -> Option<u64> {
    (u128::from(secret) + u128::from(counterpart))
        .checked_rem(u128::from(range))
        .map(|v| v as u64)
}

/// Runs negotiation rounds. Every round gets a fresh generator, so nothing
/// carries over between rounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct FairValueNegotiator;

impl FairValueNegotiator {
    pub fn new() -> Self {
        Self
    }

    /// Negotiate a value in `[0, max]` using the OS CSPRNG for the secret
    pub async fn negotiate<P>(
        &self,
        purpose: RoundPurpose,
        max: u64,
        provider: &mut P,
    ) -> Result<NegotiationResult>
    where
        P: CounterpartValueProvider + ?Sized,
    {
        self.negotiate_with(CommitmentGenerator::new(), purpose, max, provider)
            .await
    }

    /// Negotiate with a caller-supplied, not yet committed generator
    pub async fn negotiate_with<R, P>(
        &self,
        mut generator: CommitmentGenerator<R>,
        purpose: RoundPurpose,
        max: u64,
        provider: &mut P,
    ) -> Result<NegotiationResult>
    where
        R: RngCore + CryptoRng + Send,
        P: CounterpartValueProvider + ?Sized,
    {
        let round = RoundId::new();
        let commitment = generator.commit(max)?;
        info!(%round, %purpose, max, digest = %commitment, "Commitment published");

        let request = ValueRequest {
            round,
            purpose,
            min: 0,
            max,
            commitment,
        };
        let counterpart_value = match provider.provide_value(&request).await {
            Ok(v) => v,
            Err(e) => {
                warn!(%round, %purpose, error = %e, "Round abandoned before reveal");
                return Err(e);
            }
        };
        if !request.contains(counterpart_value) {
            return Err(FrgError::violation(format!(
                "counterpart value {counterpart_value} outside [0, {max}]"
            )));
        }

        let reveal = generator.reveal()?;
        let range = max + 1;
        let value = combine(reveal.secret, counterpart_value, range)
            .ok_or_else(|| FrgError::violation("empty negotiation range"))?;
        debug!(
            %round,
            secret = reveal.secret,
            key = %reveal.key,
            counterpart_value,
            value,
            "Round revealed"
        );

        let result = NegotiationResult {
            round,
            purpose,
            commitment,
            secret: reveal.secret,
            key: reveal.key,
            counterpart_value,
            range,
            value,
        };
        result.verify()?;
        info!(%round, %purpose, value, "Round complete");
        Ok(result)
    }
}
