//! Fair value negotiation: one commit, solicit, reveal, combine round.

mod negotiator;
mod types;

pub use negotiator::{combine, CounterpartValueProvider, FairValueNegotiator};
pub use types::{NegotiationResult, RoundId, RoundPurpose, ValueRequest};
