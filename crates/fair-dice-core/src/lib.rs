//! Fair Dice Core Library
//!
//! This crate provides the commit-reveal negotiation protocol, the dice model
//! and win-probability analysis, and the game orchestration for a two-party
//! non-transitive dice game between the computer and a remote user.

pub mod config;
pub mod crypto;
pub mod dice;
pub mod error;
pub mod game;
pub mod protocol;

pub use config::GameConfig;
pub use crypto::{Commitment, CommitmentGenerator, CommitmentKey, Reveal, RoundState};
pub use dice::{DiceSet, Die, Matchup, ProbabilityMatrix};
pub use error::{FrgError, Result};
pub use game::{
    Actor, DieChoiceRequest, Game, GameEvent, GameOutcome, GameReport, Player, ScriptedPlayer,
};
pub use protocol::{
    CounterpartValueProvider, FairValueNegotiator, NegotiationResult, RoundId, RoundPurpose,
    ValueRequest,
};
