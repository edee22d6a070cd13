//! Dice model and win-probability analysis.

mod die;
mod probability;
mod set;

pub use die::Die;
pub use probability::{tie_probability, win_probability, Matchup, ProbabilityMatrix};
pub use set::{DiceSet, MIN_DICE};
