//! Game types.

use crate::dice::Die;
use crate::protocol::NegotiationResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of the table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Actor {
    User,
    Computer,
}

impl Actor {
    /// Get the opponent
    pub fn opponent(&self) -> Actor {
        match self {
            Actor::User => Actor::Computer,
            Actor::Computer => Actor::User,
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Actor::User => write!(f, "user"),
            Actor::Computer => write!(f, "computer"),
        }
    }
}

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    UserWins,
    ComputerWins,
    Draw,
}

impl GameOutcome {
    /// Compare the two rolled faces
    pub fn from_faces(user_face: i64, computer_face: i64) -> Self {
        match user_face.cmp(&computer_face) {
            std::cmp::Ordering::Greater => GameOutcome::UserWins,
            std::cmp::Ordering::Less => GameOutcome::ComputerWins,
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameOutcome::UserWins => "User wins",
            GameOutcome::ComputerWins => "Computer wins",
            GameOutcome::Draw => "Draw",
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Asks the user to pick a die
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieChoiceRequest {
    /// Selectable dice with their index in the set
    pub available: Vec<(usize, Die)>,
    /// Computer's die, when the computer picked first
    pub computer_die: Option<Die>,
}

impl DieChoiceRequest {
    pub fn allows(&self, index: usize) -> bool {
        self.available.iter().any(|(i, _)| *i == index)
    }
}

/// Progress notifications for display and audit
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A negotiation round finished and its secret and key are public
    RoundRevealed { result: NegotiationResult },
    FirstMove { actor: Actor },
    DieSelected { actor: Actor, index: usize, die: Die },
    Rolled { actor: Actor, index: u64, face: i64 },
    Finished { report: GameReport },
}

/// Full record of a finished game
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameReport {
    pub first_mover: Actor,
    pub user_die: Die,
    pub computer_die: Die,
    pub user_face: i64,
    pub computer_face: i64,
    pub outcome: GameOutcome,
    /// Win probability of the user's die against the computer's
    pub user_win_probability: f64,
    /// Negotiation rounds in the order they ran
    pub rounds: Vec<NegotiationResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_opponent() {
        assert_eq!(Actor::User.opponent(), Actor::Computer);
        assert_eq!(Actor::Computer.opponent(), Actor::User);
    }

    #[test]
    fn test_outcome_from_faces() {
        assert_eq!(GameOutcome::from_faces(9, 8), GameOutcome::UserWins);
        assert_eq!(GameOutcome::from_faces(1, 3), GameOutcome::ComputerWins);
        assert_eq!(GameOutcome::from_faces(5, 5), GameOutcome::Draw);
    }

    #[test]
    fn test_outcome_str() {
        assert_eq!(GameOutcome::UserWins.as_str(), "User wins");
        assert_eq!(GameOutcome::ComputerWins.as_str(), "Computer wins");
        assert_eq!(GameOutcome::Draw.as_str(), "Draw");
    }

    #[test]
    fn test_choice_request_allows() {
        let die = Die::parse("1,2").unwrap();
        let req = DieChoiceRequest {
            available: vec![(0, die.clone()), (2, die)],
            computer_die: None,
        };
        assert!(req.allows(2));
        assert!(!req.allows(1));
    }
}
