//! The configured set of dice for a session.

use super::die::Die;
use super::probability::ProbabilityMatrix;
use crate::error::{FrgError, Result};
use serde::{Deserialize, Serialize};

/// Minimum number of dice in a playable set
pub const MIN_DICE: usize = 3;

/// Immutable set of at least three dice
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Die>", into = "Vec<Die>")]
pub struct DiceSet {
    dice: Vec<Die>,
}

impl DiceSet {
    pub fn new(dice: Vec<Die>) -> Result<Self> {
        if dice.len() < MIN_DICE {
            return Err(FrgError::config(format!(
                "at least {MIN_DICE} dice are required, got {}",
                dice.len()
            )));
        }
        Ok(Self { dice })
    }

    /// Parse one comma-delimited face list per die
    pub fn parse<I, S>(specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dice = specs
            .into_iter()
            .enumerate()
            .map(|(i, spec)| {
                Die::parse(spec.as_ref()).map_err(|e| match e {
                    FrgError::InvalidConfiguration(msg) => {
                        FrgError::config(format!("die #{}: {msg}", i + 1))
                    }
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(dice)
    }

    pub fn get(&self, index: usize) -> Option<&Die> {
        self.dice.get(index)
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Die> {
        self.dice.iter()
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Pairwise win probabilities for every die in the set
    pub fn probability_matrix(&self) -> ProbabilityMatrix {
        ProbabilityMatrix::from_dice(&self.dice)
    }
}

impl TryFrom<Vec<Die>> for DiceSet {
    type Error = FrgError;

    fn try_from(dice: Vec<Die>) -> Result<Self> {
        Self::new(dice)
    }
}

impl From<DiceSet> for Vec<Die> {
    fn from(set: DiceSet) -> Self {
        set.dice
    }
}

impl<'a> IntoIterator for &'a DiceSet {
    type Item = &'a Die;
    type IntoIter = std::slice::Iter<'a, Die>;

    fn into_iter(self) -> Self::IntoIter {
        self.dice.iter()
    }
}
