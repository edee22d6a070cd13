//! A single die: an immutable, ordered list of face values.

use crate::error::{FrgError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct Die {
    faces: Vec<i64>,
}

impl Die {
    /// Build a die from its faces. At least one face is required.
    pub fn new(faces: Vec<i64>) -> Result<Self> {
        if faces.is_empty() {
            return Err(FrgError::config("a die needs at least one face"));
        }
        Ok(Self { faces })
    }

    /// Parse a comma-delimited face list such as `2,2,4,4,9,9`
    pub fn parse(spec: &str) -> Result<Self> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(FrgError::config("empty die specification"));
        }
        let faces = spec
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<i64>().map_err(|_| {
                    FrgError::config(format!("face {part:?} in {spec:?} is not an integer"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(faces)
    }

    /// Face selected by a roll index. Total: any index maps onto a face.
    pub fn result_for_index(&self, index: u64) -> i64 {
        let len = self.faces.len() as u64;
        self.faces[(index % len) as usize]
    }

    pub fn faces(&self) -> &[i64] {
        &self.faces
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Never true for a constructed die
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Largest valid roll index, i.e. the upper bound of a roll negotiation
    pub fn max_index(&self) -> u64 {
        self.faces.len() as u64 - 1
    }
}

impl FromStr for Die {
    type Err = FrgError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<Vec<i64>> for Die {
    type Error = FrgError;

    fn try_from(faces: Vec<i64>) -> Result<Self> {
        Self::new(faces)
    }
}

impl From<Die> for Vec<i64> {
    fn from(die: Die) -> Self {
        die.faces
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces: Vec<String> = self.faces.iter().map(i64::to_string).collect();
        write!(f, "[{}]", faces.join(","))
    }
}
