//! Scripted player for tests and demos.

use super::player::Player;
use super::types::{DieChoiceRequest, GameEvent};
use crate::error::{FrgError, Result};
use crate::protocol::{CounterpartValueProvider, ValueRequest};
use async_trait::async_trait;
use std::collections::VecDeque;

/// In-memory player that replays queued answers. Runs out of script means
/// walking away from the table.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPlayer {
    values: VecDeque<u64>,
    dice: VecDeque<usize>,
    /// Every value request received, in order
    pub requests: Vec<ValueRequest>,
    /// Every event observed, in order
    pub events: Vec<GameEvent>,
}

impl ScriptedPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue answers for value requests
    pub fn with_values(mut self, values: impl IntoIterator<Item = u64>) -> Self {
        self.values.extend(values);
        self
    }

    /// Queue answers for die choices
    pub fn with_dice(mut self, dice: impl IntoIterator<Item = usize>) -> Self {
        self.dice.extend(dice);
        self
    }

    /// Number of unused scripted answers
    pub fn remaining(&self) -> usize {
        self.values.len() + self.dice.len()
    }
}

#[async_trait]
impl CounterpartValueProvider for ScriptedPlayer {
    async fn provide_value(&mut self, request: &ValueRequest) -> Result<u64> {
        self.requests.push(request.clone());
        self.values.pop_front().ok_or(FrgError::CounterpartAbandoned)
    }
}

#[async_trait]
impl Player for ScriptedPlayer {
    async fn choose_die(&mut self, _request: &DieChoiceRequest) -> Result<usize> {
        self.dice.pop_front().ok_or(FrgError::CounterpartAbandoned)
    }

    fn observe(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
