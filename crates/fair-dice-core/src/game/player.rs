//! The remote side of a game.

use super::types::{DieChoiceRequest, GameEvent};
use crate::error::Result;
use crate::protocol::CounterpartValueProvider;
use async_trait::async_trait;

/// Trait for the user's side of a game.
///
/// Implementations can be:
/// - an interactive console for a human
/// - ScriptedPlayer for tests and demos
#[async_trait]
pub trait Player: CounterpartValueProvider {
    /// Return the set index of the chosen die; must be one of
    /// `request.available`
    async fn choose_die(&mut self, request: &DieChoiceRequest) -> Result<usize>;

    /// Receive a progress notification
    fn observe(&mut self, event: &GameEvent);
}
