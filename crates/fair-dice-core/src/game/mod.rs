//! Game orchestration: move order, dice selection and rolls, each decided by
//! a fair value negotiation with the user.

mod player;
mod scripted;
mod session;
mod types;

pub use player::Player;
pub use scripted::ScriptedPlayer;
pub use session::Game;
pub use types::{Actor, DieChoiceRequest, GameEvent, GameOutcome, GameReport};
