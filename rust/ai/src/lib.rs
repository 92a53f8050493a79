//! Scripted opponent for heads-up play.
//!
//! The engine only cares that an opponent emits legal actions (see
//! `pokerhole_engine::rules`); the decision policy itself lives entirely on
//! this side of the boundary.

use pokerhole_engine::game::Game;
use pokerhole_engine::player::PlayerAction;

pub mod scripted;

pub use scripted::ScriptedOpponent;

/// An action-choosing collaborator for one seat. Implementations read the
/// engine's public surface only and must return an action that is legal for
/// the seat's current state.
pub trait Opponent {
    /// Chooses the next action for `seat`. The second value is the total
    /// bet to raise to, meaningful only when the action is `Raise`.
    fn decide(&mut self, game: &Game, seat: usize) -> (PlayerAction, i64);

    fn name(&self) -> &str;
}

/// Creates an opponent by policy name. `None` for unknown names.
pub fn create_opponent(kind: &str) -> Option<Box<dyn Opponent>> {
    match kind {
        "scripted" => Some(Box::new(ScriptedOpponent::new())),
        _ => None,
    }
}
