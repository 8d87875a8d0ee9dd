//! advent-core: simulation core for the 350-point Colossal Cave Adventure
//!
//! This crate holds the rules and nothing else. It performs no I/O and
//! embeds no text: rooms, messages, vocabulary and the travel graph are read
//! through the [`CaveContent`] providers. The whole game is one owned,
//! serializable [`WorldState`], moved forward one input line at a time by
//! [`advance`].

pub mod action;
pub mod consts;
pub mod data;
pub mod error;
pub mod gameloop;
pub mod monster;
pub mod object;
pub mod player;
pub mod rng;
pub mod world;

#[cfg(test)]
mod test_cave;

pub use data::CaveContent;
pub use error::EngineError;
pub use gameloop::{GameLoop, GameLoopResult, Turn, advance};
pub use object::{Fixture, Obj, Place};
pub use player::{GameOutcome, ScoreItem, ScoreReport, score};
pub use rng::GameRng;
pub use world::{ClosingPhase, DialogueState, GameOptions, OptionsError, WorldState};

/// Build the starting state, with any caller-supplied fields laid over it
///
/// `overrides` is a partial JSON object in the shape of a serialized
/// [`WorldState`]; missing fields keep their defaults. A full serialized
/// state restores that game exactly.
pub fn new_game(overrides: Option<serde_json::Value>) -> Result<WorldState, serde_json::Error> {
    match overrides {
        Some(value) => WorldState::from_overrides(value),
        None => Ok(WorldState::default()),
    }
}

/// The game has ended and will ignore further input
pub fn is_done(state: &WorldState) -> bool {
    state.is_done()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ROOM_ROAD;

    #[test]
    fn test_new_game_defaults() {
        let state = new_game(None).unwrap();
        assert_eq!(state.location, ROOM_ROAD);
        assert_eq!(state.dialogue, DialogueState::Init);
        assert_eq!(state.tally, 15);
        assert!(!is_done(&state));
    }

    #[test]
    fn test_new_game_overrides() {
        let overrides = serde_json::json!({
            "location": 3,
            "lamp_fuel": 12,
            "rng": { "seed": 9 }
        });
        let state = new_game(Some(overrides)).unwrap();
        assert_eq!(state.location, 3);
        assert_eq!(state.lamp_fuel, 12);
        assert_eq!(state.rng.seed(), 9);
        assert_eq!(state.clock, 30);
        assert_eq!(state.place(Obj::Keys), Place::Room(3));
    }

    #[test]
    fn test_new_game_restores_saved_state() {
        let mut original = WorldState::new(GameRng::new(4));
        original.carry(Obj::Lamp);
        original.turns = 17;
        original.rng.rn2(10);
        let value = serde_json::to_value(&original).unwrap();
        let restored = new_game(Some(value)).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_new_game_rejects_bad_fields() {
        let overrides = serde_json::json!({ "location": "cellar" });
        assert!(new_game(Some(overrides)).is_err());
    }
}
