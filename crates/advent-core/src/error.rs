//! Fatal engine faults
//!
//! Anything here is a broken content table or an engine bug, never a
//! normal game event. The turn state machine turns a fault into the
//! `Fatal error.` line and ends the game.

use thiserror::Error;

use crate::consts::RoomId;

/// Unrecoverable engine error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Two words resolved to a combination the parser cannot bind
    #[error("unresolvable grammar in command")]
    Grammar,

    /// The vocabulary handed back a code outside its class
    #[error("vocabulary code {code} for \"{word}\" names nothing")]
    UnknownWord { word: String, code: u16 },

    /// A travel entry carries a condition the interpreter does not know
    #[error("travel condition {condition} in room {room}")]
    TravelCondition { room: RoomId, condition: u16 },

    /// A travel entry names an unknown scripted move
    #[error("special move {code} in room {room}")]
    SpecialMove { room: RoomId, code: u16 },

    /// A travel entry points past the last room
    #[error("destination {dest} in room {room}")]
    Destination { room: RoomId, dest: u16 },

    /// A persisted dialogue state this engine does not recognize
    #[error("invalid state encountered")]
    DialogueState,

    /// Forced moves kept chaining past the repeat cap
    #[error("tick repeated {repeats} times without settling")]
    RunawayTick { repeats: u32 },
}

impl EngineError {
    /// Numeric fault code shown to the player
    pub fn code(&self) -> u16 {
        match self {
            EngineError::Grammar => 36,
            EngineError::TravelCondition { .. } => 37,
            EngineError::SpecialMove { .. } | EngineError::Destination { .. } => 38,
            EngineError::UnknownWord { .. } => 39,
            EngineError::DialogueState => 40,
            EngineError::RunawayTick { .. } => 41,
        }
    }

    /// The line emitted when the fault ends the game
    pub fn fatal_line(&self) -> String {
        format!("Fatal error. (Bug #{}) {}", self.code(), self)
    }
}
