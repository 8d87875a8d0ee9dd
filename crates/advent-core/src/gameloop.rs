//! Turn state machine
//!
//! One call to [`advance`] takes one line of input through the dialogue
//! state machine, runs the post-action tick, and returns the output lines.

use tracing::error;

use crate::action::{self, ActionResult, Command, movement, parser};
use crate::data::CaveContent;
use crate::error::EngineError;
use crate::monster;
use crate::object::Obj;
use crate::player::{self, death, score::GameOutcome};
use crate::world::{DialogueState, WorldState, timeout};

/// Message asking whether the player wants instructions
const INTRO_QUESTION: u16 = 65;
/// The instructions themselves
const INSTRUCTIONS: u16 = 1;

/// Everything one `advance` call works with
///
/// The command slots and the output buffer live here and are dropped at the
/// end of the call, so nothing transient is ever persisted.
pub struct Turn<'a> {
    pub world: &'a mut WorldState,
    pub content: &'a dyn CaveContent,
    pub cmd: Command,
    pub out: Vec<String>,
    /// Stop: no further tick work this call
    pub halted: bool,
    /// Run the tick again
    pub repeat: bool,
}

impl<'a> Turn<'a> {
    pub fn new(world: &'a mut WorldState, content: &'a dyn CaveContent) -> Self {
        Self {
            world,
            content,
            cmd: Command::default(),
            out: Vec::new(),
            halted: false,
            repeat: false,
        }
    }

    /// Print a numbered message followed by a blank line
    pub fn speak(&mut self, id: u16) {
        if id == 0 {
            return;
        }
        let content = self.content;
        let lines = content.message(id);
        if lines.is_empty() {
            return;
        }
        self.out.extend(lines.iter().map(|l| (*l).to_string()));
        self.out.push(String::new());
    }

    /// Print an object's description for a state
    pub fn speak_item(&mut self, obj: Obj, state: i8) {
        let content = self.content;
        if let Some(text) = content.item_description(obj, state) {
            self.out.push(text.to_string());
            self.out.push(String::new());
        }
    }

    pub fn say(&mut self, line: impl Into<String>) {
        self.out.push(line.into());
    }

    pub fn halt(&mut self) {
        self.halted = true;
    }

    /// End the game on an engine fault
    pub fn fault(&mut self, err: &EngineError) {
        error!(code = err.code(), location = self.world.location, "{err}");
        self.out.push(err.fatal_line());
        self.world.dialogue = DialogueState::GameOver;
        self.world.fault = Some(err.code());
        self.halted = true;
    }

    /// Run one input line through the current dialogue state
    fn step(&mut self, input: &str) -> ActionResult {
        match self.world.dialogue {
            DialogueState::Init => {
                self.world.dialogue = DialogueState::IntroConfirm;
                self.speak(INTRO_QUESTION);
                Ok(())
            }
            DialogueState::IntroConfirm => {
                let Some(yes) = parser::yes_no(self, input) else {
                    return Ok(());
                };
                if yes {
                    self.speak(INSTRUCTIONS);
                }
                self.world.dialogue = DialogueState::Playing;
                self.tick()
            }
            DialogueState::Playing => {
                action::handle_input(self, input)?;
                self.tick()
            }
            DialogueState::DeathQuery => death::answer_reincarnation(self, input),
            DialogueState::DragonQuery => action::fight::answer_dragon(self, input),
            DialogueState::GiveUpQuery => answer_give_up(self, input),
            DialogueState::ReadOysterQuery => action::read::answer_oyster(self, input),
            DialogueState::GameOver => Ok(()),
            DialogueState::Unknown => Err(EngineError::DialogueState),
        }
    }

    /// The post-action tick: closing check, hostiles, movement, timers.
    /// Forced moves make it run again.
    pub(crate) fn tick(&mut self) -> ActionResult {
        let mut repeats = 0u32;
        loop {
            if self.halted || self.world.is_done() {
                return Ok(());
            }
            self.repeat = false;

            timeout::check_closing_exit(self);
            monster::move_hostiles(self);
            if self.halted {
                return Ok(());
            }

            movement::resolve(self)?;
            if self.halted {
                return Ok(());
            }

            if !self.repeat {
                timeout::run_timers(self);
            }
            if !self.repeat {
                return Ok(());
            }

            repeats += 1;
            if repeats >= self.world.tick_limit {
                return Err(EngineError::RunawayTick { repeats });
            }
        }
    }
}

fn answer_give_up(turn: &mut Turn<'_>, input: &str) -> ActionResult {
    let Some(yes) = parser::yes_no(turn, input) else {
        return Ok(());
    };
    turn.speak(54);
    if yes {
        turn.world.gave_up = true;
        player::game_over(turn);
        return Ok(());
    }
    turn.world.dialogue = DialogueState::Playing;
    turn.tick()
}

/// Feed one line of input to the game and return what it printed
///
/// Once the game is over this does nothing and returns no lines.
pub fn advance(world: &mut WorldState, content: &dyn CaveContent, input: &str) -> Vec<String> {
    if world.is_done() {
        return Vec::new();
    }
    let mut turn = Turn::new(world, content);
    if let Err(err) = turn.step(input) {
        turn.fault(&err);
    }
    turn.out
}

/// Where the game stands after a call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Continue playing
    Continue,
    /// The game ended
    GameOver(GameOutcome),
    /// The player asked to suspend; save and quit
    SaveAndQuit,
}

/// A running game bound to its content
pub struct GameLoop<'c, C: CaveContent> {
    state: WorldState,
    content: &'c C,
}

impl<'c, C: CaveContent> GameLoop<'c, C> {
    /// Create a new game loop with the given state
    pub fn new(state: WorldState, content: &'c C) -> Self {
        Self { state, content }
    }

    /// Get reference to game state
    pub fn state(&self) -> &WorldState {
        &self.state
    }

    /// Get mutable reference to game state
    pub fn state_mut(&mut self) -> &mut WorldState {
        &mut self.state
    }

    pub fn is_done(&self) -> bool {
        self.state.is_done()
    }

    /// Execute one line of input
    pub fn advance(&mut self, input: &str) -> Vec<String> {
        advance(&mut self.state, self.content, input)
    }

    pub fn status(&self) -> GameLoopResult {
        if self.state.is_done() {
            GameLoopResult::GameOver(GameOutcome::of(&self.state))
        } else if self.state.save_requested {
            GameLoopResult::SaveAndQuit
        } else {
            GameLoopResult::Continue
        }
    }
}
