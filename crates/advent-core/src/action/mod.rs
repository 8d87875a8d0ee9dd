//! Player action system
//!
//! A parsed command is either a motion, handed to the movement resolver, or
//! a verb with an optional object, dispatched to one of the handlers below.

pub mod eat;
pub mod fight;
pub mod lamp;
pub mod liquid;
pub mod movement;
pub mod open_close;
pub mod parser;
pub mod pickup;
pub mod read;
pub mod throw;
pub mod wave;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr};
use tracing::debug;

use crate::data::{Motion, Word, WordClass};
use crate::error::EngineError;
use crate::gameloop::Turn;
use crate::object::{Fixture, Obj};
use crate::player;
use crate::world::{DialogueState, Knife};

/// Result of running a handler; errors are fatal engine faults
pub type ActionResult = Result<(), EngineError>;

/// Action verbs, numbered as in the vocabulary
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    Display,
    FromRepr,
)]
#[repr(u8)]
pub enum Verb {
    Take = 1,
    Drop,
    Say,
    Open,
    Nothing,
    Lock,
    On,
    Off,
    Wave,
    Calm,
    Walk,
    Kill,
    Pour,
    Eat,
    Drink,
    Rub,
    Throw,
    Quit,
    Find,
    Inventory,
    Feed,
    Fill,
    Blast,
    Score,
    Foo,
    Brief,
    Read,
    Break,
    Wake,
    Suspend,
    Hours,
    Log,
}

impl Verb {
    /// Verb for a vocabulary value
    pub fn from_value(value: u16) -> Option<Self> {
        u8::try_from(value).ok().and_then(Self::from_repr)
    }

    pub fn value(self) -> u16 {
        self as u16
    }
}

/// One word of input and what it resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub word: Word,
}

/// The parsed command; lives for a single call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    pub verb: Option<Verb>,
    pub object: Option<Obj>,
    pub motion: Option<Motion>,
    pub word1: Option<Token>,
    pub word2: Option<Token>,
    /// Text following `say`
    pub said: String,
}

impl Command {
    fn word_of(&self, class: WordClass) -> Option<&str> {
        [&self.word1, &self.word2]
            .into_iter()
            .flatten()
            .find(|t| t.word.class == class)
            .map(|t| t.text.as_str())
    }

    /// The object word as typed
    pub fn noun_word(&self) -> Option<&str> {
        self.word_of(WordClass::Object)
    }

    /// The verb word as typed
    pub fn verb_word(&self) -> Option<&str> {
        self.word_of(WordClass::Verb)
    }
}

/// Accumulates possible targets when the player names none
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidates {
    None,
    Exactly(Obj),
    Ambiguous,
}

impl Candidates {
    pub fn add(self, obj: Obj) -> Self {
        match self {
            Candidates::None => Candidates::Exactly(obj),
            _ => Candidates::Ambiguous,
        }
    }
}

/// Parse a line and act on it. Leaves `turn.halted` set when the command
/// was rejected before anything happened.
pub(crate) fn handle_input(turn: &mut Turn<'_>, input: &str) -> ActionResult {
    if !parser::parse(turn, input)? {
        turn.halt();
        return Ok(());
    }

    debug!(
        location = turn.world.location,
        verb = ?turn.cmd.verb,
        object = ?turn.cmd.object,
        motion = ?turn.cmd.motion,
        "command"
    );

    if let Some(motion) = turn.cmd.motion {
        return movement::do_move(turn, motion);
    }
    if turn.cmd.verb == Some(Verb::Say) {
        return say(turn);
    }
    match turn.cmd.object {
        Some(obj) => resolve_object(turn, obj),
        None => intransitive(turn),
    }
}

/// Work out what the named object really refers to here
fn resolve_object(turn: &mut Turn<'_>, obj: Obj) -> ActionResult {
    let world = &*turn.world;
    let loc = world.location;

    if world.fixture(obj) == Fixture::Room(loc) || world.here(obj) {
        return transitive_object(turn);
    }

    if obj == Obj::Grate {
        let motion = match loc {
            1 | 4 | 7 => Some(Motion::DEPRESSION),
            10..=14 => Some(Motion::ENTRANCE),
            _ => None,
        };
        if let Some(motion) = motion {
            turn.cmd.motion = Some(motion);
            return movement::do_move(turn, motion);
        }
    }

    if world.dwarf_here().is_some() && world.hostile_stage >= 2 {
        turn.cmd.object = Some(Obj::Dwarf);
        return transitive_object(turn);
    }

    if world.liquid_at_location().map(|l| l.obj()) == Some(obj) {
        return transitive_object(turn);
    }

    if obj == Obj::Plant && world.at(Obj::Plant2) && world.prop(Obj::Plant2) != 0 {
        turn.cmd.object = Some(Obj::Plant2);
        return transitive_object(turn);
    }

    if obj == Obj::Knife && world.knife == Knife::Lying(loc) {
        turn.speak(116);
        turn.world.knife = Knife::Explained;
        return Ok(());
    }

    if obj == Obj::Rod && world.here(Obj::Rod2) {
        turn.cmd.object = Some(Obj::Rod2);
        return transitive_object(turn);
    }

    if matches!(turn.cmd.verb, Some(Verb::Find | Verb::Inventory)) {
        return transitive_object(turn);
    }

    see_nothing(turn);
    Ok(())
}

/// "I see no <word> here."
pub(crate) fn see_nothing(turn: &mut Turn<'_>) {
    let line = match turn.cmd.noun_word() {
        Some(noun) => format!("I see no {noun} here."),
        None => "I see nothing like that here.".to_string(),
    };
    turn.say(line);
}

fn transitive_object(turn: &mut Turn<'_>) -> ActionResult {
    match turn.cmd.verb {
        Some(verb) => transitive(turn, verb),
        None => {
            let line = match turn.cmd.noun_word() {
                Some(noun) => format!("What do you want to do with the {noun}?"),
                None => "What do you want to do with that?".to_string(),
            };
            turn.say(line);
            Ok(())
        }
    }
}

/// Dispatch a verb that has an object
pub(crate) fn transitive(turn: &mut Turn<'_>, verb: Verb) -> ActionResult {
    match verb {
        Verb::Calm
        | Verb::Walk
        | Verb::Quit
        | Verb::Score
        | Verb::Foo
        | Verb::Brief
        | Verb::Suspend
        | Verb::Hours
        | Verb::Log => act(turn),
        Verb::Take => pickup::take(turn),
        Verb::Drop => pickup::drop(turn),
        Verb::Say => say(turn),
        Verb::Open | Verb::Lock => open_close::open(turn),
        Verb::Nothing => {
            turn.speak(54);
            Ok(())
        }
        Verb::On => lamp::turn_on(turn),
        Verb::Off => lamp::turn_off(turn),
        Verb::Wave => wave::wave(turn),
        Verb::Kill => fight::kill(turn),
        Verb::Pour => liquid::pour(turn),
        Verb::Eat => eat::eat(turn),
        Verb::Drink => liquid::drink(turn),
        Verb::Rub => {
            if turn.cmd.object == Some(Obj::Lamp) {
                act(turn)
            } else {
                turn.speak(76);
                Ok(())
            }
        }
        Verb::Throw => throw::throw(turn),
        Verb::Find | Verb::Inventory => pickup::find(turn),
        Verb::Feed => eat::feed(turn),
        Verb::Fill => liquid::fill(turn),
        Verb::Blast => fight::blast(turn),
        Verb::Read => read::read(turn),
        Verb::Break => fight::smash(turn),
        Verb::Wake => fight::wake(turn),
    }
}

/// Dispatch a verb typed on its own
fn intransitive(turn: &mut Turn<'_>) -> ActionResult {
    let Some(verb) = turn.cmd.verb else {
        return Err(EngineError::Grammar);
    };
    match verb {
        Verb::Drop
        | Verb::Say
        | Verb::Wave
        | Verb::Calm
        | Verb::Rub
        | Verb::Throw
        | Verb::Find
        | Verb::Feed
        | Verb::Break
        | Verb::Wake => {
            need_object(turn);
            Ok(())
        }
        Verb::Take => pickup::take_here(turn),
        Verb::Open | Verb::Lock => open_close::open_here(turn),
        Verb::Nothing => {
            turn.speak(54);
            Ok(())
        }
        Verb::On | Verb::Off | Verb::Pour => transitive(turn, verb),
        Verb::Walk | Verb::Hours | Verb::Log => act(turn),
        Verb::Kill => fight::kill_here(turn),
        Verb::Eat => eat::eat_here(turn),
        Verb::Drink => liquid::drink_here(turn),
        Verb::Quit => {
            turn.speak(22);
            turn.world.dialogue = DialogueState::GiveUpQuery;
            turn.halt();
            Ok(())
        }
        Verb::Blast => fight::blast(turn),
        Verb::Score => {
            player::score::report(turn);
            Ok(())
        }
        Verb::Foo => wave::chant(turn),
        Verb::Brief => {
            turn.world.detail = 3;
            turn.speak(156);
            Ok(())
        }
        Verb::Suspend => {
            turn.world.save_requested = true;
            Ok(())
        }
        Verb::Inventory => {
            pickup::inventory(turn);
            Ok(())
        }
        Verb::Fill => liquid::fill_here(turn),
        Verb::Read => read::read_here(turn),
    }
}

/// Speak the default message for the current verb
pub(crate) fn act(turn: &mut Turn<'_>) -> ActionResult {
    let verb = turn.cmd.verb.ok_or_else(|| EngineError::UnknownWord {
        word: turn.cmd.verb_word().unwrap_or_default().to_string(),
        code: 2000,
    })?;
    let id = turn.content.action_default(verb);
    turn.speak(id);
    Ok(())
}

/// "<Verb> what?"
pub(crate) fn need_object(turn: &mut Turn<'_>) {
    let word = turn.cmd.verb_word().unwrap_or("do");
    let mut chars = word.chars();
    let line = match chars.next() {
        Some(first) => format!("{}{} what?", first.to_uppercase(), chars.as_str()),
        None => "Do what?".to_string(),
    };
    turn.say(line);
}

/// Echo what was said, or act on a magic word
fn say(turn: &mut Turn<'_>) -> ActionResult {
    let said = turn.cmd.said.trim().to_string();
    let Some(first) = said.split_whitespace().next().map(str::to_lowercase) else {
        turn.say("Say what?");
        return Ok(());
    };

    let content = turn.content;
    match content.lookup(&first).and_then(Word::from_code) {
        Some(word)
            if word.class == WordClass::Motion
                && matches!(word.value, 62 | 65 | 71) =>
        {
            let motion = Motion(word.value);
            turn.cmd.verb = None;
            turn.cmd.motion = Some(motion);
            movement::do_move(turn, motion)
        }
        Some(word) if word.class == WordClass::Verb && word.value == Verb::Foo.value() => {
            turn.cmd.verb = Some(Verb::Foo);
            turn.cmd.word1 = Some(Token { text: first, word });
            wave::chant(turn)
        }
        _ => {
            turn.say(format!("Okay, \"{said}\"."));
            turn.say("");
            Ok(())
        }
    }
}
