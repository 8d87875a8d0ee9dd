//! Waving the rod at the fissure, and the fee fie foe foo chant

use tracing::debug;

use crate::action::{ActionResult, act};
use crate::consts::*;
use crate::data::WordClass;
use crate::error::EngineError;
use crate::gameloop::Turn;
use crate::object::{Obj, Place};

/// Nothing happens
const NOTHING_HAPPENS: u16 = 42;
/// "What's the matter, can't you read? Now you'd best start over."
const CHANT_BROKEN: u16 = 151;
/// Words in the chant
const CHANT_LENGTH: i8 = 4;

pub fn wave(turn: &mut Turn<'_>) -> ActionResult {
    let world = &*turn.world;
    let Some(obj) = turn.cmd.object else {
        return act(turn);
    };
    let holding = world.toting(obj) || (obj == Obj::Rod && world.toting(Obj::Rod2));
    if !holding {
        turn.speak(29);
        return Ok(());
    }
    if obj != Obj::Rod
        || !world.at(Obj::Fissure)
        || !world.toting(obj)
        || world.closing.is_closing()
    {
        return act(turn);
    }

    let bridged = 1 - world.prop(Obj::Fissure);
    turn.world.set_prop(Obj::Fissure, bridged);
    turn.speak_item(Obj::Fissure, 2 - bridged);
    Ok(())
}

/// One word of the chant; the whole sequence brings the eggs home
pub fn chant(turn: &mut Turn<'_>) -> ActionResult {
    let word = turn.cmd.verb_word().unwrap_or_default().to_string();
    let content = turn.content;
    let step = content
        .lookup_class(&word, WordClass::Special)
        .and_then(|w| i8::try_from(w.value).ok())
        .ok_or(EngineError::UnknownWord { word, code: 3000 })?;

    let world = &mut *turn.world;
    if world.chant != 1 - step {
        let id = if world.chant != 0 {
            CHANT_BROKEN
        } else {
            NOTHING_HAPPENS
        };
        turn.speak(id);
        return Ok(());
    }

    world.chant = step;
    if step != CHANT_LENGTH {
        turn.speak(54);
        return Ok(());
    }
    world.chant = 0;

    let giant = Place::Room(ROOM_GIANT);
    if world.place(Obj::Eggs) == giant || (world.toting(Obj::Eggs) && world.location == ROOM_GIANT) {
        turn.speak(NOTHING_HAPPENS);
        return Ok(());
    }

    // eggs paid to the troll: he comes back for another toll
    if world.place(Obj::Eggs) == Place::Nowhere
        && world.place(Obj::Troll) == Place::Nowhere
        && world.prop(Obj::Troll) == 0
    {
        world.set_prop(Obj::Troll, 1);
    }

    let state = if world.here(Obj::Eggs) {
        1
    } else if world.location == ROOM_GIANT {
        0
    } else {
        2
    };
    world.move_to(Obj::Eggs, giant);
    debug!(state, "eggs return to the giant room");
    turn.speak_item(Obj::Eggs, state);
    Ok(())
}
