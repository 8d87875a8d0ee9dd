//! Player death and reincarnation

use tracing::info;

use crate::action::{ActionResult, parser};
use crate::consts::*;
use crate::gameloop::Turn;
use crate::object::{Obj, Place};
use crate::player::game_over;
use crate::world::DialogueState;

/// Room the player wakes up in after reincarnation
const REINCARNATION_ROOM: RoomId = ROOM_BUILDING;

/// Message explaining it is too late to be reincarnated
const CLOSING_DEATH: u16 = 131;

/// The player has died
pub(crate) fn death(turn: &mut Turn<'_>) {
    info!(
        location = turn.world.location,
        deaths = turn.world.deaths,
        "player died"
    );
    if turn.world.closing.is_closing() {
        turn.speak(CLOSING_DEATH);
        turn.world.deaths += 1;
        game_over(turn);
        return;
    }
    let offer = 81 + u16::from(turn.world.deaths) * 2;
    turn.speak(offer);
    turn.world.dialogue = DialogueState::DeathQuery;
    turn.halt();
}

/// Answer to "do you want to be reincarnated?"
pub(crate) fn answer_reincarnation(turn: &mut Turn<'_>, input: &str) -> ActionResult {
    let Some(yes) = parser::yes_no(turn, input) else {
        return Ok(());
    };
    if !yes {
        turn.speak(54);
        turn.world.gave_up = true;
        game_over(turn);
        return Ok(());
    }

    let reply = 82 + u16::from(turn.world.deaths) * 2;
    turn.speak(reply);
    turn.world.deaths += 1;
    if turn.world.deaths >= MAX_DEATHS {
        game_over(turn);
        return Ok(());
    }

    let world = &mut *turn.world;
    if world.toting(Obj::Lamp) {
        world.set_prop(Obj::Lamp, 0);
    }
    let carried: Vec<Obj> = world.carried().collect();
    for obj in carried.into_iter().rev() {
        let dest = if obj == Obj::Lamp {
            Place::Room(ROOM_ROAD)
        } else {
            Place::from(world.prior_location2)
        };
        world.drop(obj, dest);
    }

    world.dialogue = DialogueState::Playing;
    world.pending_location = REINCARNATION_ROOM;
    world.prior_location = world.location;
    info!(deaths = world.deaths, "player reincarnated");
    turn.tick()
}
