//! Violence: kill, break, wake, blast, and the dragon

use strum::IntoEnumIterator;
use tracing::info;

use crate::action::{ActionResult, Candidates, Verb, act, need_object, parser};
use crate::consts::*;
use crate::gameloop::Turn;
use crate::object::{Fixture, Obj, Place};
use crate::player;
use crate::world::{DialogueState, EndgameBonus};

/// "With what? Your bare hands?"
const BARE_HANDS: u16 = 49;

/// `kill` with no object: attack whatever is obviously hostile here
pub fn kill_here(turn: &mut Turn<'_>) -> ActionResult {
    let world = &*turn.world;
    let mut target = if world.dwarf_here().is_some() && world.hostile_stage >= 2 {
        Candidates::Exactly(Obj::Dwarf)
    } else {
        Candidates::None
    };
    if world.here(Obj::Snake) {
        target = target.add(Obj::Snake);
    }
    if world.at(Obj::Dragon) && world.prop(Obj::Dragon) == 0 {
        target = target.add(Obj::Dragon);
    }
    if world.at(Obj::Troll) {
        target = target.add(Obj::Troll);
    }
    if world.here(Obj::Bear) && world.prop(Obj::Bear) == 0 {
        target = target.add(Obj::Bear);
    }

    if target == Candidates::None {
        // nothing fierce; the bird and the clam are fair game
        if world.here(Obj::Bird) && turn.cmd.verb != Some(Verb::Throw) {
            target = Candidates::Exactly(Obj::Bird);
        }
        if world.here(Obj::Clam) || world.here(Obj::Oyster) {
            target = target.add(Obj::Clam);
        }
    }

    turn.cmd.object = match target {
        Candidates::Ambiguous => {
            need_object(turn);
            return Ok(());
        }
        Candidates::Exactly(obj) => Some(obj),
        Candidates::None => None,
    };
    kill(turn)
}

pub fn kill(turn: &mut Turn<'_>) -> ActionResult {
    let world = &mut *turn.world;
    let id = match turn.cmd.object {
        None => 44,
        Some(Obj::Bird) => {
            if world.closing.is_closed() {
                137
            } else {
                world.destroy(Obj::Bird);
                world.set_prop(Obj::Bird, 0);
                if world.place(Obj::Snake) == Place::Room(19) {
                    world.lost_treasures += 1;
                }
                45
            }
        }
        Some(Obj::Clam | Obj::Oyster) => 150,
        Some(Obj::Snake) => 46,
        Some(Obj::Dwarf) => {
            if world.closing.is_closed() {
                dwarf_end(turn);
                return Ok(());
            }
            BARE_HANDS
        }
        Some(Obj::Troll) => 157,
        Some(Obj::Bear) => 165 + ((world.prop(Obj::Bear) + 1) / 2) as u16,
        Some(Obj::Dragon) => {
            if world.prop(Obj::Dragon) != 0 {
                167
            } else {
                turn.speak(BARE_HANDS);
                turn.world.dialogue = DialogueState::DragonQuery;
                turn.halt();
                return Ok(());
            }
        }
        Some(_) => return act(turn),
    };
    turn.speak(id);
    Ok(())
}

/// Answer to "with your bare hands?" at the dragon
pub(crate) fn answer_dragon(turn: &mut Turn<'_>, input: &str) -> ActionResult {
    let Some(yes) = parser::yes_no(turn, input) else {
        return Ok(());
    };
    turn.world.dialogue = DialogueState::Playing;
    if yes {
        turn.speak_item(Obj::Dragon, 1);
        let world = &mut *turn.world;
        world.set_prop(Obj::Dragon, 2);
        world.set_prop(Obj::Rug, 0);
        world.set_fixture(Obj::Dragon, Fixture::Pinned);
        world.set_fixture(Obj::Rug, Fixture::Loose);
        world.move_to(Obj::Dragon, Place::Room(ROOM_DRAGON_LAIR));
        world.move_to(Obj::Rug, Place::Room(ROOM_DRAGON_LAIR));
        let around = [
            Place::Room(ROOM_DRAGON_NORTH),
            Place::Room(ROOM_DRAGON_EAST),
        ];
        for obj in Obj::iter() {
            if around.contains(&world.place(obj)) {
                world.move_to(obj, Place::Room(ROOM_DRAGON_LAIR));
            }
        }
        world.pending_location = ROOM_DRAGON_LAIR;
        info!("dragon slain");
    } else {
        turn.speak(54);
    }
    turn.tick()
}

/// Set off the dynamite in the repository
pub fn blast(turn: &mut Turn<'_>) -> ActionResult {
    let world = &mut *turn.world;
    if world.prop(Obj::Rod2) < 0 || !world.closing.is_closed() {
        return act(turn);
    }
    let bonus = if world.here(Obj::Rod2) {
        EndgameBonus::Splatter
    } else if world.location == ROOM_REPOSITORY_NE {
        EndgameBonus::Lava
    } else {
        EndgameBonus::Victory
    };
    world.bonus = Some(bonus);
    info!(?bonus, "blast");
    turn.speak(bonus.message());
    player::game_over(turn);
    Ok(())
}

pub fn smash(turn: &mut Turn<'_>) -> ActionResult {
    let world = &mut *turn.world;
    let id = match turn.cmd.object {
        Some(Obj::Mirror) => {
            if world.closing.is_closed() {
                turn.speak(197);
                dwarf_end(turn);
                return Ok(());
            }
            148
        }
        Some(Obj::Vase) if world.prop(Obj::Vase) == 0 => {
            if world.toting(Obj::Vase) {
                let loc = world.location;
                world.drop(Obj::Vase, Place::Room(loc));
            }
            world.set_prop(Obj::Vase, 2);
            world.set_fixture(Obj::Vase, Fixture::Pinned);
            198
        }
        _ => return act(turn),
    };
    turn.speak(id);
    Ok(())
}

pub fn wake(turn: &mut Turn<'_>) -> ActionResult {
    if turn.cmd.object != Some(Obj::Dwarf) || !turn.world.closing.is_closed() {
        return act(turn);
    }
    turn.speak(199);
    dwarf_end(turn);
    Ok(())
}

/// The dwarves in the repository wake up and the game ends
pub(crate) fn dwarf_end(turn: &mut Turn<'_>) {
    turn.speak(136);
    player::game_over(turn);
}
