//! Per-turn timers
//!
//! Lamp fuel, the two closing clocks and the endgame relocation. These run
//! at the end of every tick that did not ask to repeat.

use tracing::info;

use crate::action::movement;
use crate::consts::*;
use crate::gameloop::Turn;
use crate::object::{Fixture, Obj, Place};
use crate::player;
use crate::world::{ClosingPhase, Knife};

/// Block leaving the cave once closing has started
pub(crate) fn check_closing_exit(turn: &mut Turn<'_>) {
    let world = &*turn.world;
    let pending = world.pending_location;
    if pending == 0 || pending > ROOM_OUTSIDE_GRATE || !world.closing.is_closing() {
        return;
    }
    turn.speak(130);
    let world = &mut *turn.world;
    world.pending_location = world.location;
    if world.closing == ClosingPhase::Closing {
        world.clock2 = PANIC_CLOCK;
        world.closing = ClosingPhase::Panic;
    }
}

/// End-of-turn bookkeeping; may ask the tick to repeat
pub(crate) fn run_timers(turn: &mut Turn<'_>) {
    if turn.world.closing.is_closed() {
        if turn.world.prop(Obj::Oyster) < 0 && turn.world.toting(Obj::Oyster) {
            turn.speak_item(Obj::Oyster, 1);
        }
        let world = &mut *turn.world;
        let carried: Vec<Obj> = world.carried().collect();
        for obj in carried {
            let state = world.prop(obj);
            if state < 0 {
                world.set_prop(obj, -1 - state);
            }
        }
    }

    let world = &mut *turn.world;
    world.was_dark = world.is_dark();

    if let Knife::Lying(room) = world.knife {
        if room != world.location {
            world.knife = Knife::Absent;
        }
    }

    if clock_step(turn) {
        turn.repeat = true;
    }
}

/// Advance the clocks and the lamp. Returns true if the cave just closed.
fn clock_step(turn: &mut Turn<'_>) -> bool {
    let world = &mut *turn.world;
    world.chant = if world.chant > 0 { -world.chant } else { 0 };

    let loc = world.location;
    if world.tally == 0 && loc >= DEEP_ROOM && loc != ROOM_Y2 {
        world.clock -= 1;
    }
    if world.clock < 0 {
        world.clock2 -= 1;
    }

    if world.clock == 0 {
        start_closing(turn);
        return false;
    }
    if world.clock2 == 0 {
        close_cave(turn);
        return true;
    }

    if world.prop(Obj::Lamp) == 1 {
        world.lamp_fuel -= 1;
    }
    lamp_step(turn);
    false
}

fn lamp_step(turn: &mut Turn<'_>) {
    let world = &mut *turn.world;
    let fuel = world.lamp_fuel;

    if fuel <= LAMP_WARNING
        && world.here(Obj::Batteries)
        && world.prop(Obj::Batteries) == 0
        && world.here(Obj::Lamp)
    {
        turn.speak(188);
        let world = &mut *turn.world;
        world.set_prop(Obj::Batteries, 1);
        if world.toting(Obj::Batteries) {
            world.drop(Obj::Batteries, Place::from(world.location));
        }
        world.lamp_fuel += BATTERY_FUEL;
        world.lamp_warned = false;
        return;
    }

    if fuel == 0 {
        world.lamp_fuel = -1;
        world.set_prop(Obj::Lamp, 0);
        if world.here(Obj::Lamp) {
            turn.speak(184);
        }
        return;
    }

    if fuel < 0 && world.location <= ROOM_OUTSIDE_GRATE {
        turn.speak(185);
        turn.world.gave_up = true;
        player::game_over(turn);
        return;
    }

    if fuel <= LAMP_WARNING && !world.lamp_warned && world.here(Obj::Lamp) {
        world.lamp_warned = true;
        let id = if world.prop(Obj::Batteries) == 1 {
            189
        } else if world.place(Obj::Batteries) == Place::Nowhere {
            183
        } else {
            187
        };
        turn.speak(id);
    }
}

/// First clock ran out: announce closing and clear the cave
fn start_closing(turn: &mut Turn<'_>) {
    let world = &mut *turn.world;
    world.set_prop(Obj::Grate, 0);
    world.set_prop(Obj::Fissure, 0);
    for hostile in &mut world.hostiles {
        hostile.seen = false;
        hostile.room = 0;
    }

    world.move_to(Obj::Troll, Place::Nowhere);
    world.set_fixture(Obj::Troll, Fixture::Loose);
    world.move_to(Obj::Troll2, Place::Room(ROOM_CHASM_SW));
    world.set_fixture(Obj::Troll2, Fixture::Room(ROOM_CHASM_NE));

    if world.prop(Obj::Bear) != 3 {
        world.destroy(Obj::Bear);
    }
    for obj in [Obj::Chain, Obj::Axe] {
        world.set_prop(obj, 0);
        world.set_fixture(obj, Fixture::Loose);
    }

    turn.speak(129);
    let world = &mut *turn.world;
    world.clock = -1;
    world.closing = ClosingPhase::Closing;
    info!(turns = world.turns, "cave closing");
}

/// Second clock ran out: everyone wakes up in the repository
fn close_cave(turn: &mut Turn<'_>) {
    const NE_END: [(Obj, i8); 6] = [
        (Obj::Bottle, 1),
        (Obj::Plant, 0),
        (Obj::Oyster, 0),
        (Obj::Lamp, 0),
        (Obj::Rod, 0),
        (Obj::Dwarf, 0),
    ];
    const SW_END: [(Obj, i8); 5] = [
        (Obj::Snake, 1),
        (Obj::Bird, 1),
        (Obj::Cage, 0),
        (Obj::Rod2, 0),
        (Obj::Pillow, 0),
    ];

    let world = &mut *turn.world;
    for (obj, value) in NE_END {
        let state = world.put(obj, ROOM_REPOSITORY_NE, value);
        world.set_prop(obj, state);
    }

    world.location = ROOM_REPOSITORY_NE;
    world.prior_location = ROOM_REPOSITORY_NE;
    world.pending_location = ROOM_REPOSITORY_NE;

    world.put(Obj::Grate, ROOM_REPOSITORY_SW, 0);
    for (obj, value) in SW_END {
        let state = world.put(obj, ROOM_REPOSITORY_SW, value);
        world.set_prop(obj, state);
    }
    let state = world.put(Obj::Mirror, ROOM_REPOSITORY_NE, 0);
    world.set_prop(Obj::Mirror, state);
    world.set_fixture(Obj::Mirror, Fixture::Room(ROOM_REPOSITORY_SW));

    let carried: Vec<Obj> = world.carried().collect();
    for obj in carried {
        world.destroy(obj);
    }

    turn.speak(132);
    turn.world.closing = ClosingPhase::Closed;
    info!(turns = turn.world.turns, "cave closed");
    movement::describe(turn);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameloop::{Turn, advance};
    use crate::test_cave::{TestCave, playing_state};
    use crate::world::DialogueState;

    #[test]
    fn test_lamp_burns_only_when_on() {
        let cave = TestCave::new();
        let mut world = playing_state(1);
        advance(&mut world, &cave, "west");
        assert_eq!(world.lamp_fuel, 330);
        world.set_prop(Obj::Lamp, 1);
        advance(&mut world, &cave, "west");
        assert_eq!(world.lamp_fuel, 329);
    }

    #[test]
    fn test_low_fuel_warning_once() {
        let cave = TestCave::new();
        let mut world = playing_state(1);
        world.location = 3;
        world.pending_location = 3;
        world.set_prop(Obj::Lamp, 1);
        world.lamp_fuel = 32;
        let out = advance(&mut world, &cave, "west");
        assert!(!out.contains(&"msg 183".to_string()));
        let out = advance(&mut world, &cave, "west");
        assert_eq!(world.lamp_fuel, 30);
        assert!(out.contains(&"msg 183".to_string()));
        let out = advance(&mut world, &cave, "west");
        assert!(!out.contains(&"msg 183".to_string()));
        assert!(world.lamp_warned);
    }

    #[test]
    fn test_lamp_goes_out() {
        let cave = TestCave::new();
        let mut world = playing_state(1);
        world.carry(Obj::Lamp);
        world.set_prop(Obj::Lamp, 1);
        world.lamp_fuel = 1;
        let out = advance(&mut world, &cave, "west");
        assert_eq!(world.lamp_fuel, -1);
        assert_eq!(world.prop(Obj::Lamp), 0);
        assert!(out.contains(&"msg 184".to_string()));

        let out = advance(&mut world, &cave, "west");
        assert!(out.contains(&"msg 185".to_string()));
        assert!(world.gave_up);
        assert!(world.is_done());
    }

    #[test]
    fn test_fresh_batteries() {
        let cave = TestCave::new();
        let mut world = playing_state(1);
        world.carry(Obj::Lamp);
        world.carry(Obj::Batteries);
        world.set_prop(Obj::Lamp, 1);
        world.lamp_fuel = 20;
        let out = advance(&mut world, &cave, "west");
        assert!(out.contains(&"msg 188".to_string()));
        assert_eq!(world.lamp_fuel, 19 + BATTERY_FUEL);
        assert_eq!(world.prop(Obj::Batteries), 1);
        assert_eq!(world.place(Obj::Batteries), Place::Room(1));
        assert!(!world.lamp_warned);
    }

    #[test]
    fn test_closing_starts_when_clock_runs_out() {
        let cave = TestCave::new();
        let mut world = playing_state(1);
        world.tally = 0;
        world.clock = 1;
        world.location = 20;
        world.hostile_stage = 2;
        let mut turn = Turn::new(&mut world, &cave);
        turn.world.pending_location = 20;
        run_timers(&mut turn);
        assert_eq!(turn.out, ["msg 129", ""]);
        assert!(!turn.repeat);
        assert_eq!(world.closing, ClosingPhase::Closing);
        assert_eq!(world.clock, -1);
        assert!(world.hostiles.iter().all(|h| h.room == 0 && !h.seen));
        assert_eq!(world.place(Obj::Bear), Place::Nowhere);
        assert_eq!(world.place(Obj::Troll2), Place::Room(ROOM_CHASM_SW));
        assert_eq!(world.place(Obj::Troll), Place::Nowhere);
        assert!(world.fixture(Obj::Chain).is_loose());
    }

    #[test]
    fn test_leaving_while_closing_panics() {
        let cave = TestCave::new();
        let mut world = playing_state(1);
        world.location = 9;
        world.pending_location = 9;
        world.set_prop(Obj::Grate, 1);
        world.closing = ClosingPhase::Closing;
        world.clock = -1;
        world.clock2 = 40;
        let out = advance(&mut world, &cave, "up");
        assert_eq!(out[0], "msg 130");
        assert_eq!(world.location, 9);
        assert_eq!(world.closing, ClosingPhase::Panic);
        assert_eq!(world.clock2, PANIC_CLOCK - 1);

        advance(&mut world, &cave, "up");
        assert_eq!(world.clock2, PANIC_CLOCK - 2);
    }

    #[test]
    fn test_cave_closes() {
        let cave = TestCave::new();
        let mut world = playing_state(1);
        world.location = ROOM_MISTS;
        world.pending_location = ROOM_MISTS;
        world.closing = ClosingPhase::Closing;
        world.clock = -1;
        world.clock2 = 1;
        world.carry(Obj::Keys);
        world.carry(Obj::Nugget);
        let out = advance(&mut world, &cave, "inventory");
        assert!(out.contains(&"msg 132".to_string()));
        assert!(out.contains(&"room 115 long".to_string()));
        assert_eq!(world.closing, ClosingPhase::Closed);
        assert_eq!(world.location, ROOM_REPOSITORY_NE);
        assert_eq!(world.held, 0);
        assert_eq!(world.place(Obj::Keys), Place::Nowhere);
        assert_eq!(world.place(Obj::Rod2), Place::Room(ROOM_REPOSITORY_SW));
        assert_eq!(world.place(Obj::Bottle), Place::Room(ROOM_REPOSITORY_NE));
        assert_eq!(world.fixture(Obj::Mirror), Fixture::Room(ROOM_REPOSITORY_SW));
        assert_eq!(world.dialogue, DialogueState::Playing);
    }

    #[test]
    fn test_knife_vanishes_when_player_leaves() {
        let cave = TestCave::new();
        let mut world = playing_state(1);
        world.knife = Knife::Lying(2);
        advance(&mut world, &cave, "west");
        assert_eq!(world.knife, Knife::Absent);
    }
}
