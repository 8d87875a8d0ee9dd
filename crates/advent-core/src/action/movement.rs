//! Travel through the cave
//!
//! A motion looks up the current room's travel entries. The first entry
//! whose verb matches and whose condition holds decides the move; once a
//! verb has matched, later entries are tried in order regardless of verb.
//! The destination is only applied later in the tick, by [`resolve`].

use strum::IntoEnumIterator;
use tracing::debug;

use crate::action::{ActionResult, Verb};
use crate::consts::*;
use crate::data::{Condition, Destination, Motion, TravelEntry};
use crate::error::EngineError;
use crate::gameloop::Turn;
use crate::object::{Fixture, Obj, Place};
use crate::player::death;

/// Message for a room that is too dark to see
const TOO_DARK: u16 = 16;
/// "You fell into a pit and broke every bone in your body!"
const FELL_IN_PIT: u16 = 23;

/// Act on a motion word
pub fn do_move(turn: &mut Turn<'_>, motion: Motion) -> ActionResult {
    let world = &mut *turn.world;
    match motion {
        Motion::NULL => Ok(()),
        Motion::BACK => go_back(turn),
        Motion::LOOK => {
            if world.detail < 3 {
                turn.speak(15);
            }
            let world = &mut *turn.world;
            world.detail = world.detail.saturating_add(1);
            world.was_dark = false;
            world.visits[usize::from(world.location)] = 0;
            world.pending_location = world.location;
            world.redescribe = true;
            Ok(())
        }
        Motion::CAVE => {
            let id = if world.location < ROOM_OUTSIDE_GRATE { 57 } else { 58 };
            turn.speak(id);
            Ok(())
        }
        _ => {
            world.prior_location2 = world.prior_location;
            world.prior_location = world.location;
            travel(turn, motion)
        }
    }
}

/// Pick a travel entry for `motion` and act on it
fn travel(turn: &mut Turn<'_>, motion: Motion) -> ActionResult {
    let loc = turn.world.location;
    turn.world.pending_location = loc;
    let roll = turn.world.rng.rn2(100);

    let content = turn.content;
    let mut hit = false;
    let mut chosen: Option<&TravelEntry> = None;

    for entry in content.travel(loc) {
        if !hit && !entry.matches(motion) {
            continue;
        }
        hit = true;
        if !condition_holds(turn, entry, roll)? {
            continue;
        }
        if entry.destination(loc)? == Destination::Special(2) {
            // the emerald will not fit through the plover passage
            turn.world.drop(Obj::Emerald, Place::from(loc));
            continue;
        }
        chosen = Some(entry);
        break;
    }

    let Some(entry) = chosen else {
        bad_move(turn, motion);
        return Ok(());
    };

    match entry.destination(loc)? {
        Destination::Room(room) => turn.world.pending_location = room,
        Destination::Message(id) => turn.speak(id),
        Destination::Special(code) => special_move(turn, code)?,
    }
    Ok(())
}

fn condition_holds(turn: &Turn<'_>, entry: &TravelEntry, roll: u32) -> Result<bool, EngineError> {
    let world = &*turn.world;
    Ok(match entry.decode_condition(world.location)? {
        Condition::Always => true,
        Condition::Chance(p) => roll < u32::from(p),
        Condition::Carrying(obj) => world.toting(obj),
        Condition::Present(obj) => world.toting(obj) || world.at(obj),
        Condition::StateNot(obj, value) => world.prop(obj) != value,
    })
}

/// Explain why the player cannot go that way
fn bad_move(turn: &mut Turn<'_>, motion: Motion) {
    let mut id = 12;
    if motion.is_compass() || motion == Motion::UP || motion == Motion::DOWN {
        id = 9;
    }
    if matches!(motion, Motion::FORWARD | Motion::LEFT | Motion::RIGHT) {
        id = 10;
    }
    if motion == Motion::OUT || motion == Motion::IN {
        id = 11;
    }
    if matches!(turn.cmd.verb, Some(Verb::Find | Verb::Inventory)) {
        id = 59;
    }
    if motion == Motion::XYZZY || motion == Motion::PLUGH {
        id = 42;
    }
    if motion == Motion::CRAWL {
        id = 80;
    }
    turn.speak(id);
}

/// Scripted moves
fn special_move(turn: &mut Turn<'_>, code: u16) -> ActionResult {
    let loc = turn.world.location;
    debug!(code, location = loc, "special move");
    match code {
        1 => {
            // plover passage squeeze
            let world = &mut *turn.world;
            if world.held == 0 || (world.held == 1 && world.toting(Obj::Emerald)) {
                world.pending_location = 199u8.saturating_sub(loc);
            } else {
                turn.speak(117);
            }
        }
        2 => turn.world.drop(Obj::Emerald, Place::from(loc)),
        3 => troll_bridge(turn),
        _ => return Err(EngineError::SpecialMove { room: loc, code }),
    }
    Ok(())
}

fn troll_bridge(turn: &mut Turn<'_>) {
    let loc = turn.world.location;
    if turn.world.prop(Obj::Troll) == 1 {
        // paid troll comes back to block the bridge
        turn.speak_item(Obj::Troll, 1);
        let world = &mut *turn.world;
        world.set_prop(Obj::Troll, 0);
        world.move_to(Obj::Troll2, Place::Nowhere);
        world.set_fixture(Obj::Troll2, Fixture::Loose);
        world.move_to(Obj::Troll, Place::Room(ROOM_CHASM_SW));
        world.set_fixture(Obj::Troll, Fixture::Room(ROOM_CHASM_NE));
        world.pending_location = loc;
        return;
    }

    let world = &mut *turn.world;
    let far_side = if loc == ROOM_CHASM_SW {
        ROOM_CHASM_NE
    } else {
        ROOM_CHASM_SW
    };
    world.pending_location = far_side;
    if world.prop(Obj::Troll) == 0 {
        world.set_prop(Obj::Troll, 1);
    }
    if !world.toting(Obj::Bear) {
        return;
    }

    turn.speak(162);
    let world = &mut *turn.world;
    world.set_prop(Obj::Chasm, 1);
    world.set_prop(Obj::Troll, 2);
    world.drop(Obj::Bear, Place::Room(far_side));
    world.set_fixture(Obj::Bear, Fixture::Pinned);
    world.set_prop(Obj::Bear, 3);
    if world.prop(Obj::Spices) < 0 {
        world.lost_treasures += 1;
    }
    world.prior_location2 = far_side;
    death::death(turn);
}

/// Retrace the last step
fn go_back(turn: &mut Turn<'_>) -> ActionResult {
    let world = &mut *turn.world;
    let want = if world.is_forced(world.prior_location) {
        world.prior_location2
    } else {
        world.prior_location
    };
    world.prior_location2 = world.prior_location;
    world.prior_location = world.location;

    let loc = world.location;
    if want == loc {
        turn.speak(91);
        return Ok(());
    }

    let content = turn.content;
    let entries = content.travel(loc);
    let leads_to = |entry: &TravelEntry, room: RoomId| entry.dest == u16::from(room);

    let direct = entries
        .iter()
        .find(|e| e.is_unconditional() && leads_to(e, want));
    let via_forced = || {
        entries.iter().rfind(|e| {
            e.is_unconditional()
                && e.dest <= u16::from(MAX_ROOM)
                && turn.world.is_forced(e.dest as RoomId)
                && content
                    .travel(e.dest as RoomId)
                    .first()
                    .is_some_and(|next| leads_to(next, want))
        })
    };

    match direct.or_else(via_forced) {
        Some(entry) => {
            let motion = entry.verb;
            turn.cmd.motion = Some(motion);
            travel(turn, motion)
        }
        None => {
            turn.speak(140);
            Ok(())
        }
    }
}

/// Apply the pending destination and describe where the player ended up
pub(crate) fn resolve(turn: &mut Turn<'_>) -> ActionResult {
    let world = &mut *turn.world;
    if world.location == world.pending_location && !world.redescribe {
        return Ok(());
    }
    world.redescribe = false;
    world.turns += 1;
    world.location = world.pending_location;
    let loc = world.location;

    if loc == 0 {
        death::death(turn);
        return Ok(());
    }

    if world.is_forced(loc) {
        describe(turn);
        turn.world.prior_location2 = turn.world.prior_location;
        turn.world.prior_location = loc;
        travel(turn, Motion::ALWAYS)?;
        turn.repeat = true;
        return Ok(());
    }

    if world.was_dark && world.is_dark() && world.rng.percent(35) {
        turn.speak(FELL_IN_PIT);
        turn.world.prior_location2 = loc;
        death::death(turn);
        return Ok(());
    }

    describe(turn);
    Ok(())
}

/// Describe the current room and what can be seen in it
pub(crate) fn describe(turn: &mut Turn<'_>) {
    let loc = turn.world.location;
    if turn.world.toting(Obj::Bear) {
        turn.speak(141);
    }

    let forced = turn.world.is_forced(loc);
    let dark = turn.world.is_dark() && !forced;
    if dark {
        turn.speak(TOO_DARK);
    } else {
        let visited = turn.world.visits[usize::from(loc)] > 0;
        let content = turn.content;
        let lines = content.room_description(loc, visited);
        if !lines.is_empty() {
            turn.out.extend(lines.iter().map(|l| (*l).to_string()));
            turn.say("");
        }
    }

    let world = &mut *turn.world;
    if loc == ROOM_Y2 {
        let hint = world.rng.percent(25) || world.force_plugh_hint;
        if hint && !world.closing.is_closing() {
            world.force_plugh_hint = false;
            turn.speak(8);
        }
    }

    if dark || forced {
        return;
    }

    let world = &mut *turn.world;
    let visits = &mut world.visits[usize::from(loc)];
    *visits = visits.saturating_add(1);

    for obj in Obj::iter() {
        let world = &mut *turn.world;
        if !world.at(obj) {
            continue;
        }
        if obj == Obj::Steps && world.toting(Obj::Nugget) {
            continue;
        }
        if world.prop(obj) < 0 {
            if world.closing.is_closed() {
                continue;
            }
            let seen = if matches!(obj, Obj::Rug | Obj::Chain) { 1 } else { 0 };
            world.set_prop(obj, seen);
            world.tally = world.tally.saturating_sub(1);
        }
        let state = if obj == Obj::Steps && world.fixture(Obj::Steps) == Fixture::Room(loc) {
            1
        } else {
            world.prop(obj)
        };
        turn.speak_item(obj, state);
    }

    let world = &mut *turn.world;
    if world.tally == world.lost_treasures && world.tally != 0 && world.lamp_fuel > 35 {
        world.lamp_fuel = 35;
    }

    if in_twisty_maze(loc) {
        if let Some(line) = maze_exits(turn.content.travel(loc)) {
            turn.say(line);
            turn.say("");
        }
    }
}

/// "There are paths both up and down, and to the north and east."
fn maze_exits(entries: &[TravelEntry]) -> Option<String> {
    const LEVELS: [(Motion, &str); 2] = [(Motion::UP, "up"), (Motion::DOWN, "down")];
    const COMPASS: [Motion; 8] = [
        Motion::NORTH,
        Motion::SOUTH,
        Motion::EAST,
        Motion::WEST,
        Motion::NORTHEAST,
        Motion::SOUTHEAST,
        Motion::NORTHWEST,
        Motion::SOUTHWEST,
    ];

    let has = |m: Motion| entries.iter().any(|e| e.verb == m);
    let levels: Vec<&str> = LEVELS
        .iter()
        .filter(|(m, _)| has(*m))
        .map(|(_, name)| *name)
        .collect();
    let mut compass: Vec<String> = COMPASS
        .iter()
        .filter(|m| has(**m))
        .filter_map(|m| m.compass_name())
        .map(str::to_string)
        .collect();

    let total = levels.len() + compass.len();
    if total == 0 {
        return None;
    }

    let mut line = String::from(if total == 1 {
        "There is a path"
    } else {
        "There are paths"
    });
    match levels.as_slice() {
        [one] => {
            line.push(' ');
            line.push_str(one);
        }
        [a, b] => line.push_str(&format!(" both {a} and {b}")),
        _ => {}
    }

    if !compass.is_empty() {
        if !levels.is_empty() {
            line.push_str(", and");
        }
        line.push_str(" to the ");
        if compass.len() > 1 {
            if let Some(last) = compass.last_mut() {
                *last = format!("and {last}");
            }
        }
        line.push_str(&compass.join(", "));
    }
    line.push('.');
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameloop::advance;
    use crate::test_cave::{TestCave, playing_state};
    use crate::world::DialogueState;

    fn entry(verb: Motion, dest: u16) -> TravelEntry {
        TravelEntry {
            condition: 0,
            verb,
            dest,
        }
    }

    #[test]
    fn test_maze_exit_lines() {
        let one = [entry(Motion::UP, 5)];
        assert_eq!(maze_exits(&one).unwrap(), "There is a path up.");

        let both = [entry(Motion::DOWN, 5), entry(Motion::UP, 6)];
        assert_eq!(
            maze_exits(&both).unwrap(),
            "There are paths both up and down."
        );

        let mixed = [
            entry(Motion::WEST, 5),
            entry(Motion::UP, 6),
            entry(Motion::NORTH, 7),
        ];
        assert_eq!(
            maze_exits(&mixed).unwrap(),
            "There are paths up, and to the north, and west."
        );

        let compass = [entry(Motion::SOUTH, 5)];
        assert_eq!(
            maze_exits(&compass).unwrap(),
            "There is a path to the south."
        );
        assert_eq!(maze_exits(&[entry(Motion::IN, 3)]), None);
    }

    #[test]
    fn test_plain_move_and_describe() {
        let cave = TestCave::new();
        let mut world = playing_state(1);
        let out = advance(&mut world, &cave, "south");
        assert_eq!(world.location, 2);
        assert_eq!(world.prior_location, 1);
        assert_eq!(out[0], "room 2 long");
        assert_eq!(world.turns, 1);

        advance(&mut world, &cave, "north");
        let out = advance(&mut world, &cave, "south");
        assert_eq!(out[0], "room 2 short");
    }

    #[test]
    fn test_blocked_motion_messages() {
        let cave = TestCave::new();
        let mut world = playing_state(1);
        let out = advance(&mut world, &cave, "west");
        assert_eq!(out[0], "msg 9");
        assert_eq!(world.location, 1);
        let out = advance(&mut world, &cave, "xyzzy");
        assert_eq!(out[0], "msg 42");
        let out = advance(&mut world, &cave, "out");
        assert_eq!(out[0], "msg 11");
        let out = advance(&mut world, &cave, "find north");
        assert_eq!(out[0], "msg 59");
    }

    #[test]
    fn test_message_destination() {
        let cave = TestCave::new();
        let mut world = playing_state(1);
        let out = advance(&mut world, &cave, "east");
        assert_eq!(out[0], "msg 93");
        assert_eq!(world.location, 1);
    }

    #[test]
    fn test_conditional_entry_falls_through() {
        let cave = TestCave::new();
        let mut world = playing_state(1);
        // the grate at 8 is locked, so "down" reaches the message entry
        world.location = 8;
        world.pending_location = 8;
        let out = advance(&mut world, &cave, "down");
        assert_eq!(out[0], "msg 63");
        assert_eq!(world.location, 8);

        world.set_prop(Obj::Grate, 1);
        advance(&mut world, &cave, "down");
        assert_eq!(world.location, 9);
    }

    #[test]
    fn test_look_redescribes() {
        let cave = TestCave::new();
        let mut world = playing_state(1);
        world.visits[1] = 1;
        let out = advance(&mut world, &cave, "look");
        assert_eq!(out[..3], ["msg 15", "", "room 1 long"]);
        assert_eq!(world.detail, 1);
        assert_eq!(world.turns, 1);

        world.detail = 3;
        let out = advance(&mut world, &cave, "look");
        assert_eq!(out[0], "room 1 long");
    }

    #[test]
    fn test_back_retraces() {
        let cave = TestCave::new();
        let mut world = playing_state(1);
        advance(&mut world, &cave, "south");
        advance(&mut world, &cave, "back");
        assert_eq!(world.location, 1);

        let out = advance(&mut world, &cave, "back");
        assert_eq!(world.location, 2);
        assert!(out[0].starts_with("room 2"));
    }

    #[test]
    fn test_back_to_same_room() {
        let cave = TestCave::new();
        let mut world = playing_state(1);
        let out = advance(&mut world, &cave, "back");
        assert_eq!(out[0], "msg 91");
    }

    #[test]
    fn test_forced_room_chains() {
        let cave = TestCave::new();
        let mut world = playing_state(1);
        world.location = 2;
        world.pending_location = 2;
        let out = advance(&mut world, &cave, "slide");
        assert!(out.contains(&"room 16 long".to_string()));
        assert_eq!(world.location, 3);
        assert!(out.contains(&"room 3 long".to_string()));
    }

    #[test]
    fn test_dark_room_hides_objects() {
        let cave = TestCave::new();
        let mut world = playing_state(1);
        world.location = 9;
        world.pending_location = 9;
        world.set_prop(Obj::Grate, 1);
        let out = advance(&mut world, &cave, "down");
        assert_eq!(world.location, 11);
        assert_eq!(out[0], "msg 16");
        assert_eq!(world.visits[11], 0);
        assert_eq!(world.prop(Obj::Rod), 0);
    }

    #[test]
    fn test_treasure_seen_lowers_tally() {
        let cave = TestCave::new();
        let mut world = playing_state(1);
        world.drop(Obj::Nugget, Place::Room(2));
        let out = advance(&mut world, &cave, "south");
        assert_eq!(world.prop(Obj::Nugget), 0);
        assert_eq!(world.tally, 14);
        assert!(out.contains(&"Nugget 0".to_string()));
    }

    #[test]
    fn test_pit_death_in_darkness() {
        let cave = TestCave::new();
        let mut died = false;
        for seed in 0..40 {
            let mut world = playing_state(seed);
            world.location = 11;
            world.pending_location = 11;
            world.was_dark = true;
            let out = advance(&mut world, &cave, "west");
            if world.dialogue == DialogueState::DeathQuery {
                assert_eq!(out[0], "msg 23");
                died = true;
            }
        }
        assert!(died);
    }

    #[test]
    fn test_plover_squeeze() {
        let cave = TestCave::new();
        let mut world = playing_state(1);
        world.location = 99;
        world.pending_location = 99;
        world.carry(Obj::Emerald);
        advance(&mut world, &cave, "plover");
        assert_eq!(world.location, 100);

        world.carry(Obj::Keys);
        world.location = 99;
        world.pending_location = 99;
        let out = advance(&mut world, &cave, "plover");
        assert_eq!(out[0], "msg 117");
        assert_eq!(world.location, 99);
    }

    #[test]
    fn test_troll_bridge_and_bear() {
        let cave = TestCave::new();
        let mut world = playing_state(1);
        world.location = ROOM_CHASM_SW;
        world.pending_location = ROOM_CHASM_SW;
        world.move_to(Obj::Troll, Place::Nowhere);
        world.set_fixture(Obj::Troll, Fixture::Loose);
        world.carry(Obj::Bear);
        let out = advance(&mut world, &cave, "cross");
        assert!(out.contains(&"msg 162".to_string()));
        assert_eq!(world.prop(Obj::Bear), 3);
        assert_eq!(world.place(Obj::Bear), Place::Room(ROOM_CHASM_NE));
        assert_eq!(world.prop(Obj::Chasm), 1);
        assert_eq!(world.dialogue, DialogueState::DeathQuery);
    }

    #[test]
    fn test_bad_special_is_fatal() {
        let cave = TestCave::new();
        let mut world = playing_state(1);
        world.location = 2;
        world.pending_location = 2;
        let out = advance(&mut world, &cave, "jump");
        assert!(out.last().unwrap().starts_with("Fatal error. (Bug #38)"));
        assert!(world.is_done());
    }

    #[test]
    fn test_bad_condition_is_fatal() {
        let cave = TestCave::new();
        let mut world = playing_state(1);
        world.location = 2;
        world.pending_location = 2;
        let out = advance(&mut world, &cave, "up");
        assert!(out.last().unwrap().starts_with("Fatal error. (Bug #37)"));
        assert!(world.is_done());
    }
}
