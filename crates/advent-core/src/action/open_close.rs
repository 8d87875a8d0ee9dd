//! Opening and locking: the grate, the chain, the clam and friends

use crate::action::{ActionResult, Candidates, Verb, need_object};
use crate::consts::*;
use crate::gameloop::Turn;
use crate::object::{Fixture, Obj, Place};
use crate::world::ClosingPhase;

/// Room the pearl rolls to when the clam opens
const PEARL_ROOM: RoomId = 105;

/// `open`/`lock` with no object: pick the only lockable thing here
pub fn open_here(turn: &mut Turn<'_>) -> ActionResult {
    let world = &*turn.world;
    let mut target = None;
    for (obj, seen) in [
        (Obj::Clam, world.here(Obj::Clam)),
        (Obj::Oyster, world.here(Obj::Oyster)),
        (Obj::Door, world.at(Obj::Door)),
        (Obj::Grate, world.at(Obj::Grate)),
    ] {
        if seen {
            target = Some(obj);
        }
    }

    // the chain competes with everything else
    let mut candidates = target.map_or(Candidates::None, Candidates::Exactly);
    if world.here(Obj::Chain) {
        candidates = candidates.add(Obj::Chain);
    }

    match candidates {
        Candidates::None => turn.speak(28),
        Candidates::Ambiguous => need_object(turn),
        Candidates::Exactly(obj) => {
            turn.cmd.object = Some(obj);
            return open(turn);
        }
    }
    Ok(())
}

/// Open or lock the current object
pub fn open(turn: &mut Turn<'_>) -> ActionResult {
    let Some(obj) = turn.cmd.object else {
        return open_here(turn);
    };
    let locking = turn.cmd.verb == Some(Verb::Lock);

    let id = match obj {
        Obj::Clam | Obj::Oyster => shell(turn, obj, locking),
        Obj::Door => {
            if turn.world.prop(Obj::Door) == 1 {
                54
            } else {
                111
            }
        }
        Obj::Cage => 32,
        Obj::Keys => 55,
        Obj::Chain => chain(turn, locking),
        Obj::Grate => grate(turn, locking),
        _ => 33,
    };
    turn.speak(id);
    Ok(())
}

fn shell(turn: &mut Turn<'_>, obj: Obj, locking: bool) -> u16 {
    let world = &mut *turn.world;
    let oyster = u16::from(obj == Obj::Oyster);
    if locking {
        61
    } else if !world.toting(Obj::Trident) {
        122 + oyster
    } else if world.toting(obj) {
        120 + oyster
    } else {
        // the oyster opens the same way, and the pearl rolls off again
        let loc = world.location;
        world.destroy(Obj::Clam);
        world.drop(Obj::Oyster, Place::Room(loc));
        world.drop(Obj::Pearl, Place::Room(PEARL_ROOM));
        124 + oyster
    }
}

fn chain(turn: &mut Turn<'_>, locking: bool) -> u16 {
    let world = &mut *turn.world;
    if !world.here(Obj::Keys) {
        return 31;
    }
    if locking {
        if world.prop(Obj::Chain) != 0 {
            return 34;
        }
        if world.location != ROOM_BARREN {
            return 173;
        }
        world.set_prop(Obj::Chain, 2);
        if world.toting(Obj::Chain) {
            world.drop(Obj::Chain, Place::Room(ROOM_BARREN));
        }
        world.set_fixture(Obj::Chain, Fixture::Pinned);
        return 172;
    }

    if world.prop(Obj::Bear) == 0 {
        return 41;
    }
    if world.prop(Obj::Chain) == 0 {
        return 37;
    }
    world.set_prop(Obj::Chain, 0);
    world.set_fixture(Obj::Chain, Fixture::Loose);
    if world.prop(Obj::Bear) != 3 {
        world.set_prop(Obj::Bear, 2);
    }
    // a dead bear stays where it fell
    let bear = if world.prop(Obj::Bear) == 3 {
        Fixture::Pinned
    } else {
        Fixture::Loose
    };
    world.set_fixture(Obj::Bear, bear);
    171
}

fn grate(turn: &mut Turn<'_>, locking: bool) -> u16 {
    let world = &mut *turn.world;
    if !world.here(Obj::Keys) {
        return 31;
    }
    if world.closing.is_closing() {
        if world.closing == ClosingPhase::Closing {
            world.clock2 = PANIC_CLOCK;
            world.closing = ClosingPhase::Panic;
        }
        return 130;
    }
    let was = world.prop(Obj::Grate) as u16;
    let now = u16::from(!locking);
    world.set_prop(Obj::Grate, now as i8);
    34 + was + 2 * now
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameloop::advance;
    use crate::test_cave::{TestCave, playing_state};
    use crate::world::WorldState;

    fn in_room(room: RoomId) -> WorldState {
        let mut world = playing_state(1);
        world.location = room;
        world.pending_location = room;
        world
    }

    #[test]
    fn test_grate_needs_keys() {
        let cave = TestCave::new();
        let mut world = in_room(ROOM_OUTSIDE_GRATE);
        let out = advance(&mut world, &cave, "open grate");
        assert_eq!(out, ["msg 31", ""]);
        assert_eq!(world.prop(Obj::Grate), 0);
    }

    #[test]
    fn test_grate_lock_cycle() {
        let cave = TestCave::new();
        let mut world = in_room(ROOM_OUTSIDE_GRATE);
        world.carry(Obj::Keys);
        assert_eq!(advance(&mut world, &cave, "unlock grate"), ["msg 36", ""]);
        assert_eq!(world.prop(Obj::Grate), 1);
        assert_eq!(advance(&mut world, &cave, "open grate"), ["msg 37", ""]);
        assert_eq!(advance(&mut world, &cave, "lock grate"), ["msg 35", ""]);
        assert_eq!(world.prop(Obj::Grate), 0);
        assert_eq!(advance(&mut world, &cave, "lock grate"), ["msg 34", ""]);
    }

    #[test]
    fn test_grate_from_below_without_object() {
        let cave = TestCave::new();
        let mut world = in_room(ROOM_BELOW_GRATE);
        world.carry(Obj::Keys);
        assert_eq!(advance(&mut world, &cave, "open"), ["msg 36", ""]);
        assert_eq!(world.prop(Obj::Grate), 1);
    }

    #[test]
    fn test_grate_during_closing_panics() {
        let cave = TestCave::new();
        let mut world = in_room(ROOM_OUTSIDE_GRATE);
        world.carry(Obj::Keys);
        world.closing = ClosingPhase::Closing;
        world.clock = -1;
        world.clock2 = 30;
        let out = advance(&mut world, &cave, "open grate");
        assert_eq!(out[..2], ["msg 130", ""]);
        assert_eq!(world.closing, ClosingPhase::Panic);
        assert_eq!(world.clock2, PANIC_CLOCK - 1);
        assert_eq!(world.prop(Obj::Grate), 0);
    }

    #[test]
    fn test_nothing_to_open() {
        let cave = TestCave::new();
        let mut world = in_room(2);
        assert_eq!(advance(&mut world, &cave, "open"), ["msg 28", ""]);
    }

    #[test]
    fn test_clam_needs_trident() {
        let cave = TestCave::new();
        let mut world = in_room(103);
        let out = advance(&mut world, &cave, "open clam");
        assert_eq!(out, ["msg 122", ""]);

        world.carry(Obj::Trident);
        let out = advance(&mut world, &cave, "open clam");
        assert_eq!(out, ["msg 124", ""]);
        assert_eq!(world.place(Obj::Clam), Place::Nowhere);
        assert_eq!(world.place(Obj::Oyster), Place::Room(103));
        assert_eq!(world.place(Obj::Pearl), Place::Room(PEARL_ROOM));

        let out = advance(&mut world, &cave, "open oyster");
        assert_eq!(out, ["msg 125", ""]);
        assert_eq!(world.place(Obj::Pearl), Place::Room(PEARL_ROOM));
    }

    #[test]
    fn test_oyster_sends_pearl_back() {
        let cave = TestCave::new();
        let mut world = in_room(103);
        world.destroy(Obj::Clam);
        world.drop(Obj::Oyster, Place::Room(103));
        world.carry(Obj::Trident);
        world.carry(Obj::Pearl);
        assert_eq!(world.held, 2);

        let out = advance(&mut world, &cave, "open oyster");
        assert_eq!(out, ["msg 125", ""]);
        assert_eq!(world.place(Obj::Pearl), Place::Room(PEARL_ROOM));
        assert_eq!(world.place(Obj::Oyster), Place::Room(103));
        assert_eq!(world.place(Obj::Clam), Place::Nowhere);
        assert_eq!(world.held, 1);
    }

    #[test]
    fn test_clam_in_hand() {
        let cave = TestCave::new();
        let mut world = in_room(103);
        world.carry(Obj::Trident);
        world.carry(Obj::Clam);
        assert_eq!(advance(&mut world, &cave, "open clam"), ["msg 120", ""]);
        assert_eq!(advance(&mut world, &cave, "lock clam"), ["msg 61", ""]);
    }

    #[test]
    fn test_unchain_bear() {
        let cave = TestCave::new();
        let mut world = in_room(ROOM_BARREN);
        world.carry(Obj::Keys);
        world.set_prop(Obj::Chain, 1);
        let out = advance(&mut world, &cave, "unlock chain");
        assert_eq!(out, ["msg 41", ""]);

        world.set_prop(Obj::Bear, 1);
        let out = advance(&mut world, &cave, "unlock chain");
        assert_eq!(out, ["msg 171", ""]);
        assert_eq!(world.prop(Obj::Chain), 0);
        assert_eq!(world.prop(Obj::Bear), 2);
        assert!(world.fixture(Obj::Chain).is_loose());
        assert!(world.fixture(Obj::Bear).is_loose());

        let out = advance(&mut world, &cave, "unlock chain");
        assert_eq!(out, ["msg 37", ""]);
    }

    #[test]
    fn test_lock_chain_only_in_barren_room() {
        let cave = TestCave::new();
        let mut world = in_room(ROOM_BUILDING);
        world.carry(Obj::Keys);
        world.carry(Obj::Chain);
        world.set_prop(Obj::Chain, 0);
        assert_eq!(advance(&mut world, &cave, "lock chain"), ["msg 173", ""]);

        world.location = ROOM_BARREN;
        world.pending_location = ROOM_BARREN;
        assert_eq!(advance(&mut world, &cave, "lock chain"), ["msg 172", ""]);
        assert_eq!(world.prop(Obj::Chain), 2);
        assert_eq!(world.place(Obj::Chain), Place::Room(ROOM_BARREN));
        assert_eq!(world.fixture(Obj::Chain), Fixture::Pinned);
    }

    #[test]
    fn test_other_objects() {
        let cave = TestCave::new();
        let mut world = in_room(ROOM_BUILDING);
        assert_eq!(advance(&mut world, &cave, "open keys"), ["msg 55", ""]);
        assert_eq!(advance(&mut world, &cave, "open lamp"), ["msg 33", ""]);
    }
}
