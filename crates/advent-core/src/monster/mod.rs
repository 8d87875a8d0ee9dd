//! Dwarves and the pirate
//!
//! The six hostiles wake once the player first goes deep. After first
//! contact they wander at random each tick, follow the player once they have
//! seen them, and the dwarves throw knives. The sixth hostile is the pirate,
//! whose turn is in [`pirate`].

pub mod pirate;

use tracing::debug;

use crate::consts::*;
use crate::gameloop::Turn;
use crate::object::{Obj, Place};
use crate::player::death;
use crate::world::{Knife, RoomFlags, WorldState};

/// Attempts a hostile makes to find a new room before staying put
const WANDER_TRIES: u32 = 19;

fn off_limits(world: &WorldState, room: RoomId) -> bool {
    room == 0
        || world.is_forced(room)
        || world.flags(room).contains(RoomFlags::NO_PIRATE)
}

/// Move every hostile and resolve any attacks on the player
pub(crate) fn move_hostiles(turn: &mut Turn<'_>) {
    let world = &mut *turn.world;
    let pending = world.pending_location;
    let loc = world.location;

    // a dwarf that saw you blocks the way it came from
    if pending != loc
        && !world.is_forced(loc)
        && !world.flags(loc).contains(RoomFlags::NO_PIRATE)
        && world.hostiles[..PIRATE]
            .iter()
            .any(|h| h.prior == pending && h.seen)
    {
        world.pending_location = loc;
        turn.speak(2);
    }

    let world = &mut *turn.world;
    let pending = world.pending_location;
    if off_limits(world, pending) {
        return;
    }

    match world.hostile_stage {
        0 => {
            if pending >= DEEP_ROOM {
                world.hostile_stage = 1;
            }
            return;
        }
        1 => {
            if pending < DEEP_ROOM || world.rng.percent(95) {
                return;
            }
            first_contact(turn, pending);
            return;
        }
        _ => {}
    }

    let mut dwarves = 0u32;
    let mut attacks = 0u32;
    let mut hits = 0u32;

    for i in 0..HOSTILE_COUNT {
        let world = &mut *turn.world;
        if world.hostiles[i].room == 0 {
            continue;
        }

        let room = wander_target(world, i);
        let hostile = &mut world.hostiles[i];
        hostile.prior = hostile.room;
        hostile.room = room;
        hostile.seen = (hostile.seen && pending >= DEEP_ROOM)
            || hostile.room == pending
            || hostile.prior == pending;
        if !hostile.seen {
            continue;
        }
        hostile.room = pending;
        let prior = hostile.prior;
        debug!(hostile = i, room = pending, prior, "hostile follows player");

        if i == PIRATE {
            pirate::pirate_turn(turn);
            continue;
        }

        dwarves += 1;
        if prior == pending {
            attacks += 1;
            if world.knife != Knife::Explained {
                world.knife = Knife::Lying(pending);
            }
            let odds = 95 * u32::from(world.hostile_stage.saturating_sub(2));
            if world.rng.rn2(1000) < odds {
                hits += 1;
            }
        }
    }

    if dwarves == 0 {
        return;
    }
    if dwarves > 1 {
        turn.say(format!(
            "There are {dwarves} threatening little dwarves in the room with you!"
        ));
        turn.say("");
    } else {
        turn.speak(4);
    }

    if attacks == 0 {
        return;
    }
    let world = &mut *turn.world;
    if world.hostile_stage == 2 {
        world.hostile_stage = 3;
    }
    debug!(attacks, hits, "dwarves attack");

    let base = if attacks > 1 {
        turn.say(format!("{attacks} of them throw knives at you!!"));
        turn.say("");
        6
    } else {
        turn.speak(5);
        52
    };

    if hits <= 1 {
        turn.speak(base + hits as u16);
        if hits == 0 {
            return;
        }
    } else {
        turn.say(format!("{hits} of them get you !!!"));
        turn.say("");
    }

    turn.world.prior_location2 = pending;
    death::death(turn);
}

/// The dwarves first show themselves: some leave, one throws an axe
fn first_contact(turn: &mut Turn<'_>, pending: RoomId) {
    let world = &mut *turn.world;
    world.hostile_stage = 2;
    for _ in 0..2 {
        if world.rng.percent(50) {
            let gone = world.rng.rn2(PIRATE as u32) as usize;
            world.hostiles[gone].room = 0;
        }
    }
    for hostile in &mut world.hostiles[..PIRATE] {
        if hostile.room == pending {
            hostile.room = DWARF_ALT_ROOM;
        }
        hostile.prior = hostile.room;
    }
    debug!(room = pending, "first dwarf contact");

    turn.speak(3);
    turn.world.drop(Obj::Axe, Place::Room(pending));
}

/// Pick a random deep room for a hostile, avoiding where it is and was
fn wander_target(world: &mut WorldState, i: usize) -> RoomId {
    let hostile = world.hostiles[i];
    for _ in 0..WANDER_TRIES {
        let room = (world.rng.rn2(107) + 15) as RoomId;
        let barred = i == PIRATE && world.flags(room).contains(RoomFlags::NO_PIRATE);
        if room != hostile.prior && room != hostile.room && !barred {
            return room;
        }
    }
    hostile.prior
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameloop::Turn;
    use crate::test_cave::{TestCave, playing_state};
    use crate::world::{DialogueState, Hostile};

    fn deep_state(seed: u64) -> WorldState {
        let mut world = playing_state(seed);
        world.location = 60;
        world.pending_location = 60;
        world
    }

    #[test]
    fn test_wake_when_going_deep() {
        let cave = TestCave::new();
        let mut world = playing_state(1);
        world.pending_location = 30;
        let mut turn = Turn::new(&mut world, &cave);
        move_hostiles(&mut turn);
        assert!(turn.out.is_empty());
        assert_eq!(world.hostile_stage, 1);
    }

    #[test]
    fn test_forced_and_shallow_rooms_ignored() {
        let cave = TestCave::new();
        let mut world = playing_state(1);
        world.pending_location = 20;
        let mut turn = Turn::new(&mut world, &cave);
        move_hostiles(&mut turn);
        assert_eq!(world.hostile_stage, 0);

        world.pending_location = 5;
        let mut turn = Turn::new(&mut world, &cave);
        move_hostiles(&mut turn);
        assert_eq!(world.hostile_stage, 0);
    }

    #[test]
    fn test_first_contact_drops_axe() {
        let cave = TestCave::new();
        let mut contacted = false;
        for seed in 0..400 {
            let mut world = deep_state(seed);
            world.hostile_stage = 1;
            let mut turn = Turn::new(&mut world, &cave);
            move_hostiles(&mut turn);
            if world.hostile_stage == 2 {
                assert_eq!(world.place(Obj::Axe), Place::Room(60));
                assert!(world.hostiles[..PIRATE].iter().all(|h| h.room != 60));
                assert!(world.hostiles[..PIRATE].iter().all(|h| h.prior == h.room));
                contacted = true;
                break;
            }
            assert_eq!(world.place(Obj::Axe), Place::Nowhere);
        }
        assert!(contacted);
    }

    #[test]
    fn test_dwarf_blocks_retreat() {
        let cave = TestCave::new();
        let mut world = deep_state(1);
        world.hostile_stage = 2;
        world.pending_location = 61;
        world.hostiles[0] = Hostile {
            room: 60,
            prior: 61,
            seen: true,
        };
        let mut turn = Turn::new(&mut world, &cave);
        move_hostiles(&mut turn);
        assert_eq!(turn.out[..2], ["msg 2", ""]);
        assert_eq!(world.pending_location, 60);
    }

    #[test]
    fn test_wander_avoids_current_and_prior() {
        let mut world = deep_state(9);
        world.hostiles[0] = Hostile {
            room: 40,
            prior: 41,
            seen: false,
        };
        for _ in 0..200 {
            let room = wander_target(&mut world, 0);
            assert!((15..122).contains(&room));
            assert!(room != 40 && room != 41);
        }
    }

    #[test]
    fn test_pirate_avoids_no_pirate_rooms() {
        let mut world = deep_state(4);
        for _ in 0..300 {
            let room = wander_target(&mut world, PIRATE);
            assert!(!world.flags(room).contains(RoomFlags::NO_PIRATE));
        }
    }

    #[test]
    fn test_dwarf_attack_sequence_is_deterministic() {
        let cave = TestCave::new();
        let run = |seed| {
            let mut world = deep_state(seed);
            world.hostile_stage = 3;
            for h in &mut world.hostiles[..PIRATE] {
                *h = Hostile {
                    room: 60,
                    prior: 60,
                    seen: true,
                };
            }
            world.hostiles[PIRATE].room = 0;
            let mut turn = Turn::new(&mut world, &cave);
            move_hostiles(&mut turn);
            let out = turn.out.clone();
            (out, world.dialogue)
        };
        let (a, state_a) = run(12);
        let (b, state_b) = run(12);
        assert_eq!(a, b);
        assert_eq!(state_a, state_b);
    }

    #[test]
    fn test_attacks_report_counts() {
        let cave = TestCave::new();
        let mut world = deep_state(3);
        world.hostile_stage = 2;
        world.hostiles[PIRATE].room = 0;
        for h in &mut world.hostiles[2..PIRATE] {
            h.room = 0;
        }
        for h in &mut world.hostiles[..2] {
            *h = Hostile {
                room: 60,
                prior: 60,
                seen: true,
            };
        }
        let mut turn = Turn::new(&mut world, &cave);
        move_hostiles(&mut turn);
        let out = turn.out.clone();
        // stage 2 dwarves never hit
        assert_eq!(world.dialogue, DialogueState::Playing);
        assert_eq!(world.hostile_stage, 3);
        assert!(out[0].starts_with("There are 2 threatening"));
        assert_eq!(world.knife, Knife::Lying(60));
        assert_eq!(out.last().map(String::as_str), Some(""));
    }
}
