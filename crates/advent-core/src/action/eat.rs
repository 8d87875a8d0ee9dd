//! Eating and feeding

use crate::action::{ActionResult, act, need_object};
use crate::gameloop::Turn;
use crate::object::{Fixture, Obj};

pub fn eat_here(turn: &mut Turn<'_>) -> ActionResult {
    if !turn.world.here(Obj::Food) {
        need_object(turn);
        return Ok(());
    }
    turn.cmd.object = Some(Obj::Food);
    eat(turn)
}

pub fn eat(turn: &mut Turn<'_>) -> ActionResult {
    let id = match turn.cmd.object {
        Some(Obj::Food) => {
            turn.world.destroy(Obj::Food);
            72
        }
        Some(
            Obj::Bird
            | Obj::Snake
            | Obj::Clam
            | Obj::Oyster
            | Obj::Dwarf
            | Obj::Dragon
            | Obj::Troll
            | Obj::Bear,
        ) => 71,
        _ => return act(turn),
    };
    turn.speak(id);
    Ok(())
}

/// Offer food (or a bird) to a creature
pub fn feed(turn: &mut Turn<'_>) -> ActionResult {
    let world = &mut *turn.world;
    let food_here = world.here(Obj::Food);
    let id = match turn.cmd.object {
        Some(Obj::Bird) => 100,
        Some(Obj::Dwarf) => {
            if !food_here {
                return act(turn);
            }
            world.hostile_stage = world.hostile_stage.saturating_add(1);
            103
        }
        Some(Obj::Bear) => {
            if !food_here {
                match world.prop(Obj::Bear) {
                    0 => 102,
                    3 => 110,
                    _ => return act(turn),
                }
            } else {
                world.destroy(Obj::Food);
                world.set_prop(Obj::Bear, 1);
                world.set_fixture(Obj::Axe, Fixture::Loose);
                world.set_prop(Obj::Axe, 0);
                168
            }
        }
        Some(Obj::Dragon) => {
            if world.prop(Obj::Dragon) != 0 {
                110
            } else {
                102
            }
        }
        Some(Obj::Troll) => 182,
        Some(Obj::Snake) => {
            if world.closing.is_closed() || !world.here(Obj::Bird) {
                102
            } else {
                world.destroy(Obj::Bird);
                world.set_prop(Obj::Bird, 0);
                world.lost_treasures += 1;
                101
            }
        }
        _ => 14,
    };
    turn.speak(id);
    Ok(())
}
