//! The brass lantern

use crate::action::{ActionResult, act};
use crate::gameloop::Turn;
use crate::object::Obj;

pub fn turn_on(turn: &mut Turn<'_>) -> ActionResult {
    let world = &mut *turn.world;
    if !world.here(Obj::Lamp) {
        return act(turn);
    }
    if world.lamp_fuel < 0 {
        turn.speak(184);
        return Ok(());
    }
    world.set_prop(Obj::Lamp, 1);
    let was_dark = world.was_dark;
    turn.speak(39);
    if was_dark {
        // show the room that just lit up
        let world = &mut *turn.world;
        world.was_dark = false;
        world.redescribe = true;
    }
    Ok(())
}

pub fn turn_off(turn: &mut Turn<'_>) -> ActionResult {
    let world = &mut *turn.world;
    if !world.here(Obj::Lamp) {
        return act(turn);
    }
    world.set_prop(Obj::Lamp, 0);
    turn.speak(40);
    Ok(())
}
