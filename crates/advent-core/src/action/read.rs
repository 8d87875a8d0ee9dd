//! Reading: the magazine, the tablet, the pirate's note and the oyster

use crate::action::{ActionResult, Candidates, act, need_object, parser, see_nothing};
use crate::gameloop::Turn;
use crate::object::Obj;
use crate::world::DialogueState;

/// "It looks like a clue; read it anyway?"
const OYSTER_QUESTION: u16 = 192;
const OYSTER_CLUE: u16 = 193;

/// `read` with no object: whatever is legible here
pub fn read_here(turn: &mut Turn<'_>) -> ActionResult {
    let world = &*turn.world;
    let mut legible = [Obj::Magazine, Obj::Tablet, Obj::Message]
        .into_iter()
        .filter(|&obj| world.here(obj))
        .fold(Candidates::None, Candidates::add);
    if world.closing.is_closed() && world.toting(Obj::Oyster) {
        legible = Candidates::Exactly(Obj::Oyster);
    }

    match legible {
        Candidates::Exactly(obj) if !world.is_dark() => {
            turn.cmd.object = Some(obj);
            read(turn)
        }
        _ => {
            need_object(turn);
            Ok(())
        }
    }
}

pub fn read(turn: &mut Turn<'_>) -> ActionResult {
    if turn.world.is_dark() {
        see_nothing(turn);
        return Ok(());
    }
    let id = match turn.cmd.object {
        Some(Obj::Magazine) => 190,
        Some(Obj::Tablet) => 196,
        Some(Obj::Message) => 191,
        Some(Obj::Oyster) if turn.world.toting(Obj::Oyster) && turn.world.closing.is_closed() => {
            turn.speak(OYSTER_QUESTION);
            turn.world.dialogue = DialogueState::ReadOysterQuery;
            turn.halt();
            return Ok(());
        }
        _ => return act(turn),
    };
    turn.speak(id);
    Ok(())
}

/// Answer to the oyster clue offer
pub(crate) fn answer_oyster(turn: &mut Turn<'_>, input: &str) -> ActionResult {
    let Some(yes) = parser::yes_no(turn, input) else {
        return Ok(());
    };
    turn.speak(if yes { OYSTER_CLUE } else { 54 });
    turn.world.dialogue = DialogueState::Playing;
    turn.tick()
}
