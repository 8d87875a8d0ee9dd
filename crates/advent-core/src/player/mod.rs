//! Player fate: death, reincarnation, game over and the score

pub mod death;
pub mod score;

pub use score::{GameOutcome, ScoreItem, ScoreReport, score};

use tracing::info;

use crate::gameloop::Turn;
use crate::world::DialogueState;

/// End the game and print the final score
pub(crate) fn game_over(turn: &mut Turn<'_>) {
    turn.halt();
    turn.world.dialogue = DialogueState::GameOver;
    turn.say("  * GAME OVER *");
    turn.say("");
    let report = score(turn.world);
    for line in report.lines() {
        turn.say(line);
    }
    info!(
        score = report.total,
        turns = turn.world.turns,
        deaths = turn.world.deaths,
        "game over"
    );
}
