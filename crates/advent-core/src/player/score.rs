//! Scoring
//!
//! The score is a pure function of the world state. The same breakdown is
//! printed at game over and, without the end-of-game items, by the `score`
//! verb.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::gameloop::Turn;
use crate::object::{Obj, Place};
use crate::world::{EndgameBonus, WorldState};

/// Points for getting as far as the first dwarf
const HOSTILES_AWAKE: u32 = 25;
/// Points for reaching the closing phase
const MASTERS_SECTION: u32 = 25;

/// One line of the score breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreItem {
    pub label: &'static str,
    pub points: u32,
}

/// Itemized score
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ScoreReport {
    pub items: Vec<ScoreItem>,
    pub total: u32,
}

impl ScoreReport {
    fn add(&mut self, label: &'static str, points: u32) {
        self.items.push(ScoreItem { label, points });
        self.total += points;
    }

    /// Report lines, ending with the total
    pub fn lines(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| format!("{}: {}", item.label, item.points))
            .chain(std::iter::once(format!("SCORE: {}", self.total)))
            .collect()
    }
}

/// Points for the bonus earned in the repository
fn closing_bonus(bonus: Option<EndgameBonus>) -> u32 {
    match bonus {
        None => 10,
        Some(EndgameBonus::Splatter) => 25,
        Some(EndgameBonus::Lava) => 30,
        Some(EndgameBonus::Victory) => 45,
    }
}

/// Score the game as it stands
pub fn score(world: &WorldState) -> ScoreReport {
    let mut report = ScoreReport::default();

    let treasures: u32 = Obj::treasures()
        .map(|obj| {
            let found = if world.prop(obj) >= 0 { 2 } else { 0 };
            let deposited = world.place(obj) == Place::Room(ROOM_BUILDING) && world.prop(obj) == 0;
            found + if deposited { obj.deposit_value() - 2 } else { 0 }
        })
        .sum();

    report.add("Showing up", 2);
    if treasures > 0 {
        report.add("Treasures", treasures);
    }

    let finished = world.is_done() && !world.gave_up;
    let survival = u32::from(MAX_DEATHS.saturating_sub(world.deaths)) * 10;
    if survival > 0 && finished {
        report.add("Survival", survival);
    }

    let mut secrets = if finished { 4 } else { 0 };

    if world.hostile_stage != 0 {
        report.add("Getting well in", HOSTILES_AWAKE);
    }
    if world.closing.is_closing() {
        report.add("Masters section", MASTERS_SECTION);
    }
    if world.closing.is_closed() {
        report.add("Bonus", closing_bonus(world.bonus));
    }

    if world.place(Obj::Magazine) == Place::Room(ROOM_WITTS_END) {
        secrets += 1;
    }
    if secrets > 0 {
        report.add("Secrets", secrets);
    }

    report
}

/// Print the running score
pub(crate) fn report(turn: &mut Turn<'_>) {
    for line in score(turn.world).lines() {
        turn.say(line);
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Stopped by an engine fault
    Fault(u16),
    /// Quit, declined reincarnation or ran out of light
    GaveUp,
    /// Used up every life, or died during closing
    Died,
    /// Blew up the repository
    Blasted(EndgameBonus),
    /// Ended some other way, such as waking the dwarves
    Ended,
}

impl GameOutcome {
    pub fn of(world: &WorldState) -> Self {
        if let Some(code) = world.fault {
            GameOutcome::Fault(code)
        } else if let Some(bonus) = world.bonus {
            GameOutcome::Blasted(bonus)
        } else if world.gave_up {
            GameOutcome::GaveUp
        } else if world.deaths >= MAX_DEATHS || (world.deaths > 0 && world.closing.is_closing()) {
            GameOutcome::Died
        } else {
            GameOutcome::Ended
        }
    }
}
