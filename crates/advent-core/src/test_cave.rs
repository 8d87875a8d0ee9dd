//! A small synthetic cave for engine tests
//!
//! Every message reads `msg <id>`, every room `room <n> long` or
//! `room <n> short`, and every item `<Obj> <state>`. The travel graph only
//! covers the few rooms the tests walk through.

use std::collections::HashMap;
use std::sync::OnceLock;

use strum::IntoEnumIterator;

use crate::action::Verb;
use crate::consts::{MAX_ROOM, RoomId};
use crate::data::{
    ItemText, MessageText, Motion, RoomText, TravelEntry, TravelGraph, VocabEntry, Vocabulary,
};
use crate::object::Obj;
use crate::rng::GameRng;
use crate::world::{DialogueState, WorldState};

/// Highest message id with text
const LAST_MESSAGE: usize = 3200;

const MOTIONS: &[(&str, u16)] = &[
    ("road", 2),
    ("enter", 3),
    ("forest", 6),
    ("forward", 7),
    ("back", 8),
    ("out", 11),
    ("building", 12),
    ("house", 12),
    ("crawl", 17),
    ("in", 19),
    ("null", 21),
    ("up", 29),
    ("down", 30),
    ("left", 36),
    ("right", 37),
    ("jump", 39),
    ("east", 43),
    ("west", 44),
    ("north", 45),
    ("south", 46),
    ("look", 57),
    ("xyzzy", 62),
    ("depression", 63),
    ("entrance", 64),
    ("plugh", 65),
    ("cave", 67),
    ("cross", 69),
    ("plover", 71),
    ("slide", 90),
    ("loop", 91),
];

const VERBS: &[(&str, Verb)] = &[
    ("take", Verb::Take),
    ("get", Verb::Take),
    ("drop", Verb::Drop),
    ("say", Verb::Say),
    ("open", Verb::Open),
    ("unlock", Verb::Open),
    ("nothing", Verb::Nothing),
    ("lock", Verb::Lock),
    ("on", Verb::On),
    ("light", Verb::On),
    ("off", Verb::Off),
    ("wave", Verb::Wave),
    ("calm", Verb::Calm),
    ("walk", Verb::Walk),
    ("kill", Verb::Kill),
    ("pour", Verb::Pour),
    ("eat", Verb::Eat),
    ("drink", Verb::Drink),
    ("rub", Verb::Rub),
    ("throw", Verb::Throw),
    ("quit", Verb::Quit),
    ("find", Verb::Find),
    ("inventory", Verb::Inventory),
    ("feed", Verb::Feed),
    ("fill", Verb::Fill),
    ("blast", Verb::Blast),
    ("score", Verb::Score),
    ("fee", Verb::Foo),
    ("fie", Verb::Foo),
    ("foe", Verb::Foo),
    ("foo", Verb::Foo),
    ("brief", Verb::Brief),
    ("read", Verb::Read),
    ("break", Verb::Break),
    ("wake", Verb::Wake),
    ("suspend", Verb::Suspend),
    ("hours", Verb::Hours),
    ("log", Verb::Log),
];

const SPECIALS: &[(&str, u16)] = &[("fee", 1), ("fie", 2), ("foe", 3), ("foo", 4), ("help", 51)];

/// Fresh state with a fixed seed
pub(crate) fn test_state(seed: u64) -> WorldState {
    WorldState::new(GameRng::new(seed))
}

/// Past the intro, standing at the end of the road, already described
pub(crate) fn playing_state(seed: u64) -> WorldState {
    let mut world = test_state(seed);
    world.dialogue = DialogueState::Playing;
    world.redescribe = false;
    world.visits[1] = 1;
    world
}

struct Tables {
    messages: Vec<String>,
    long: Vec<String>,
    short: Vec<String>,
    items: HashMap<(Obj, i8), String>,
    object_words: Vec<(String, u16)>,
    travel: Vec<Vec<TravelEntry>>,
}

/// Borrowed views of [`Tables`] in the shapes the providers return
struct Lines {
    messages: Vec<&'static str>,
    long: Vec<&'static str>,
    short: Vec<&'static str>,
    words: Vec<VocabEntry<'static>>,
}

fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(Tables::build)
}

fn lines() -> &'static Lines {
    static LINES: OnceLock<Lines> = OnceLock::new();
    LINES.get_or_init(|| {
        let tables = tables();

        let mut words: Vec<VocabEntry<'static>> = MOTIONS
            .iter()
            .map(|&(word, code)| VocabEntry { word, code })
            .collect();
        words.extend(
            tables
                .object_words
                .iter()
                .map(|(word, code)| VocabEntry {
                    word: word.as_str(),
                    code: *code,
                }),
        );
        words.extend(VERBS.iter().map(|&(word, verb)| VocabEntry {
            word,
            code: 2000 + verb.value(),
        }));
        words.extend(SPECIALS.iter().map(|&(word, value)| VocabEntry {
            word,
            code: 3000 + value,
        }));

        Lines {
            messages: strs(&tables.messages),
            long: strs(&tables.long),
            short: strs(&tables.short),
            words,
        }
    })
}

fn strs(lines: &'static [String]) -> Vec<&'static str> {
    lines.iter().map(String::as_str).collect()
}

fn go(verb: Motion, dest: u16) -> TravelEntry {
    TravelEntry {
        condition: 0,
        verb,
        dest,
    }
}

fn when(condition: u16, verb: Motion, dest: u16) -> TravelEntry {
    TravelEntry {
        condition,
        verb,
        dest,
    }
}

impl Tables {
    fn build() -> Self {
        let rooms = usize::from(MAX_ROOM) + 1;

        let mut items = HashMap::new();
        for obj in Obj::iter() {
            for state in -1..=5 {
                items.insert((obj, state), format!("{obj} {state}"));
            }
        }

        let object_words = Obj::iter()
            .filter(|obj| !matches!(obj, Obj::Rod2 | Obj::Plant2 | Obj::Troll2))
            .map(|obj| (obj.to_string().to_lowercase(), 1000 + obj as u16))
            .collect();

        let mut travel = vec![Vec::new(); rooms];
        let mut set = |room: RoomId, entries: Vec<TravelEntry>| {
            travel[usize::from(room)] = entries;
        };
        set(1, vec![go(Motion::SOUTH, 2), go(Motion::EAST, 593)]);
        set(
            2,
            vec![
                go(Motion::NORTH, 1),
                go(Motion(90), 16),
                go(Motion(91), 20),
                go(Motion(39), 309),
                when(612, Motion::UP, 1),
            ],
        );
        set(
            8,
            vec![when(303, Motion::DOWN, 9), go(Motion::DOWN, 563)],
        );
        set(9, vec![go(Motion::DOWN, 11), go(Motion::UP, 8)]);
        set(11, vec![go(Motion::WEST, 12)]);
        set(16, vec![go(Motion::ALWAYS, 3)]);
        set(20, vec![go(Motion::ALWAYS, 21)]);
        set(21, vec![go(Motion::ALWAYS, 20)]);
        set(99, vec![go(Motion(71), 301)]);
        set(117, vec![go(Motion(69), 303)]);

        Self {
            messages: (0..=LAST_MESSAGE).map(|id| format!("msg {id}")).collect(),
            long: (0..rooms).map(|room| format!("room {room} long")).collect(),
            short: (0..rooms).map(|room| format!("room {room} short")).collect(),
            items,
            object_words,
            travel,
        }
    }
}

/// Zero-sized handle onto the shared test tables
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TestCave;

impl TestCave {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl RoomText for TestCave {
    fn room_description(&self, room: RoomId, visited: bool) -> &[&str] {
        let lines = lines();
        let table = if visited { &lines.short } else { &lines.long };
        table
            .get(usize::from(room))
            .map(std::slice::from_ref)
            .unwrap_or(&[])
    }
}

impl MessageText for TestCave {
    fn message(&self, id: u16) -> &[&str] {
        lines()
            .messages
            .get(usize::from(id))
            .map(std::slice::from_ref)
            .unwrap_or(&[])
    }

    fn action_default(&self, verb: Verb) -> u16 {
        2000 + verb.value()
    }
}

impl ItemText for TestCave {
    fn item_description(&self, obj: Obj, state: i8) -> Option<&str> {
        tables().items.get(&(obj, state)).map(String::as_str)
    }
}

impl Vocabulary for TestCave {
    fn entries(&self) -> &[VocabEntry<'_>] {
        &lines().words
    }
}

impl TravelGraph for TestCave {
    fn travel(&self, room: RoomId) -> &[TravelEntry] {
        tables()
            .travel
            .get(usize::from(room))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Word, WordClass};

    #[test]
    fn test_chant_words_resolve_as_verbs() {
        let cave = TestCave::new();
        assert_eq!(cave.lookup("fee"), Some(2025));
        assert_eq!(
            cave.lookup_class("fee", WordClass::Special),
            Some(Word {
                class: WordClass::Special,
                value: 1
            })
        );
        assert_eq!(cave.lookup("keys"), Some(1001));
        assert_eq!(cave.lookup("rod2"), None);
    }

    #[test]
    fn test_text_shapes() {
        let cave = TestCave::new();
        assert_eq!(cave.message(54), ["msg 54"]);
        assert_eq!(cave.room_description(3, false), ["room 3 long"]);
        assert_eq!(cave.item_description(Obj::Vase, 3), Some("Vase 3"));
        assert!(cave.travel(200).is_empty());
    }
}
