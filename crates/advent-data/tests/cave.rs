//! Plays the classic cave end to end

use advent_core::{
    DialogueState, GameLoop, GameLoopResult, GameOutcome, GameRng, Obj, Place, WorldState,
    advance, is_done, new_game,
};
use advent_data::ClassicCave;
use proptest::prelude::*;

fn fresh(seed: u64) -> WorldState {
    WorldState::new(GameRng::new(seed))
}

/// Past the intro, standing on the road
fn on_the_road(cave: &ClassicCave, seed: u64) -> WorldState {
    let mut state = fresh(seed);
    advance(&mut state, cave, "");
    advance(&mut state, cave, "no");
    state
}

fn play(state: &mut WorldState, cave: &ClassicCave, inputs: &[&str]) -> Vec<Vec<String>> {
    inputs.iter().map(|input| advance(state, cave, input)).collect()
}

fn said(out: &[String], line: &str) -> bool {
    out.iter().any(|l| l == line)
}

#[test]
fn test_opening() {
    let cave = ClassicCave::new();
    let mut state = fresh(1);
    assert_eq!(
        advance(&mut state, &cave, ""),
        ["Welcome to Adventure!!  Would you like instructions?", ""]
    );
    let out = advance(&mut state, &cave, "no");
    assert_eq!(
        out,
        [
            "You are standing at the end of a road before a small brick building.",
            "Around you is a forest.  A small stream flows out of the building and",
            "down a gully.",
            "",
        ]
    );
    assert_eq!(state.location, 1);
}

#[test]
fn test_instructions_on_request() {
    let cave = ClassicCave::new();
    let mut state = fresh(1);
    advance(&mut state, &cave, "");
    let out = advance(&mut state, &cave, "yes");
    assert!(out[0].starts_with("Somewhere nearby is Colossal Cave"));
    assert!(said(&out, "down a gully."));
}

#[test]
fn test_building_and_keys() {
    let cave = ClassicCave::new();
    let mut state = on_the_road(&cave, 1);

    let out = advance(&mut state, &cave, "building");
    assert_eq!(out[0], "You are inside a building, a well house for a large spring.");
    assert!(said(&out, "There are some keys on the ground here."));
    assert!(said(&out, "There is a shiny brass lamp nearby."));
    assert!(said(&out, "There is food here."));
    assert!(said(&out, "There is a bottle of water here."));

    assert_eq!(advance(&mut state, &cave, "take keys"), ["OK", ""]);
    assert_eq!(state.held, 1);
    assert!(state.toting(Obj::Keys));

    assert_eq!(advance(&mut state, &cave, "take keys"), ["You are already carrying it!", ""]);

    let out = advance(&mut state, &cave, "inventory");
    assert_eq!(out[0], "You are currently holding the following:");
    assert!(said(&out, "Set of keys"));

    assert_eq!(advance(&mut state, &cave, "drop keys"), ["OK", ""]);
    assert_eq!(state.held, 0);
    assert_eq!(state.place(Obj::Keys), Place::Room(3));
}

#[test]
fn test_unknown_word() {
    let cave = ClassicCave::new();
    let mut state = on_the_road(&cave, 3);
    let before = state.clone();
    let out = advance(&mut state, &cave, "fdafda");
    assert_eq!(out.len(), 2);
    assert_eq!(state.turns, before.turns);
    assert_eq!(state.location, before.location);
}

#[test]
fn test_short_description_on_return() {
    let cave = ClassicCave::new();
    let mut state = on_the_road(&cave, 2);
    let out = play(&mut state, &cave, &["west", "east", "look"]);
    assert_eq!(out[0][0], "You have walked up a hill, still in the forest.  The road slopes back");
    assert_eq!(out[1][0], "You're at end of road again.");
    assert!(said(&out[2], "down a gully."));
}

#[test]
fn test_no_way_to_go() {
    let cave = ClassicCave::new();
    let mut state = on_the_road(&cave, 1);
    advance(&mut state, &cave, "building");
    let out = advance(&mut state, &cave, "north");
    assert_eq!(out, ["There is no way to go that direction.", ""]);
    assert_eq!(state.location, 3);
}

#[test]
fn test_magic_word_with_lamp() {
    let cave = ClassicCave::new();
    let mut state = on_the_road(&cave, 4);
    play(&mut state, &cave, &["building", "take lamp"]);
    assert_eq!(advance(&mut state, &cave, "light lamp"), ["Your lamp is now on.", ""]);

    let out = advance(&mut state, &cave, "xyzzy");
    assert_eq!(
        out[0],
        "You are in a debris room filled with stuff washed in from the surface."
    );
    assert!(said(&out, "A three foot black rod with a rusty star on an end lies nearby."));
    assert_eq!(state.location, 11);

    let out = advance(&mut state, &cave, "xyzzy");
    assert_eq!(out[0], "You're inside building.");
    assert_eq!(state.location, 3);
}

#[test]
fn test_magic_word_without_lamp_is_dark() {
    let cave = ClassicCave::new();
    let mut state = on_the_road(&cave, 4);
    advance(&mut state, &cave, "building");
    let out = advance(&mut state, &cave, "xyzzy");
    assert_eq!(
        out,
        ["It is now pitch dark.  If you proceed you will likely fall into a pit.", ""]
    );
}

#[test]
fn test_grate() {
    let cave = ClassicCave::new();
    let mut state = on_the_road(&cave, 5);
    play(&mut state, &cave, &["enter", "take keys", "out"]);
    assert_eq!(state.location, 1);

    let out = advance(&mut state, &cave, "depression");
    assert_eq!(state.location, 8);
    assert!(said(&out, "The grate is locked."));

    let out = advance(&mut state, &cave, "down");
    assert_eq!(out, ["You can't go through a locked steel grate!", ""]);
    assert_eq!(state.location, 8);

    assert_eq!(
        advance(&mut state, &cave, "unlock grate"),
        ["The grate is now unlocked.", ""]
    );
    let out = advance(&mut state, &cave, "down");
    assert_eq!(state.location, 9);
    assert_eq!(
        out[0],
        "You are in a small chamber beneath a 3x3 steel grate to the surface."
    );
    assert!(said(&out, "The grate is open."));
}

#[test]
fn test_help_and_canned_replies() {
    let cave = ClassicCave::new();
    let mut state = on_the_road(&cave, 6);
    let out = advance(&mut state, &cave, "help");
    assert_eq!(out[0], "I know of places, actions, and things.  Most of my vocabulary");
    let out = advance(&mut state, &cave, "abracadabra");
    assert_eq!(out, ["Good try, but that is an old worn-out magic word.", ""]);
    let out = advance(&mut state, &cave, "fum");
    assert_eq!(out, ["Nothing happens.", ""]);
    assert!(!is_done(&state));
}

#[test]
fn test_wandering_in_the_dark_ends_in_a_pit() {
    let cave = ClassicCave::new();
    let mut state = on_the_road(&cave, 7);
    state.location = 11;
    state.pending_location = 11;
    state.was_dark = true;

    let mut fell = false;
    for step in 0..60 {
        let motion = if step % 2 == 0 { "west" } else { "east" };
        let out = advance(&mut state, &cave, motion);
        if said(&out, "You fell into a pit and broke every bone in your body!") {
            assert!(out.iter().any(|l| l.starts_with("Oh dear, you seem to have gotten")));
            fell = true;
            break;
        }
        assert_eq!(
            out,
            ["It is now pitch dark.  If you proceed you will likely fall into a pit.", ""]
        );
    }
    assert!(fell);
    assert_eq!(state.dialogue, DialogueState::DeathQuery);

    let out = advance(&mut state, &cave, "yes");
    assert!(out[0].starts_with("All right.  But don't blame me"));
    assert_eq!(state.deaths, 1);
    assert_eq!(state.location, 3);
    assert_eq!(state.dialogue, DialogueState::Playing);
}

#[test]
fn test_lamp_runs_out_above_ground() {
    let cave = ClassicCave::new();
    let mut state = on_the_road(&cave, 8);
    state.carry(Obj::Lamp);
    state.set_prop(Obj::Lamp, 1);
    state.lamp_fuel = 40;

    let mut warned = 0;
    let mut dark = 0;
    let mut turns = 0;
    while !is_done(&state) && turns < 100 {
        let motion = if state.location == 1 { "east" } else { "west" };
        let out = advance(&mut state, &cave, motion);
        if out.iter().any(|l| l.starts_with("Your lamp is getting dim.")) {
            warned += 1;
            assert_eq!(state.lamp_fuel, 30);
        }
        if said(&out, "Your lamp has run out of power.") {
            dark += 1;
            assert_eq!(state.prop(Obj::Lamp), 0);
        }
        turns += 1;
    }
    assert_eq!(warned, 1);
    assert_eq!(dark, 1);
    assert!(is_done(&state));
    assert!(state.gave_up);
}

#[test]
fn test_quit() {
    let cave = ClassicCave::new();
    let state = on_the_road(&cave, 9);
    let mut game = GameLoop::new(state, &cave);
    assert_eq!(game.advance("quit"), ["Do you really want to quit now?", ""]);
    let out = game.advance("yes");
    assert_eq!(out[0], "OK");
    assert!(out.iter().any(|l| l == "  * GAME OVER *"));
    assert!(matches!(game.status(), GameLoopResult::GameOver(GameOutcome::GaveUp)));
}

#[test]
fn test_suspend_requests_a_save() {
    let cave = ClassicCave::new();
    let state = on_the_road(&cave, 9);
    let mut game = GameLoop::new(state, &cave);
    game.advance("suspend");
    assert_eq!(game.status(), GameLoopResult::SaveAndQuit);
}

#[test]
fn test_same_seed_same_game() {
    let cave = ClassicCave::new();
    let inputs = [
        "", "no", "building", "take lamp", "light lamp", "take keys", "xyzzy", "west", "west",
        "look", "take bird", "east", "east", "xyzzy", "score", "plugh",
    ];
    let mut a = fresh(77);
    let mut b = fresh(77);
    assert_eq!(play(&mut a, &cave, &inputs), play(&mut b, &cave, &inputs));
    assert_eq!(a, b);
}

#[test]
fn test_saved_game_resumes() {
    let cave = ClassicCave::new();
    let mut state = on_the_road(&cave, 31);
    play(&mut state, &cave, &["building", "take lamp", "on"]);

    let saved = serde_json::to_value(&state).unwrap();
    let mut resumed = new_game(Some(saved)).unwrap();
    let rest = ["xyzzy", "west", "up", "west", "inventory", "score"];
    assert_eq!(play(&mut state, &cave, &rest), play(&mut resumed, &cave, &rest));
    assert_eq!(state, resumed);
}

#[test]
fn test_corrupt_state_is_fatal() {
    let cave = ClassicCave::new();
    let mut state = new_game(Some(serde_json::json!({ "dialogue": "Sideways" }))).unwrap();
    let out = advance(&mut state, &cave, "look");
    assert_eq!(out.len(), 1);
    assert!(out[0].starts_with("Fatal error. (Bug #40)"));
    assert!(is_done(&state));
}

const WORDS: &[&str] = &[
    "north", "south", "east", "west", "up", "down", "in", "out", "building", "xyzzy", "plugh",
    "take lamp", "light lamp", "take keys", "drop keys", "unlock grate", "depression",
    "inventory", "look", "back", "score", "take bird", "feed bird", "wave rod", "fdafda",
    "get all",
];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_held_matches_inventory(
        seed in 0u64..1000,
        script in prop::collection::vec(prop::sample::select(WORDS), 1..40),
    ) {
        let cave = ClassicCave::new();
        let mut state = on_the_road(&cave, seed);
        for input in script {
            advance(&mut state, &cave, input);
            if is_done(&state) {
                break;
            }
            prop_assert_eq!(usize::from(state.held), state.carried().count());
            prop_assert!(state.held <= 7);
            prop_assert!(state.location <= 140);
        }
    }
}
