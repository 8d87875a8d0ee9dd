//! Two-word command parser
//!
//! Fills the per-call [`Command`](super::Command) from one input line.
//! Words resolve through the vocabulary into a class and a value; special
//! words answer directly and never reach a handler.

use crate::action::{Token, Verb};
use crate::data::{Motion, Word, WordClass};
use crate::error::EngineError;
use crate::gameloop::Turn;
use crate::object::Obj;

/// Messages for a word the vocabulary does not know
const UNKNOWN_WORD: [u16; 3] = [60, 61, 13];

/// Special word that lists the vocabulary when typed twice
const SPECIAL_HELP: u16 = 51;

/// Parse `input` into `turn.cmd`. Returns false when the line was fully
/// answered here (unknown word, special reply, bad grammar).
pub(crate) fn parse(turn: &mut Turn<'_>, input: &str) -> Result<bool, EngineError> {
    let line = input.trim();
    let lowered = line.to_lowercase();
    let mut words = lowered.split_whitespace();

    let Some(first) = words.next() else {
        unknown_word(turn);
        return Ok(false);
    };
    let Some(w1) = analyze(turn, first)? else {
        return Ok(false);
    };

    if w1.word.class == WordClass::Verb && w1.word.value == Verb::Say.value() {
        turn.cmd.verb = Some(Verb::Say);
        turn.cmd.said = line
            .split_once(char::is_whitespace)
            .map(|(_, rest)| rest.trim().to_string())
            .unwrap_or_default();
        turn.cmd.word1 = Some(w1);
        return Ok(true);
    }

    let w2 = match words.next() {
        Some(second) => match analyze(turn, second)? {
            Some(token) => Some(token),
            None => return Ok(false),
        },
        None => None,
    };

    let (w1, w2) = rewrite_enter(w1, w2);

    if let Some(answered) = special_reply(turn, &w1, w2.as_ref()) {
        return Ok(!answered);
    }

    bind(turn, w1, w2)
}

/// Look one word up, answering unknown words
fn analyze(turn: &mut Turn<'_>, text: &str) -> Result<Option<Token>, EngineError> {
    let Some(code) = turn.content.lookup(text) else {
        unknown_word(turn);
        return Ok(None);
    };
    let word = Word::from_code(code).ok_or_else(|| EngineError::UnknownWord {
        word: text.to_string(),
        code,
    })?;
    Ok(Some(Token {
        text: text.to_string(),
        word,
    }))
}

fn unknown_word(turn: &mut Turn<'_>) {
    let id = turn.world.rng.choose(&UNKNOWN_WORD).copied().unwrap_or(60);
    turn.speak(id);
}

/// "enter stream" means "stream"
fn rewrite_enter(w1: Token, mut w2: Option<Token>) -> (Token, Option<Token>) {
    if w1.text == "enter" {
        if let Some(motion) = w2.take_if(|t| t.word.class == WordClass::Motion) {
            return (motion, None);
        }
    }
    (w1, w2)
}

/// Answer special words. Returns `Some(true)` if one was answered.
fn special_reply(turn: &mut Turn<'_>, w1: &Token, w2: Option<&Token>) -> Option<bool> {
    let special = |t: &Token| (t.word.class == WordClass::Special).then_some(t.word.value);
    let first = special(w1);
    let second = w2.and_then(special);

    match (first, second) {
        (Some(SPECIAL_HELP), Some(SPECIAL_HELP)) => {
            let lines = word_list(turn);
            for line in lines {
                turn.say(line);
            }
            turn.say("");
        }
        (Some(value), _) | (None, Some(value)) => turn.speak(value),
        (None, None) => return None,
    }
    Some(true)
}

/// Bind the words to verb, object and motion slots
fn bind(turn: &mut Turn<'_>, w1: Token, w2: Option<Token>) -> Result<bool, EngineError> {
    let class1 = w1.word.class;
    let class2 = w2.as_ref().map(|t| t.word.class);

    if class1 == WordClass::Motion && class2 == Some(WordClass::Motion) {
        bad_grammar(turn);
        return Ok(false);
    }

    let cmd = &mut turn.cmd;
    if class1 == WordClass::Motion {
        cmd.motion = Some(Motion(w1.word.value));
    } else if let Some(second) = w2.as_ref().filter(|t| t.word.class == WordClass::Motion) {
        cmd.motion = Some(Motion(second.word.value));
        if class1 == WordClass::Verb {
            cmd.verb = Verb::from_value(w1.word.value);
        }
    } else {
        match (class1, class2) {
            (WordClass::Object, None | Some(WordClass::Verb)) => {
                cmd.object = Some(object_of(&w1)?);
                if let Some(second) = &w2 {
                    cmd.verb = Some(verb_of(second)?);
                }
            }
            (WordClass::Verb, None | Some(WordClass::Object)) => {
                cmd.verb = Some(verb_of(&w1)?);
                if let Some(second) = &w2 {
                    cmd.object = Some(object_of(second)?);
                }
            }
            (WordClass::Object, Some(WordClass::Object))
            | (WordClass::Verb, Some(WordClass::Verb)) => {
                bad_grammar(turn);
                return Ok(false);
            }
            _ => return Err(EngineError::Grammar),
        }
    }

    turn.cmd.word1 = Some(w1);
    turn.cmd.word2 = w2;
    Ok(true)
}

fn object_of(token: &Token) -> Result<Obj, EngineError> {
    Obj::from_code(token.word.value).ok_or_else(|| EngineError::UnknownWord {
        word: token.text.clone(),
        code: token.word.code(),
    })
}

fn verb_of(token: &Token) -> Result<Verb, EngineError> {
    Verb::from_value(token.word.value).ok_or_else(|| EngineError::UnknownWord {
        word: token.text.clone(),
        code: token.word.code(),
    })
}

fn bad_grammar(turn: &mut Turn<'_>) {
    turn.say("bad grammar...");
    turn.say("");
}

/// The verbs and motions a player can type, five to a line
fn word_list(turn: &Turn<'_>) -> Vec<String> {
    let mut words: Vec<&str> = turn
        .content
        .entries()
        .iter()
        .filter(|e| e.code < 1000 || (2000..3000).contains(&e.code))
        .map(|e| e.word)
        .filter(|&w| w != "xyzzy" && w != "plugh")
        .collect();
    words.dedup();
    words
        .chunks(5)
        .map(|row| {
            row.iter()
                .map(|w| format!("{w:^12}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Read a yes/no answer. Prints a reminder and returns `None` for anything
/// else.
pub(crate) fn yes_no(turn: &mut Turn<'_>, input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "yes" | "y" | "yeah" | "yarp" | "ya" | "yep" | "sure" | "ok" | "affirmative" => {
            Some(true)
        }
        "no" | "n" | "nope" | "nah" | "narp" => Some(false),
        _ => {
            turn.say("Please say either 'yes' or 'no'");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameloop::Turn;
    use crate::test_cave::{TestCave, test_state};
    use crate::world::DialogueState;

    fn parse_line(input: &str) -> (bool, crate::action::Command, Vec<String>) {
        let cave = TestCave::new();
        let mut world = test_state(1);
        world.dialogue = DialogueState::Playing;
        let mut turn = Turn::new(&mut world, &cave);
        let ok = parse(&mut turn, input).unwrap();
        (ok, turn.cmd.clone(), turn.out.clone())
    }

    #[test]
    fn test_verb_object() {
        let (ok, cmd, out) = parse_line("Take KEYS");
        assert!(ok);
        assert_eq!(cmd.verb, Some(Verb::Take));
        assert_eq!(cmd.object, Some(Obj::Keys));
        assert!(out.is_empty());
    }

    #[test]
    fn test_object_then_verb() {
        let (ok, cmd, _) = parse_line("lamp on");
        assert!(ok);
        assert_eq!(cmd.verb, Some(Verb::On));
        assert_eq!(cmd.object, Some(Obj::Lamp));
    }

    #[test]
    fn test_third_word_ignored() {
        let (ok, cmd, _) = parse_line("get lamp now please");
        assert!(ok);
        assert_eq!(cmd.object, Some(Obj::Lamp));
    }

    #[test]
    fn test_motion_wins() {
        let (ok, cmd, _) = parse_line("walk north");
        assert!(ok);
        assert_eq!(cmd.motion, Some(Motion::NORTH));
        assert_eq!(cmd.verb, Some(Verb::Walk));
        let (ok, cmd, _) = parse_line("keys north");
        assert!(ok);
        assert_eq!(cmd.motion, Some(Motion::NORTH));
        assert_eq!(cmd.object, None);
    }

    #[test]
    fn test_two_motions_rejected() {
        let (ok, _, out) = parse_line("north south");
        assert!(!ok);
        assert_eq!(out, ["bad grammar...", ""]);
    }

    #[test]
    fn test_two_objects_rejected() {
        let (ok, _, out) = parse_line("keys lamp");
        assert!(!ok);
        assert_eq!(out[0], "bad grammar...");
    }

    #[test]
    fn test_unknown_word() {
        let (ok, _, out) = parse_line("fdafda");
        assert!(!ok);
        assert_eq!(out.len(), 2);
        assert!(["msg 60", "msg 61", "msg 13"].contains(&out[0].as_str()));
        let (ok, _, out) = parse_line("   ");
        assert!(!ok);
        assert!(out[0].starts_with("msg "));
    }

    #[test]
    fn test_say_keeps_text() {
        let (ok, cmd, _) = parse_line("say Hello There");
        assert!(ok);
        assert_eq!(cmd.verb, Some(Verb::Say));
        assert_eq!(cmd.said, "Hello There");
        let (_, cmd, _) = parse_line("say");
        assert_eq!(cmd.said, "");
    }

    #[test]
    fn test_enter_rewrite() {
        let (ok, cmd, _) = parse_line("enter building");
        assert!(ok);
        assert_eq!(cmd.motion, Some(Motion::BUILDING));
        assert_eq!(cmd.word2, None);
    }

    #[test]
    fn test_special_words() {
        let (ok, _, out) = parse_line("help");
        assert!(!ok);
        assert_eq!(out[0], "msg 51");
        let (ok, _, out) = parse_line("help help");
        assert!(!ok);
        assert!(out.iter().any(|l| l.contains("north")));
        assert!(!out.iter().any(|l| l.contains("xyzzy")));
    }

    #[test]
    fn test_yes_no() {
        let cave = TestCave::new();
        let mut world = test_state(1);
        let mut turn = Turn::new(&mut world, &cave);
        assert_eq!(yes_no(&mut turn, "Yeah"), Some(true));
        assert_eq!(yes_no(&mut turn, "narp"), Some(false));
        assert_eq!(yes_no(&mut turn, " OK "), Some(true));
        assert_eq!(yes_no(&mut turn, "maybe"), None);
        assert_eq!(yes_no(&mut turn, "yes please"), None);
        assert_eq!(turn.out.len(), 2);
        assert_eq!(turn.out[0], "Please say either 'yes' or 'no'");
    }
}
