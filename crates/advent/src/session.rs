//! The line-at-a-time play loop

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use advent_core::{CaveContent, DialogueState, GameLoop, GameLoopResult, GameOutcome, WorldState};
use advent_save::{SaveError, delete_save, save_exists, save_game};

/// How a session stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ending {
    Finished(GameOutcome),
    /// Written to this path by `suspend`
    Suspended(PathBuf),
    EndOfInput,
}

pub struct Session<'c, C: CaveContent> {
    game: GameLoop<'c, C>,
    save_path: PathBuf,
}

impl<'c, C: CaveContent> Session<'c, C> {
    pub fn new(state: WorldState, content: &'c C, save_path: PathBuf) -> Self {
        Self {
            game: GameLoop::new(state, content),
            save_path,
        }
    }

    /// Play until the game ends, the player suspends, or input runs dry
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<Ending, SaveError> {
        if self.game.state().dialogue == DialogueState::Init {
            let lines = self.game.advance("");
            print_lines(&mut out, &lines)?;
        }

        for line in input.lines() {
            let line = line?;
            let command = line.trim().to_lowercase();
            debug!(command = %command, "input");

            let lines = self.game.advance(&command);
            print_lines(&mut out, &lines)?;

            match self.game.status() {
                GameLoopResult::Continue => {}
                GameLoopResult::GameOver(outcome) => return Ok(Ending::Finished(outcome)),
                GameLoopResult::SaveAndQuit => {
                    let state = self.game.state_mut();
                    state.take_save_request();
                    save_game(state, &self.save_path)?;
                    writeln!(out, "Game saved to {}.", self.save_path.display())?;
                    out.flush()?;
                    return Ok(Ending::Suspended(self.save_path.clone()));
                }
            }
        }
        Ok(Ending::EndOfInput)
    }
}

/// Remove the save a finished game was resumed from, so it cannot be
/// replayed. Returns whether a file was removed.
pub fn retire_save(path: &Path) -> Result<bool, SaveError> {
    if !save_exists(path) {
        return Ok(false);
    }
    delete_save(path)?;
    debug!(path = %path.display(), "finished game's save removed");
    Ok(true)
}

fn print_lines(out: &mut impl Write, lines: &[String]) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::GameRng;
    use advent_data::ClassicCave;
    use advent_save::{load_game, save_exists};

    fn run(state: WorldState, save_path: PathBuf, input: &str) -> (Ending, String) {
        let cave = ClassicCave::new();
        let mut session = Session::new(state, &cave, save_path);
        let mut out = Vec::new();
        let ending = session.run(input.as_bytes(), &mut out).unwrap();
        (ending, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_intro_printed_before_input() {
        let dir = tempfile::tempdir().unwrap();
        let state = WorldState::new(GameRng::new(1));
        let (ending, text) = run(state, dir.path().join("g.json"), "");
        assert_eq!(ending, Ending::EndOfInput);
        assert!(text.starts_with("Welcome to Adventure!!"));
    }

    #[test]
    fn test_input_is_case_folded() {
        let dir = tempfile::tempdir().unwrap();
        let state = WorldState::new(GameRng::new(1));
        let (_, text) = run(state, dir.path().join("g.json"), "no\n  BUILDING \n");
        assert!(text.contains("You are inside a building, a well house for a large spring."));
    }

    #[test]
    fn test_quit_finishes() {
        let dir = tempfile::tempdir().unwrap();
        let state = WorldState::new(GameRng::new(2));
        let (ending, text) = run(state, dir.path().join("g.json"), "no\nquit\nyes\nlook\n");
        assert_eq!(ending, Ending::Finished(GameOutcome::GaveUp));
        assert!(text.contains("  * GAME OVER *"));
    }

    #[test]
    fn test_suspend_writes_a_resumable_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("g.json");
        let state = WorldState::new(GameRng::new(3));
        let (ending, text) = run(state, path.clone(), "no\nbuilding\ntake lamp\nsuspend\nlook\n");
        assert_eq!(ending, Ending::Suspended(path.clone()));
        assert!(text.ends_with(&format!("Game saved to {}.\n", path.display())));

        let restored = load_game(&path).unwrap();
        assert_eq!(restored.location, 3);
        assert!(!restored.save_requested);

        let (ending, text) = run(restored, path, "inventory\n");
        assert_eq!(ending, Ending::EndOfInput);
        assert!(text.contains("Brass lantern"));
    }

    #[test]
    fn test_finished_game_retires_its_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("g.json");
        let state = WorldState::new(GameRng::new(4));
        run(state, path.clone(), "no\nsuspend\n");
        assert!(save_exists(&path));

        let restored = load_game(&path).unwrap();
        let (ending, _) = run(restored, path.clone(), "quit\nyes\n");
        assert_eq!(ending, Ending::Finished(GameOutcome::GaveUp));
        assert!(retire_save(&path).unwrap());
        assert!(!save_exists(&path));
        assert!(!retire_save(&path).unwrap());
    }
}
