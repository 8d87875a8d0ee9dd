//! advent-save: suspended games on disk
//!
//! A save file is one JSON document: a [`SaveHeader`] followed by the full
//! [`WorldState`], random stream included, so a restored game replays
//! exactly as the suspended one would have.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use advent_core::WorldState;
use advent_core::consts::RoomId;

/// Current save file format version
pub const SAVE_VERSION: u32 = 1;

/// File name used when no save path is given
pub const DEFAULT_SAVE_NAME: &str = "adventure.json";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Save file not found: {0}")]
    NotFound(PathBuf),

    #[error("Incompatible save version: expected {expected}, found {found}")]
    IncompatibleVersion { expected: u32, found: u32 },

    #[error("Invalid save file header")]
    InvalidHeader,
}

/// What a save browser shows without restoring the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveHeader {
    pub magic: String,
    pub version: u32,
    /// Turns taken when suspended
    pub turns: u32,
    pub location: RoomId,
    /// Seconds since the Unix epoch
    pub timestamp: u64,
}

impl SaveHeader {
    const MAGIC: &'static str = "CCAV";

    pub fn new(state: &WorldState) -> Self {
        Self {
            magic: Self::MAGIC.to_string(),
            version: SAVE_VERSION,
            turns: state.turns,
            location: state.location,
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        }
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        if self.magic != Self::MAGIC {
            return Err(SaveError::InvalidHeader);
        }
        if self.version != SAVE_VERSION {
            return Err(SaveError::IncompatibleVersion {
                expected: SAVE_VERSION,
                found: self.version,
            });
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct SaveFileRef<'a> {
    header: SaveHeader,
    state: &'a WorldState,
}

#[derive(Deserialize)]
struct SaveFile {
    header: SaveHeader,
    state: WorldState,
}

#[derive(Deserialize)]
struct HeaderOnly {
    header: SaveHeader,
}

fn open(path: &Path) -> Result<BufReader<File>, SaveError> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            Err(SaveError::NotFound(path.to_path_buf()))
        }
        Err(err) => Err(err.into()),
    }
}

/// Write a game to `path`, creating parent directories as needed
pub fn save_game(state: &WorldState, path: impl AsRef<Path>) -> Result<SaveHeader, SaveError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let header = SaveHeader::new(state);
    let file = SaveFileRef {
        header: header.clone(),
        state,
    };
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &file)?;

    debug!(path = %path.display(), turns = header.turns, location = header.location, "game saved");
    Ok(header)
}

/// Restore a game written by [`save_game`]
pub fn load_game(path: impl AsRef<Path>) -> Result<WorldState, SaveError> {
    let path = path.as_ref();
    let file: SaveFile = serde_json::from_reader(open(path)?)?;
    file.header.validate()?;
    debug!(path = %path.display(), turns = file.header.turns, "game restored");
    Ok(file.state)
}

/// Read and validate only the header
pub fn load_header(path: impl AsRef<Path>) -> Result<SaveHeader, SaveError> {
    let file: HeaderOnly = serde_json::from_reader(open(path.as_ref())?)?;
    file.header.validate()?;
    Ok(file.header)
}

pub fn save_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

pub fn delete_save(path: impl AsRef<Path>) -> Result<(), SaveError> {
    let path = path.as_ref();
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            Err(SaveError::NotFound(path.to_path_buf()))
        }
        Err(err) => Err(err.into()),
    }
}

/// Directory holding saves under the platform data dir
pub fn save_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("colossal-cave");
    path.push("saves");
    path
}

pub fn default_save_path() -> PathBuf {
    save_dir().join(DEFAULT_SAVE_NAME)
}

/// Every readable save in `dir`, newest first
///
/// Files that are not saves, or saves from another version, are skipped.
pub fn list_saves_in(dir: impl AsRef<Path>) -> Result<Vec<(PathBuf, SaveHeader)>, SaveError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut saves = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_none_or(|e| e != "json") {
            continue;
        }
        match load_header(&path) {
            Ok(header) => saves.push((path, header)),
            Err(err) => warn!(path = %path.display(), %err, "skipping unreadable save"),
        }
    }

    saves.sort_by(|a, b| b.1.timestamp.cmp(&a.1.timestamp));
    Ok(saves)
}

pub fn list_saves() -> Result<Vec<(PathBuf, SaveHeader)>, SaveError> {
    list_saves_in(save_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_core::{GameRng, advance};
    use advent_data::ClassicCave;

    fn played(seed: u64) -> WorldState {
        let cave = ClassicCave::new();
        let mut state = WorldState::new(GameRng::new(seed));
        for input in ["", "no", "building", "take lamp", "take keys"] {
            advance(&mut state, &cave, input);
        }
        state
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        let state = played(5);

        let header = save_game(&state, &path).unwrap();
        assert_eq!(header.location, 3);
        assert_eq!(header.turns, state.turns);
        assert!(save_exists(&path));

        let loaded = load_game(&path).unwrap();
        assert_eq!(loaded, state);
        assert_eq!(load_header(&path).unwrap(), header);
    }

    #[test]
    fn test_restored_game_continues_identically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        let cave = ClassicCave::new();
        let mut state = played(9);
        save_game(&state, &path).unwrap();
        let mut restored = load_game(&path).unwrap();

        for input in ["on", "xyzzy", "west", "west", "take bird", "score"] {
            assert_eq!(
                advance(&mut state, &cave, input),
                advance(&mut restored, &cave, input)
            );
        }
        assert_eq!(state, restored);
    }

    #[test]
    fn test_save_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("game.json");
        save_game(&played(1), &path).unwrap();
        assert!(save_exists(&path));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(!save_exists(&path));
        assert!(matches!(load_game(&path), Err(SaveError::NotFound(_))));
        assert!(matches!(delete_save(&path), Err(SaveError::NotFound(_))));
    }

    #[test]
    fn test_bad_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        save_game(&played(2), &path).unwrap();

        let mut doc: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        doc["header"]["magic"] = "NOPE".into();
        fs::write(&path, doc.to_string()).unwrap();
        assert!(matches!(load_game(&path), Err(SaveError::InvalidHeader)));

        doc["header"]["magic"] = "CCAV".into();
        doc["header"]["version"] = 7.into();
        fs::write(&path, doc.to_string()).unwrap();
        assert!(matches!(
            load_header(&path),
            Err(SaveError::IncompatibleVersion {
                expected: 1,
                found: 7
            })
        ));
    }

    #[test]
    fn test_garbage_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(load_game(&path), Err(SaveError::Serialization(_))));
    }

    #[test]
    fn test_delete_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        save_game(&played(3), &path).unwrap();
        delete_save(&path).unwrap();
        assert!(!save_exists(&path));
    }

    #[test]
    fn test_list_saves_skips_strangers() {
        let dir = tempfile::tempdir().unwrap();
        save_game(&played(1), dir.path().join("a.json")).unwrap();
        save_game(&played(2), dir.path().join("b.json")).unwrap();
        fs::write(dir.path().join("notes.txt"), "hello").unwrap();
        fs::write(dir.path().join("broken.json"), "{}").unwrap();

        let saves = list_saves_in(dir.path()).unwrap();
        assert_eq!(saves.len(), 2);
        assert!(saves.iter().all(|(_, h)| h.magic == "CCAV"));

        assert!(list_saves_in(dir.path().join("missing")).unwrap().is_empty());
    }

    #[test]
    fn test_default_save_path() {
        let path = default_save_path();
        assert!(path.ends_with("colossal-cave/saves/adventure.json"));
    }
}
