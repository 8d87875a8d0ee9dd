//! Game options
//!
//! Options come from a plain `key=value` file. Blank lines and lines
//! starting with `#` are ignored.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{CLOSED_CLOCK, CLOSING_CLOCK, LAMP_FUEL, MAX_TICK_REPEATS};

/// Tunable starting values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    /// Fixed random seed; `None` seeds from entropy
    pub seed: Option<u64>,
    /// How many times one command may repeat the tick
    pub max_tick_repeats: u32,
    pub lamp_fuel: i32,
    /// Turns between the last treasure being found and the closing warning
    pub closing_clock: i32,
    /// Turns between the closing warning and the cave closing
    pub closed_clock: i32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            seed: None,
            max_tick_repeats: MAX_TICK_REPEATS,
            lamp_fuel: LAMP_FUEL,
            closing_clock: CLOSING_CLOCK,
            closed_clock: CLOSED_CLOCK,
        }
    }
}

impl GameOptions {
    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_config(&contents)
    }

    /// Parse options from config text
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for (index, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line
                .split_once('=')
                .ok_or(OptionsError::MissingValue {
                    line: index + 1,
                    key: line.to_string(),
                })?;
            options.set_option(key.trim(), value.trim())?;
        }

        Ok(options)
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionsError> {
        let invalid = || OptionsError::InvalidValue {
            key: name.to_string(),
            value: value.to_string(),
        };

        match name {
            "seed" => {
                self.seed = match value {
                    "" | "random" => None,
                    _ => Some(value.parse().map_err(|_| invalid())?),
                }
            }
            "max_tick_repeats" => {
                self.max_tick_repeats = value.parse().map_err(|_| invalid())?;
                if self.max_tick_repeats == 0 {
                    return Err(invalid());
                }
            }
            "lamp_fuel" => self.lamp_fuel = value.parse().map_err(|_| invalid())?,
            "closing_clock" => self.closing_clock = value.parse().map_err(|_| invalid())?,
            "closed_clock" => self.closed_clock = value.parse().map_err(|_| invalid())?,
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Write options back out in the format `parse_config` reads
    pub fn to_config_string(&self) -> String {
        let seed = self
            .seed
            .map_or_else(|| "random".to_string(), |s| s.to_string());
        format!(
            "# adventure options\nseed={seed}\nmax_tick_repeats={}\nlamp_fuel={}\nclosing_clock={}\nclosed_clock={}\n",
            self.max_tick_repeats, self.lamp_fuel, self.closing_clock, self.closed_clock
        )
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), OptionsError> {
        std::fs::write(path, self.to_config_string())?;
        Ok(())
    }
}

/// Failure reading options
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("invalid value for option '{key}': {value}")]
    InvalidValue { key: String, value: String },

    #[error("line {line}: missing value for '{key}'")]
    MissingValue { line: usize, key: String },
}
