//! Room condition bits

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Per-room condition flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct RoomFlags: u16 {
        /// Lit without a lamp
        const LIT = 0x01;
        /// The room's liquid is oil rather than water
        const OIL = 0x02;
        /// There is liquid here
        const LIQUID = 0x04;
        /// The pirate never goes here
        const NO_PIRATE = 0x08;
        const HINT_CAVE = 0x10;
        const HINT_BIRD = 0x20;
        const HINT_SNAKE = 0x40;
        const HINT_MAZE = 0x80;
        /// Travel happens without a command
        const FORCED = 0x100;
    }
}

// Manual serde impl for RoomFlags
impl Serialize for RoomFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RoomFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u16::deserialize(deserializer)?;
        Ok(RoomFlags::from_bits_truncate(bits))
    }
}
