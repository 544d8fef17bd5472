use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr, IntoEnumIterator};

/// Difficulty level partitioning both questions and leaderboards.
///
/// Stored on disk as the bare integer (`1`, `2`, `3`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumIter,
    Display,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Level {
    Easy = 1,
    Medium = 2,
    Hard = 3,
}

impl Level {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn all() -> impl Iterator<Item = Level> {
        Self::iter()
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.as_u8()
    }
}

impl TryFrom<u8> for Level {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or_else(|| {
            format!(
                "difficulty {} out of range {}-{}",
                value,
                Level::MIN,
                Level::MAX
            )
        })
    }
}
