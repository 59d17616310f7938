use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::SnakeError;

/// Named speed presets, slowest first.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum Difficulty {
    Novice,
    #[default]
    Intermediate,
    Expert,
}

impl Difficulty {
    /// All levels in selector order.
    pub const ALL: [Self; 3] = [Self::Novice, Self::Intermediate, Self::Expert];

    /// Ticks per second for this level.
    #[must_use]
    pub fn tick_rate(self) -> TickRate {
        match self {
            Self::Novice => TickRate(6),
            Self::Intermediate => TickRate(10),
            Self::Expert => TickRate(14),
        }
    }

    /// Lower-case identifier accepted by [`FromStr`] and the settings file.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Novice => "novice",
            Self::Intermediate => "intermediate",
            Self::Expert => "expert",
        }
    }

    /// Capitalized label shown in the selector.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Intermediate => "Intermediate",
            Self::Expert => "Expert",
        }
    }

    /// Next level in selector order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Novice => Self::Intermediate,
            Self::Intermediate => Self::Expert,
            Self::Expert => Self::Novice,
        }
    }

    /// Previous level in selector order, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::Novice => Self::Expert,
            Self::Intermediate => Self::Novice,
            Self::Expert => Self::Intermediate,
        }
    }

    /// Level bound to a digit shortcut (`1`..=`3`).
    #[must_use]
    pub fn from_shortcut(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(Self::Novice),
            '2' => Some(Self::Intermediate),
            '3' => Some(Self::Expert),
            _ => None,
        }
    }
}

impl FromStr for Difficulty {
    type Err = SnakeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.name() == name)
            .ok_or_else(|| SnakeError::UnknownDifficulty(name.to_owned()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Positive tick frequency in ticks per second.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct TickRate(u32);

impl TickRate {
    /// Returns `None` for a zero rate.
    #[must_use]
    pub fn new(ticks_per_second: u32) -> Option<Self> {
        (ticks_per_second > 0).then_some(Self(ticks_per_second))
    }

    #[must_use]
    pub fn ticks_per_second(self) -> u32 {
        self.0
    }

    /// Time between two ticks.
    #[must_use]
    pub fn period(self) -> Duration {
        Duration::from_secs(1) / self.0
    }
}
