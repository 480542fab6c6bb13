use std::fmt;

use crate::clock::ReferenceTime;

/// What Punch is most likely doing at a given JST hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityStatus {
    Sleeping,
    Waking,
    Playing,
    Resting,
    Active,
}

impl ActivityStatus {
    /// Half-open ranges covering the whole day:
    /// [19,24)∪[0,6) sleeping, [6,9) waking, [9,12) playing,
    /// [12,14) resting, [14,19) active.
    #[must_use]
    pub fn from_hour(hour: u32) -> Self {
        match hour % 24 {
            6..=8 => Self::Waking,
            9..=11 => Self::Playing,
            12..=13 => Self::Resting,
            14..=18 => Self::Active,
            // 19..=23 and 0..=5
            _ => Self::Sleeping,
        }
    }

    #[must_use]
    pub fn from_time(time: &ReferenceTime) -> Self {
        Self::from_hour(time.hour())
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sleeping => "Sleeping",
            Self::Waking => "Waking up",
            Self::Playing => "Playing",
            Self::Resting => "Resting",
            Self::Active => "Active",
        }
    }

    #[must_use]
    pub fn is_night(self) -> bool {
        self == Self::Sleeping
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
