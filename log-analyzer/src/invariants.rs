use std::{fmt, ops::RangeInclusive};

use derive_more::{Debug, Display};
use thiserror::Error;

/// Browser name exactly as it appeared in the user agent. `Firefox` and
/// `firefox` are different browsers as far as the counters are concerned.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash)]
pub struct Browser(String);

impl Browser {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for Browser {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hour(u8);

impl Hour {
    pub const RANGE: RangeInclusive<u8> = 0..=23;

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Hour> {
        Self::RANGE.map(Self)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("hour {0} is outside 0..=23")]
pub struct HourOutOfRange(pub u32);

impl TryFrom<u32> for Hour {
    type Error = HourOutOfRange;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .filter(|h| Self::RANGE.contains(h))
            .map(Self)
            .ok_or(HourOutOfRange(value))
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}
