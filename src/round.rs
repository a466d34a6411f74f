use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::consts::{
    CALENDAR_ROUND_CYCLE, HAAB_REDUCED, SHARED_FACTOR, TZOLKIN_CYCLE, TZOLKIN_REDUCED_INVERSE,
};
use crate::cycle::normalize;
use crate::{Day, HaabDate, Month, ParseError, TzolkinDate};

/// Error type for Calendar Round construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CombineError {
    /// The two wheels never align on this pair of labels.
    #[error("no Calendar Round day carries {tzolkin} together with {haab}")]
    ImpossiblePair { tzolkin: TzolkinDate, haab: HaabDate },

    /// Error parsing a component.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid Calendar Round format.
    #[error("Invalid Calendar Round format: {0}")]
    InvalidFormat(String),
}

/// The Calendar Round of Long Count day zero, 4 Ajaw 8 Kumku. The whole
/// combined value space is measured from this alignment.
static EPOCH: LazyLock<CalendarRoundDate> = LazyLock::new(|| CalendarRoundDate {
    tzolkin: TzolkinDate::from_parts(4, Day::Ajaw),
    haab: HaabDate::from_parts(8, Month::Kumku),
});

/// A date in the 18,980-day Calendar Round, the composite of the Tzolkin
/// and Haab cycles.
///
/// 18,980 = lcm(260, 365): the two wheels share the factor 5, so only one
/// in five Tzolkin/Haab pairs names a day that actually occurs. The
/// combined value counts days from the epoch alignment 4 Ajaw 8 Kumku.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarRoundDate {
    tzolkin: TzolkinDate,
    haab: HaabDate,
}

impl CalendarRoundDate {
    /// Length of the Calendar Round cycle.
    pub const CYCLE: i64 = CALENDAR_ROUND_CYCLE;

    /// Combines a Tzolkin and a Haab date.
    ///
    /// # Errors
    /// Returns `CombineError::ImpossiblePair` if the two labels never fall
    /// on the same day; the pair is never silently reinterpreted.
    pub fn new(tzolkin: TzolkinDate, haab: HaabDate) -> Result<Self, CombineError> {
        let combined = Self { tzolkin, haab };
        if normalize(
            combined.tzolkin_offset() - combined.haab_offset(),
            SHARED_FACTOR,
        ) != 0
        {
            return Err(CombineError::ImpossiblePair { tzolkin, haab });
        }
        Ok(combined)
    }

    /// The Calendar Round of Long Count day zero, 4 Ajaw 8 Kumku.
    pub fn epoch() -> Self {
        *EPOCH
    }

    /// The Calendar Round `days` after the epoch alignment.
    pub fn from_value(days: i64) -> Self {
        let epoch = Self::epoch();
        Self {
            tzolkin: epoch.tzolkin.plus(days),
            haab: epoch.haab.plus(days),
        }
    }

    /// Days from the epoch alignment to this date, in `0..18980`.
    ///
    /// Non-coprime Chinese Remainder combination: with 260 = 5 * 52 and
    /// 365 = 5 * 73, the number of whole Tzolkin cycles `k` between the
    /// two offsets satisfies `52 * k = (dh - dt) / 5 (mod 73)`.
    pub fn value(&self) -> i64 {
        let dt = self.tzolkin_offset();
        let dh = self.haab_offset();
        let k = normalize(
            (dh - dt) / SHARED_FACTOR * TZOLKIN_REDUCED_INVERSE,
            HAAB_REDUCED,
        );
        normalize(dt + TZOLKIN_CYCLE * k, CALENDAR_ROUND_CYCLE)
    }

    /// The Tzolkin component.
    #[inline]
    pub const fn tzolkin(&self) -> TzolkinDate {
        self.tzolkin
    }

    /// The Haab component.
    #[inline]
    pub const fn haab(&self) -> HaabDate {
        self.haab
    }

    /// The date `days` later in the cycle; both wheels advance together.
    pub fn plus(self, days: i64) -> Self {
        Self {
            tzolkin: self.tzolkin.plus(days),
            haab: self.haab.plus(days),
        }
    }

    /// Forward distance from `other` to this date, always in `0..18980`.
    pub fn minus(self, other: Self) -> i64 {
        normalize(self.value() - other.value(), CALENDAR_ROUND_CYCLE)
    }

    /// Days from the epoch Tzolkin to this one, in `0..260`.
    fn tzolkin_offset(&self) -> i64 {
        self.tzolkin.minus(Self::epoch().tzolkin)
    }

    /// Days from the epoch Haab to this one, in `0..365`.
    fn haab_offset(&self) -> i64 {
        self.haab.minus(Self::epoch().haab)
    }
}

impl fmt::Display for CalendarRoundDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tzolkin, self.haab)
    }
}

impl FromStr for CalendarRoundDate {
    type Err = CombineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput.into());
        }

        // Whitespace is free-form, so strip it all and split the two
        // components at the name/numeral boundary instead.
        let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = compact.as_bytes();
        let boundary = (1..bytes.len())
            .find(|&i| bytes[i].is_ascii_digit() && bytes[i - 1].is_ascii_alphabetic())
            .ok_or_else(|| CombineError::InvalidFormat(trimmed.to_owned()))?;

        let tzolkin = compact[..boundary].parse::<TzolkinDate>()?;
        let haab = compact[boundary..].parse::<HaabDate>()?;
        Self::new(tzolkin, haab)
    }
}

impl PartialOrd for CalendarRoundDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarRoundDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Order by days since the epoch alignment.
        self.value().cmp(&other.value())
    }
}

impl Serialize for CalendarRoundDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarRoundDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
