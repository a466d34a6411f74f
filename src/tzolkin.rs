use std::fmt;
use std::str::FromStr;

use crate::consts::{TZOLKIN_CYCLE, TZOLKIN_DAYS, TZOLKIN_NUMERALS};
use crate::cycle::{CycleValue, normalize};
use crate::{ParseError, split_component};

/// The twenty named days of the Tzolkin cycle, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Day {
    Imix,
    Ik,
    Akbal,
    Kan,
    Chikchan,
    Kimi,
    Manik,
    Lamat,
    Muluk,
    Ok,
    Chuen,
    Eb,
    Ben,
    Ix,
    Men,
    Kib,
    Kaban,
    Etznab,
    Kawak,
    Ajaw,
}

impl Day {
    /// All twenty days in canonical order.
    pub const ALL: [Self; 20] = [
        Self::Imix,
        Self::Ik,
        Self::Akbal,
        Self::Kan,
        Self::Chikchan,
        Self::Kimi,
        Self::Manik,
        Self::Lamat,
        Self::Muluk,
        Self::Ok,
        Self::Chuen,
        Self::Eb,
        Self::Ben,
        Self::Ix,
        Self::Men,
        Self::Kib,
        Self::Kaban,
        Self::Etznab,
        Self::Kawak,
        Self::Ajaw,
    ];

    /// Zero-based position in the canonical order.
    #[inline]
    pub const fn index(self) -> i64 {
        self as i64
    }

    /// Canonical name, the single table used by both rendering and parsing.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Imix => "imix",
            Self::Ik => "ik",
            Self::Akbal => "akbal",
            Self::Kan => "kan",
            Self::Chikchan => "chikchan",
            Self::Kimi => "kimi",
            Self::Manik => "manik",
            Self::Lamat => "lamat",
            Self::Muluk => "muluk",
            Self::Ok => "ok",
            Self::Chuen => "chuen",
            Self::Eb => "eb",
            Self::Ben => "ben",
            Self::Ix => "ix",
            Self::Men => "men",
            Self::Kib => "kib",
            Self::Kaban => "kaban",
            Self::Etznab => "etznab",
            Self::Kawak => "kawak",
            Self::Ajaw => "ajaw",
        }
    }

    /// Day at `index` in canonical order; any integer folds into the cycle.
    pub(crate) fn from_index(index: i64) -> Self {
        Self::ALL[normalize(index, TZOLKIN_DAYS) as usize]
    }

    /// Case-insensitive lookup against the canonical name table.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A date in the 260-day Tzolkin cycle.
///
/// Decomposes into a 1-based numeral (`value mod 13 + 1`) and a named day
/// (`value mod 20`). Because 13 and 20 are mutually prime, each
/// numeral/day pair occurs exactly once per cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TzolkinDate(CycleValue<{ TZOLKIN_CYCLE }>);

impl TzolkinDate {
    /// Length of the Tzolkin cycle.
    pub const CYCLE: i64 = TZOLKIN_CYCLE;

    /// Folds any day number into the cycle.
    pub const fn new(value: i64) -> Self {
        Self(CycleValue::new(value))
    }

    /// Builds the unique date carrying `numeral` and `day`.
    ///
    /// Exactly one of the twenty-apart candidates `day + 20k`, k in 0..13,
    /// has the requested numeral residue. Out-of-range numerals fold mod 13.
    pub fn from_parts(numeral: i64, day: Day) -> Self {
        let coefficient = normalize(numeral - 1, TZOLKIN_NUMERALS);
        let mut candidate = day.index();
        while candidate % TZOLKIN_NUMERALS != coefficient {
            candidate += TZOLKIN_DAYS;
        }
        Self::new(candidate)
    }

    /// Canonical value in `0..260`.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0.get()
    }

    /// The 1-based numeral, in `1..=13`.
    pub const fn numeral(self) -> i64 {
        self.0.get() % TZOLKIN_NUMERALS + 1
    }

    /// The named day.
    pub fn day(self) -> Day {
        Day::from_index(self.0.get())
    }

    /// The date `days` later in the cycle. Negative `days` move backward.
    pub const fn plus(self, days: i64) -> Self {
        Self(self.0.plus(days))
    }

    /// Forward distance from `other` to this date, always in `0..260`.
    pub const fn minus(self, other: Self) -> i64 {
        self.0.minus(other.0)
    }
}

impl fmt::Display for TzolkinDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.numeral(), self.day())
    }
}

impl FromStr for TzolkinDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (numeral, name) = split_component(s)?;
        let day = Day::from_name(name).ok_or_else(|| ParseError::UnknownDay(name.to_owned()))?;
        if !(1..=TZOLKIN_NUMERALS).contains(&numeral) {
            return Err(ParseError::InvalidNumeral {
                numeral,
                max: TZOLKIN_NUMERALS,
            });
        }
        Ok(Self::from_parts(numeral, day))
    }
}

impl serde::Serialize for TzolkinDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for TzolkinDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
