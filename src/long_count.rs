use std::fmt;
use std::str::FromStr;

use crate::prelude::*;
use crate::consts::PLACE_SEPARATOR;
use crate::{CalendarRoundDate, ParseError};

/// The place values of the Long Count positional notation, least
/// significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum Period {
    #[display(fmt = "kin")]
    Kin,
    #[display(fmt = "winal")]
    Winal,
    #[display(fmt = "tun")]
    Tun,
    #[display(fmt = "katun")]
    Katun,
    #[display(fmt = "baktun")]
    Baktun,
}

impl Period {
    /// All five periods, least significant first.
    pub const ALL: [Self; 5] = [Self::Kin, Self::Winal, Self::Tun, Self::Katun, Self::Baktun];

    /// Length of one unit of this period, in days.
    ///
    /// Mixed radix: 20 kin to the winal, but only 18 winal to the tun,
    /// and 20 again at every place above.
    pub const fn days(self) -> i64 {
        match self {
            Self::Kin => 1,
            Self::Winal => 20,
            Self::Tun => 360,
            Self::Katun => 7200,
            Self::Baktun => 144_000,
        }
    }

    /// Units of this period per unit of the next; the topmost place has
    /// no ceiling.
    pub const fn radix(self) -> Option<i64> {
        match self {
            Self::Kin | Self::Tun | Self::Katun => Some(20),
            Self::Winal => Some(18),
            Self::Baktun => None,
        }
    }
}

/// An absolute day count on the unbounded Long Count timeline.
///
/// Unlike the cyclic calendars the Long Count never wraps; it only has a
/// floor. Day zero carries the Calendar Round 4 Ajaw 8 Kumku.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LongCountDate(i64);

impl LongCountDate {
    /// Day `days` of the Long Count; negative inputs clamp to day zero
    /// rather than wrapping.
    pub const fn new(days: i64) -> Self {
        Self(if days < 0 { 0 } else { days })
    }

    /// Builds from place values, least significant (kin) first.
    ///
    /// Absent or negative places count as zero; places beyond the baktun
    /// are ignored. Digits need not respect their radix, the raw number
    /// of days is multiplied out.
    pub fn from_places(places: &[i64]) -> Self {
        let mut days = 0;
        for (period, &digit) in Period::ALL.iter().zip(places) {
            if digit > 0 {
                days += digit * period.days();
            }
        }
        Self::new(days)
    }

    /// The day count, always non-negative.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// The day `days` later; negative `days` move backward, saturating at
    /// day zero.
    pub const fn plus(self, days: i64) -> Self {
        Self::new(self.0 + days)
    }

    /// Difference in days. MAY be negative: the Long Count is absolute,
    /// not cyclic.
    pub const fn minus(self, other: Self) -> i64 {
        self.0 - other.0
    }

    /// The digit at `period`, bounded by its radix except at the
    /// open-ended baktun place.
    pub const fn place(self, period: Period) -> i64 {
        let units = self.0 / period.days();
        match period.radix() {
            Some(radix) => units % radix,
            None => units,
        }
    }

    /// The Calendar Round label of this absolute day.
    pub fn calendar_round(self) -> CalendarRoundDate {
        CalendarRoundDate::from_value(self.0)
    }

    /// The first day at or after `start` whose Calendar Round is `target`.
    ///
    /// The cyclic difference from the Calendar Round at `start` is exactly
    /// the forward distance to the next occurrence, possibly zero.
    pub fn first_occurrence(target: CalendarRoundDate, start: Self) -> Self {
        let start_round = start.calendar_round();
        Self::new(start.0 + target.minus(start_round))
    }

    /// Every day in `[start, end)` whose Calendar Round is `target`, in
    /// increasing order. `end` is exclusive.
    pub fn occurrences(target: CalendarRoundDate, start: Self, end: Self) -> Vec<Self> {
        let mut found = Vec::new();
        let mut occurrence = Self::first_occurrence(target, start);
        while end.minus(occurrence) > 0 {
            found.push(occurrence);
            occurrence = occurrence.plus(CalendarRoundDate::CYCLE);
        }
        found
    }
}

impl fmt::Display for LongCountDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}.{}",
            self.place(Period::Baktun),
            self.place(Period::Katun),
            self.place(Period::Tun),
            self.place(Period::Winal),
            self.place(Period::Kin)
        )
    }
}

impl FromStr for LongCountDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let groups: Vec<&str> = trimmed.split(PLACE_SEPARATOR).map(str::trim).collect();
        if groups.len() != Period::ALL.len() {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }

        // Groups are written most significant first; pair them up with the
        // periods in reverse.
        let mut places = [0; 5];
        for (&group, (slot, period)) in groups
            .iter()
            .rev()
            .zip(places.iter_mut().zip(Period::ALL))
        {
            let digit = group
                .parse::<i64>()
                .map_err(|_| ParseError::InvalidFormat(group.to_owned()))?;
            if digit < 0 {
                return Err(ParseError::InvalidFormat(group.to_owned()));
            }
            if let Some(radix) = period.radix() {
                if digit >= radix {
                    return Err(ParseError::DigitOutOfRange {
                        digit,
                        place: period,
                        radix,
                    });
                }
            }
            *slot = digit;
        }

        Ok(Self::from_places(&places))
    }
}

impl serde::Serialize for LongCountDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for LongCountDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
