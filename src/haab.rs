use std::fmt;
use std::str::FromStr;

use crate::consts::{DAYS_PER_MONTH, HAAB_CYCLE, WAYEB_DAYS};
use crate::cycle::{CycleValue, normalize};
use crate::{ParseError, split_component};

/// The nineteen months of the Haab year, in canonical order.
///
/// The first eighteen months hold twenty days each; the terminal Wayeb
/// holds the five remaining days of the 365-day year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    Pohp,
    Wo,
    Sip,
    Zotz,
    Sek,
    Xul,
    Yaxkin,
    Mol,
    Chen,
    Yax,
    Sak,
    Keh,
    Mak,
    Kankin,
    Muan,
    Pax,
    Kayab,
    Kumku,
    Wayeb,
}

impl Month {
    /// All nineteen months in canonical order.
    pub const ALL: [Self; 19] = [
        Self::Pohp,
        Self::Wo,
        Self::Sip,
        Self::Zotz,
        Self::Sek,
        Self::Xul,
        Self::Yaxkin,
        Self::Mol,
        Self::Chen,
        Self::Yax,
        Self::Sak,
        Self::Keh,
        Self::Mak,
        Self::Kankin,
        Self::Muan,
        Self::Pax,
        Self::Kayab,
        Self::Kumku,
        Self::Wayeb,
    ];

    /// Zero-based position in the canonical order.
    #[inline]
    pub const fn index(self) -> i64 {
        self as i64
    }

    /// Canonical name, the single table used by both rendering and parsing.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pohp => "pohp",
            Self::Wo => "wo",
            Self::Sip => "sip",
            Self::Zotz => "zotz",
            Self::Sek => "sek",
            Self::Xul => "xul",
            Self::Yaxkin => "yaxkin",
            Self::Mol => "mol",
            Self::Chen => "chen",
            Self::Yax => "yax",
            Self::Sak => "sak",
            Self::Keh => "keh",
            Self::Mak => "mak",
            Self::Kankin => "kankin",
            Self::Muan => "muan",
            Self::Pax => "pax",
            Self::Kayab => "kayab",
            Self::Kumku => "kumku",
            Self::Wayeb => "wayeb",
        }
    }

    /// Number of days this month holds.
    pub const fn days(self) -> i64 {
        match self {
            Self::Wayeb => WAYEB_DAYS,
            _ => DAYS_PER_MONTH,
        }
    }

    /// Days of the year elapsed before this month begins. Also the value
    /// of the month's first day.
    pub const fn days_before(self) -> i64 {
        self.index() * DAYS_PER_MONTH
    }

    /// Case-insensitive lookup against the canonical name table.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|month| month.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A date in the 365-day Haab year cycle.
///
/// Decomposes into a named month and a 1-based numeral within it, in
/// `1..=20` for the first eighteen months and `1..=5` in Wayeb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HaabDate(CycleValue<{ HAAB_CYCLE }>);

impl HaabDate {
    /// Length of the Haab cycle.
    pub const CYCLE: i64 = HAAB_CYCLE;

    /// Folds any day number into the cycle.
    pub const fn new(value: i64) -> Self {
        Self(CycleValue::new(value))
    }

    /// Builds the date `numeral` days into `month`.
    ///
    /// The numeral is clamped into the month before the value is folded
    /// into the year, so construction never fails.
    pub fn from_parts(numeral: i64, month: Month) -> Self {
        let day = (numeral - 1).clamp(0, month.days());
        Self::new(month.days_before() + day)
    }

    /// Canonical value in `0..365`.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0.get()
    }

    /// The named month.
    pub fn month(self) -> Month {
        let index = (self.value() / DAYS_PER_MONTH).min(Month::Wayeb.index());
        Month::ALL[index as usize]
    }

    /// The 1-based numeral within the month.
    pub fn numeral(self) -> i64 {
        self.value() - self.month().days_before() + 1
    }

    /// The date `days` later in the cycle. Negative `days` move backward.
    pub const fn plus(self, days: i64) -> Self {
        Self(self.0.plus(days))
    }

    /// Forward distance from `other` to this date, always in `0..365`.
    pub const fn minus(self, other: Self) -> i64 {
        self.0.minus(other.0)
    }
}

impl fmt::Display for HaabDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.numeral(), self.month())
    }
}

impl FromStr for HaabDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (numeral, name) = split_component(s)?;
        let month =
            Month::from_name(name).ok_or_else(|| ParseError::UnknownMonth(name.to_owned()))?;
        if !(1..=month.days()).contains(&numeral) {
            return Err(ParseError::InvalidNumeral {
                numeral,
                max: month.days(),
            });
        }
        Ok(Self::from_parts(numeral, month))
    }
}

impl serde::Serialize for HaabDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for HaabDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_folds_into_cycle() {
        assert_eq!(HaabDate::new(42).value(), 42);
        assert_eq!(HaabDate::new(365).value(), 0);
        assert_eq!(HaabDate::new(-362).value(), 3);
    }

    #[test]
    fn test_plus() {
        assert_eq!(HaabDate::new(0).plus(75).value(), 75);
        assert_eq!(HaabDate::new(364).plus(1).value(), 0);
        assert_eq!(HaabDate::new(10).plus(-20).value(), 355);
    }

    #[test]
    fn test_minus() {
        let itself = HaabDate::new(42);
        assert_eq!(itself.minus(itself), 0);
        assert_eq!(HaabDate::new(250).minus(HaabDate::new(0)), 250);
        assert_eq!(HaabDate::new(0).minus(HaabDate::new(250)), 115);
    }

    #[test]
    fn test_display() {
        assert_eq!(HaabDate::new(0).to_string(), "1.pohp");
        assert_eq!(HaabDate::new(1).to_string(), "2.pohp");
        assert_eq!(HaabDate::new(20).to_string(), "1.wo");
        assert_eq!(HaabDate::new(24).to_string(), "5.wo");
        assert_eq!(HaabDate::new(360).to_string(), "1.wayeb");
        assert_eq!(HaabDate::new(364).to_string(), "5.wayeb");
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(HaabDate::from_parts(5, Month::Wo), HaabDate::new(24));
        assert_eq!(HaabDate::from_parts(2, Month::Pohp), HaabDate::new(1));
        assert_eq!(HaabDate::from_parts(5, Month::Wayeb), HaabDate::new(364));
        assert_eq!(HaabDate::from_parts(8, Month::Kumku).value(), 347);
    }

    #[test]
    fn test_from_parts_clamps_numeral() {
        // Below the month: clamps to its first day.
        assert_eq!(HaabDate::from_parts(0, Month::Pohp), HaabDate::new(0));
        assert_eq!(HaabDate::from_parts(-7, Month::Sip), HaabDate::new(40));
        // One past the month: lands on the first day of the next.
        assert_eq!(HaabDate::from_parts(25, Month::Pohp), HaabDate::new(20));
        // Past the terminal month: folds around to the new year.
        assert_eq!(HaabDate::from_parts(7, Month::Wayeb), HaabDate::new(0));
    }

    #[test]
    fn test_decomposition_at_month_boundaries() {
        let last_of_kumku = HaabDate::new(359);
        assert_eq!(last_of_kumku.month(), Month::Kumku);
        assert_eq!(last_of_kumku.numeral(), 20);

        let first_of_wayeb = HaabDate::new(360);
        assert_eq!(first_of_wayeb.month(), Month::Wayeb);
        assert_eq!(first_of_wayeb.numeral(), 1);
    }

    #[test]
    fn test_round_trip_all_days() {
        for value in 0..HaabDate::CYCLE {
            let date = HaabDate::new(value);
            assert_eq!(
                HaabDate::from_parts(date.numeral(), date.month()).value(),
                value,
                "decomposition must invert construction at {value}"
            );
        }
    }

    #[test]
    fn test_month_days_sum_to_cycle() {
        let total: i64 = Month::ALL.iter().map(|month| month.days()).sum();
        assert_eq!(total, HaabDate::CYCLE);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "5.wo".parse::<HaabDate>().expect("canonical form must parse"),
            HaabDate::new(24)
        );
        assert_eq!(
            " 8 . KUMKU ".parse::<HaabDate>().expect("mixed case with spaces must parse"),
            HaabDate::from_parts(8, Month::Kumku)
        );
        assert_eq!(
            "05.wayeb".parse::<HaabDate>().expect("zero-padded numeral must parse"),
            HaabDate::new(364)
        );
    }

    #[test]
    fn test_parse_rejects_numeral_out_of_range() {
        assert!(matches!(
            "21.pohp".parse::<HaabDate>(),
            Err(ParseError::InvalidNumeral { numeral: 21, max: 20 })
        ));
        // Wayeb only has five days.
        assert!(matches!(
            "6.wayeb".parse::<HaabDate>(),
            Err(ParseError::InvalidNumeral { numeral: 6, max: 5 })
        ));
        assert!(matches!(
            "0.yax".parse::<HaabDate>(),
            Err(ParseError::InvalidNumeral { numeral: 0, max: 20 })
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(matches!("".parse::<HaabDate>(), Err(ParseError::EmptyInput)));
        assert!(matches!("pax".parse::<HaabDate>(), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(
            "5.january".parse::<HaabDate>(),
            Err(ParseError::UnknownMonth(_))
        ));
    }

    #[test]
    fn test_display_parse_round_trip() {
        for value in [0, 24, 305, 347, 360, 364] {
            let date = HaabDate::new(value);
            let reparsed = date.to_string().parse::<HaabDate>().expect("rendered form must parse");
            assert_eq!(date, reparsed);
        }
    }

    #[test]
    fn test_serde_string_format() {
        let date = HaabDate::from_parts(6, Month::Pax);
        let json = serde_json::to_string(&date).expect("serialization must succeed");
        assert_eq!(json, r#""6.pax""#);
        let parsed: HaabDate = serde_json::from_str(&json).expect("deserialization must succeed");
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let result: Result<HaabDate, _> = serde_json::from_str(r#""21.pohp""#);
        assert!(result.is_err());
    }
}
