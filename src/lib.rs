mod consts;
mod cycle;
mod haab;
mod long_count;
mod prelude;
mod round;
mod tzolkin;

pub use consts::*;
pub use cycle::CycleValue;
pub use haab::{HaabDate, Month};
pub use long_count::{LongCountDate, Period};
pub use round::{CalendarRoundDate, CombineError};
pub use tzolkin::{Day, TzolkinDate};

use crate::prelude::*;

/// Error type for parsing the textual date grammars.
///
/// Parsing never panics on malformed input; callers must check the result
/// before using the value.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Unknown Tzolkin day name: {_0}")]
    UnknownDay(String),
    #[display(fmt = "Unknown Haab month name: {_0}")]
    UnknownMonth(String),
    #[display(fmt = "Invalid numeral: {numeral} (must be 1-{max})")]
    InvalidNumeral { numeral: i64, max: i64 },
    #[display(fmt = "Digit {digit} too large for the {place} place (radix {radix})")]
    DigitOutOfRange { digit: i64, place: Period, radix: i64 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Splits a `numeral "." name` component into its parts.
///
/// Whitespace around the separator is tolerated; the name is returned
/// verbatim for the caller's table lookup.
pub(crate) fn split_component(s: &str) -> Result<(i64, &str), ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (numeral, name) = trimmed
        .split_once(COMPONENT_SEPARATOR)
        .ok_or_else(|| ParseError::InvalidFormat(trimmed.to_owned()))?;
    let numeral = numeral
        .trim()
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;

    Ok((numeral, name.trim()))
}

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::{CalendarRoundDate, Day, HaabDate, Month, TzolkinDate};

    /// A Calendar Round from its four labels, which must co-occur.
    pub(crate) fn round(
        tzolkin_numeral: i64,
        day: Day,
        haab_numeral: i64,
        month: Month,
    ) -> CalendarRoundDate {
        CalendarRoundDate::new(
            TzolkinDate::from_parts(tzolkin_numeral, day),
            HaabDate::from_parts(haab_numeral, month),
        )
        .expect("test pair must be a valid Calendar Round combination")
    }
}
