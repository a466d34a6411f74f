/// Number of distinct numerals in the Tzolkin cycle
pub const TZOLKIN_NUMERALS: i64 = 13;

/// Number of named days in the Tzolkin cycle
pub const TZOLKIN_DAYS: i64 = 20;

/// Length of the Tzolkin cycle: 13 numerals x 20 day names (mutually prime)
pub const TZOLKIN_CYCLE: i64 = TZOLKIN_NUMERALS * TZOLKIN_DAYS;

/// Days in each of the first eighteen Haab months
pub const DAYS_PER_MONTH: i64 = 20;

/// Days in the terminal Haab month (Wayeb)
pub const WAYEB_DAYS: i64 = 5;

/// Length of the Haab cycle. Note that 18 * 20 + 5 = 365
pub const HAAB_CYCLE: i64 = 365;

/// Length of the Calendar Round: lcm(260, 365) = 260 * 365 / 5
pub const CALENDAR_ROUND_CYCLE: i64 = 18980;

/// Shared factor of the Tzolkin and Haab cycles: gcd(260, 365)
pub(crate) const SHARED_FACTOR: i64 = 5;

/// Tzolkin cycle with the shared factor divided out: 260 / 5
pub(crate) const TZOLKIN_REDUCED: i64 = 52;

/// Haab cycle with the shared factor divided out: 365 / 5
pub(crate) const HAAB_REDUCED: i64 = 73;

/// Multiplicative inverse of 52 modulo 73 (52 * 66 = 3432 = 47 * 73 + 1)
pub(crate) const TZOLKIN_REDUCED_INVERSE: i64 = 66;

/// Separator between a numeral and its day or month name
pub const COMPONENT_SEPARATOR: char = '.';

/// Separator between Long Count place values
pub const PLACE_SEPARATOR: char = '.';
