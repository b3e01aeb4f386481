/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const SEPARATOR: char = '-';

/// Length of a completed `YYYY-MM-DD` string in characters
pub const DATE_LENGTH: usize = 10;

/// Buffer offsets that must hold the separator character
pub const SEPARATOR_OFFSETS: [usize; 2] = [4, 7];

/// Buffer offset of the first month digit (restricted to 0 or 1)
pub const MONTH_TENS_OFFSET: usize = 5;

/// Buffer offset of the first day digit (restricted to 0..=3)
pub const DAY_TENS_OFFSET: usize = 8;

/// Screen width of the input area in cells (one wider than the text so the
/// cursor has room after a completed date)
pub const FIELD_WIDTH: u16 = 11;
