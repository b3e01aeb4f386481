mod acceptor;
mod buffer;
mod consts;
mod field;
mod prelude;
mod style;
mod types;

pub use acceptor::{AcceptorFn, date_acceptor};
pub use buffer::{LineBuffer, TextBuffer};
pub use consts::*;
pub use field::{DateField, DoneKey};
pub use style::FieldStyle;
pub use types::{DateError, Day, Month, Year, days_in_month, is_leap_year};

use std::fmt;
use std::str::FromStr;

/// A complete calendar date, valid by construction.
/// The textual form is always the fixed 10-character `YYYY-MM-DD` layout,
/// zero-padded, and formatting then parsing reproduces the value exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

/// Error type for parsing a `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input is not exactly 10 characters.
    #[error("Expected a 10-character YYYY-MM-DD string, found {0} characters")]
    InvalidLength(usize),

    /// A fixed separator offset holds something other than the separator.
    #[error("Expected '-' at offset {0}")]
    BadSeparator(usize),

    /// A date component contains non-digit characters.
    #[error("Non-digit characters in date component: {0:?}")]
    NotNumeric(String),

    /// Components are digits but out of calendar range.
    #[error(transparent)]
    Component(#[from] DateError),
}

impl CalendarDate {
    /// Creates a date from raw components, validating each one (including
    /// month length and leap-year February).
    ///
    /// # Errors
    /// Returns `DateError` for the first out-of-range component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year_t = Year::new(year)?;
        let month_t = Month::new(month)?;
        let day_t = Day::new(day, year, month)?;
        Ok(Self {
            year: year_t,
            month: month_t,
            day: day_t,
        })
    }

    /// Creates a date from already-validated components.
    pub const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Returns the year as u16
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month as u8
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day as u8
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the validated components
    pub const fn parts(&self) -> (Year, Month, Day) {
        (self.year, self.month, self.day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.get(),
            self.month.get(),
            self.day.get()
        )
    }
}

fn numeric_field<T: FromStr>(chars: &[char]) -> Result<T, ParseError> {
    let text: String = chars.iter().collect();
    if !chars.iter().all(char::is_ascii_digit) {
        return Err(ParseError::NotNumeric(text));
    }
    text.parse().map_err(|_| ParseError::NotNumeric(text))
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Strict parse of the `YYYY-MM-DD` layout. No trimming, no partial
    /// results: anything other than a real calendar date in exactly that
    /// shape is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != DATE_LENGTH {
            return Err(ParseError::InvalidLength(chars.len()));
        }
        for offset in SEPARATOR_OFFSETS {
            if chars[offset] != SEPARATOR {
                return Err(ParseError::BadSeparator(offset));
            }
        }

        let year: u16 = numeric_field(&chars[0..4])?;
        let month: u8 = numeric_field(&chars[5..7])?;
        let day: u8 = numeric_field(&chars[8..10])?;

        Ok(Self::new(year, month, day)?)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
