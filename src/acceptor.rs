//! Per-keystroke acceptance policy for the date field.
//!
//! The policy is a pure predicate over the prospective buffer content: the
//! caller concatenates text-before-cursor, the incoming character, and
//! text-after-cursor, and asks whether that candidate is a legal partial or
//! complete `YYYY-MM-DD` string. Each buffer offset has a fixed rule, so the
//! check is sound for edits anywhere in the buffer, not only appends.

use crate::CalendarDate;
use crate::consts::{DATE_LENGTH, DAY_TENS_OFFSET, MONTH_TENS_OFFSET, SEPARATOR, SEPARATOR_OFFSETS};

/// Signature of the acceptance predicate. `ch` is the single incoming
/// character; `None` marks a bulk insertion (paste), which the default
/// policy never accepts.
pub type AcceptorFn = dyn Fn(&str, Option<char>) -> bool;

/// What a given buffer offset may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// Any ASCII digit (year digits, second month/day digits)
    Digit,
    /// The separator character
    Separator,
    /// First month digit: months run 01-12, so only 0 or 1
    MonthTens,
    /// First day digit: days run 01-31, so only 0-3
    DayTens,
}

const fn slot_at(offset: usize) -> Option<Slot> {
    if offset >= DATE_LENGTH {
        None
    } else if offset == SEPARATOR_OFFSETS[0] || offset == SEPARATOR_OFFSETS[1] {
        Some(Slot::Separator)
    } else if offset == MONTH_TENS_OFFSET {
        Some(Slot::MonthTens)
    } else if offset == DAY_TENS_OFFSET {
        Some(Slot::DayTens)
    } else {
        Some(Slot::Digit)
    }
}

impl Slot {
    const fn admits(self, ch: char) -> bool {
        match self {
            Self::Digit => ch.is_ascii_digit(),
            Self::Separator => ch == SEPARATOR,
            Self::MonthTens => matches!(ch, '0' | '1'),
            Self::DayTens => matches!(ch, '0'..='3'),
        }
    }
}

/// Decides whether `text`, the prospective buffer content after inserting
/// `ch`, is a legal partial or complete date string.
///
/// Rejects when:
/// - `ch` is absent (bulk insertion) or is neither an ASCII digit nor the
///   separator;
/// - the candidate is longer than 10 characters;
/// - any character violates the rule for its offset;
/// - a 10-character candidate is not a real calendar date (month lengths
///   and leap years are only checked once the string is complete).
pub fn date_acceptor(text: &str, ch: Option<char>) -> bool {
    let Some(ch) = ch else {
        return false;
    };
    if !ch.is_ascii_digit() && ch != SEPARATOR {
        return false;
    }

    let mut length = 0;
    for (offset, present) in text.chars().enumerate() {
        match slot_at(offset) {
            Some(slot) if slot.admits(present) => {}
            _ => return false,
        }
        length = offset + 1;
    }

    if length == DATE_LENGTH && text.parse::<CalendarDate>().is_err() {
        return false;
    }
    true
}
