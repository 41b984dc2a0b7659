//! Short date line shown under the time, e.g. `Thurs. July 31`.
//!
//! The line is composed from two static abbreviation tables plus the day
//! number. It is bounded to a character limit so it always fits the space
//! reserved for it; text that would overflow is cut at a character boundary
//! and finished with an ellipsis.

use super::phrase::PhraseError;
use std::fmt;

/// Default number of characters the date line may occupy.
pub const DATE_LIMIT: usize = 32;

const ELLIPSIS: char = '…';

static DAYS: [&str; 7] = ["Sun.", "Mon.", "Tues.", "Wed.", "Thurs.", "Fri.", "Sat."];

static MONTHS: [&str; 12] = ["Jan.", "Feb.", "Mar.", "Apr.", "May", "June", "July", "Aug.", "Sep.", "Oct.", "Nov.", "Dec."];

/// A formatted, length-bounded date line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DatePhrase(String);

impl DatePhrase {
    /// Formats the date with the default [`DATE_LIMIT`].
    ///
    /// `weekday` counts from Sunday (0) and `month` from January (0).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textwatch::libs::date::DatePhrase;
    ///
    /// assert_eq!(DatePhrase::new(4, 6, 31).unwrap().as_str(), "Thurs. July 31");
    /// ```
    pub fn new(weekday: u32, month: u32, day: u32) -> Result<Self, PhraseError> {
        Self::with_limit(weekday, month, day, DATE_LIMIT)
    }

    /// Formats the date, truncating it to at most `limit` characters.
    ///
    /// # Errors
    ///
    /// Returns a [`PhraseError`] naming the first field that is out of range.
    pub fn with_limit(weekday: u32, month: u32, day: u32, limit: usize) -> Result<Self, PhraseError> {
        let day_text = DAYS.get(weekday as usize).ok_or(PhraseError::WeekdayOutOfRange(weekday))?;
        let month_text = MONTHS.get(month as usize).ok_or(PhraseError::MonthOutOfRange(month))?;
        if !(1..=31).contains(&day) {
            return Err(PhraseError::DayOutOfRange(day));
        }

        let text = format!("{} {} {}", day_text, month_text, day);
        Ok(Self(truncate(&text, limit)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DatePhrase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cuts `text` to at most `limit` characters.
///
/// When the text is cut, its last kept character is replaced by an ellipsis so
/// that the result is still exactly `limit` characters long.
///
/// # Examples
///
/// ```rust
/// use textwatch::libs::date::truncate;
///
/// assert_eq!(truncate("Thurs. July 31", 32), "Thurs. July 31");
/// assert_eq!(truncate("Thurs. July 31", 8), "Thurs. …");
/// assert_eq!(truncate("Thurs. July 31", 0), "");
/// ```
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    if limit == 0 {
        return String::new();
    }

    let mut cut: String = text.chars().take(limit - 1).collect();
    cut.push(ELLIPSIS);
    cut
}
