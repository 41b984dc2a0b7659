//! Time-to-words conversion for the watch face.
//!
//! Turns an hour and a minute into the spoken English shown on the face.
//! The hour is a single word on the first line; the minute spreads over two
//! lines so that long words can be split ("four" / "teen", "forty" / "five").
//!
//! ## Examples
//!
//! ```rust
//! use textwatch::libs::phrase::{hour_text, minute_text, to_twelve_hour};
//!
//! assert_eq!(hour_text(to_twelve_hour(13)).unwrap(), "one");
//!
//! let minute = minute_text(14).unwrap();
//! assert_eq!(minute.line_one, "four");
//! assert_eq!(minute.line_two, "teen");
//! ```
//!
//! ## Lookup Tables
//!
//! All words come from three static tables:
//!
//! - `ONES`: units, index 0 is the empty word used for round tens
//! - `TEENS`: 10 to 19, each entry already split into its two display lines
//! - `TENS`: tens words indexed by `minute / 10`
//!
//! Index 1 of `TENS` is a dead slot. Minutes 10 to 19 never reach the tens
//! lookup because the teens branch handles them first, and [`tens_word`]
//! refuses that index outright instead of yielding an empty word.

use thiserror::Error;

/// Errors raised when a value falls outside the domain of a lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PhraseError {
    #[error("hour {0} is outside 0..=12, convert it with to_twelve_hour first")]
    HourOutOfRange(u32),
    #[error("hour of day {0} is outside 0..=23")]
    ClockHourOutOfRange(u32),
    #[error("minute {0} is outside 0..=59")]
    MinuteOutOfRange(u32),
    #[error("tens digit {0} has no tens word")]
    NoTensWord(u32),
    #[error("weekday {0} is outside 0..=6")]
    WeekdayOutOfRange(u32),
    #[error("month {0} is outside 0..=11")]
    MonthOutOfRange(u32),
    #[error("day of month {0} is outside 1..=31")]
    DayOutOfRange(u32),
}

/// One entry of the teens table, already split into display lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TeenWord {
    line_one: &'static str,
    line_two: &'static str,
}

const fn whole(word: &'static str) -> TeenWord {
    TeenWord { line_one: word, line_two: "" }
}

const fn split(stem: &'static str) -> TeenWord {
    TeenWord { line_one: stem, line_two: "teen" }
}

static ONES: [&str; 10] = ["", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];

// Long teens don't fit on one line, so they break before "teen".
static TEENS: [TeenWord; 10] = [
    whole("ten"),
    whole("eleven"),
    whole("twelve"),
    whole("thirteen"),
    split("four"),
    whole("fifteen"),
    whole("sixteen"),
    split("seven"),
    split("eight"),
    split("nine"),
];

// Index 1 is never read: 10..=19 goes through TEENS.
static TENS: [&str; 6] = ["oh", "", "twenty", "thirty", "forty", "fifty"];

const OCLOCK: &str = "o'clock";

/// Two-line rendering of a minute value.
///
/// `line_two` stays empty unless the minute needs a compound word, that is a
/// split teen or a tens word followed by a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinutePhrase {
    pub line_one: &'static str,
    pub line_two: &'static str,
}

impl MinutePhrase {
    /// Returns `true` when the phrase occupies a single line.
    pub fn is_single_line(&self) -> bool {
        self.line_two.is_empty()
    }
}

/// Reduces a 24-hour value to the 12-hour value expected by [`hour_text`].
///
/// Hours from 13 upwards lose 12; 0 and 12 are passed through unchanged since
/// both read as "twelve". Values above 23 are returned as they are and will be
/// rejected by [`hour_text`].
pub fn to_twelve_hour(hour: u32) -> u32 {
    if (13..=23).contains(&hour) {
        hour - 12
    } else {
        hour
    }
}

/// Returns the spoken word for a 12-hour value.
///
/// # Errors
///
/// Returns [`PhraseError::HourOutOfRange`] for values above 12.
///
/// # Examples
///
/// ```rust
/// use textwatch::libs::phrase::hour_text;
///
/// assert_eq!(hour_text(0).unwrap(), "twelve");
/// assert_eq!(hour_text(7).unwrap(), "seven");
/// assert_eq!(hour_text(11).unwrap(), "eleven");
/// assert!(hour_text(13).is_err());
/// ```
pub fn hour_text(hour: u32) -> Result<&'static str, PhraseError> {
    match hour {
        0 => Ok(TEENS[2].line_one),
        1..=9 => Ok(ONES[hour as usize]),
        10..=12 => Ok(TEENS[(hour - 10) as usize].line_one),
        _ => Err(PhraseError::HourOutOfRange(hour)),
    }
}

/// Returns the two-line phrase for a minute value.
///
/// # Errors
///
/// Returns [`PhraseError::MinuteOutOfRange`] for values above 59.
///
/// # Examples
///
/// ```rust
/// use textwatch::libs::phrase::{minute_text, MinutePhrase};
///
/// assert_eq!(minute_text(0).unwrap(), MinutePhrase { line_one: "o'clock", line_two: "" });
/// assert_eq!(minute_text(5).unwrap(), MinutePhrase { line_one: "oh", line_two: "five" });
/// assert_eq!(minute_text(45).unwrap(), MinutePhrase { line_one: "forty", line_two: "five" });
/// ```
pub fn minute_text(minute: u32) -> Result<MinutePhrase, PhraseError> {
    if minute > 59 {
        return Err(PhraseError::MinuteOutOfRange(minute));
    }

    if minute == 0 {
        return Ok(MinutePhrase { line_one: OCLOCK, line_two: "" });
    }

    if (10..=19).contains(&minute) {
        let teen = TEENS[(minute - 10) as usize];
        return Ok(MinutePhrase {
            line_one: teen.line_one,
            line_two: teen.line_two,
        });
    }

    Ok(MinutePhrase {
        line_one: tens_word(minute / 10)?,
        line_two: ONES[(minute % 10) as usize],
    })
}

/// Looks up the tens word for a tens digit.
///
/// Digit 0 gives the "oh" placeholder used for minutes below ten. Digit 1 is
/// the dead slot of the table and is refused, as is anything past fifty.
fn tens_word(digit: u32) -> Result<&'static str, PhraseError> {
    match digit {
        0 | 2..=5 => Ok(TENS[digit as usize]),
        _ => Err(PhraseError::NoTensWord(digit)),
    }
}
