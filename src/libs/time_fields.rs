//! Per-minute time snapshot consumed by the watch face.

use super::phrase::PhraseError;
use chrono::{Datelike, Timelike};

/// The calendar fields the face needs, captured once per minute.
///
/// Fields are validated on construction, so a `TimeFields` value can always
/// be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeFields {
    hour: u32,
    minute: u32,
    weekday: u32,
    month: u32,
    day: u32,
}

impl TimeFields {
    /// Builds a snapshot from raw fields.
    ///
    /// `hour` is 0..=23, `minute` 0..=59, `weekday` 0..=6 starting on Sunday,
    /// `month` 0..=11 starting in January and `day` 1..=31.
    pub fn new(hour: u32, minute: u32, weekday: u32, month: u32, day: u32) -> Result<Self, PhraseError> {
        if hour > 23 {
            return Err(PhraseError::ClockHourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(PhraseError::MinuteOutOfRange(minute));
        }
        if weekday > 6 {
            return Err(PhraseError::WeekdayOutOfRange(weekday));
        }
        if month > 11 {
            return Err(PhraseError::MonthOutOfRange(month));
        }
        if !(1..=31).contains(&day) {
            return Err(PhraseError::DayOutOfRange(day));
        }

        Ok(Self { hour, minute, weekday, month, day })
    }

    /// Captures the fields of any chrono date-time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use textwatch::libs::time_fields::TimeFields;
    ///
    /// let at = NaiveDate::from_ymd_opt(2014, 7, 31).unwrap().and_hms_opt(13, 45, 10).unwrap();
    /// let fields = TimeFields::from_datetime(&at);
    /// assert_eq!((fields.hour(), fields.minute()), (13, 45));
    /// assert_eq!((fields.weekday(), fields.month(), fields.day()), (4, 6, 31));
    /// ```
    pub fn from_datetime<T: Datelike + Timelike>(at: &T) -> Self {
        Self {
            hour: at.hour(),
            minute: at.minute(),
            weekday: at.weekday().num_days_from_sunday(),
            month: at.month0(),
            day: at.day(),
        }
    }

    /// Captures the current local time.
    pub fn now() -> Self {
        Self::from_datetime(&chrono::Local::now())
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn weekday(&self) -> u32 {
        self.weekday
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}
