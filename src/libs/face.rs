//! The watch face: owns what is on screen and decides what changes.
//!
//! [`WatchFace`] keeps the last formatted string for every text slot and
//! pushes updates into a [`DisplaySink`]. Two kinds of input arrive:
//!
//! - **Minute ticks** re-render the hour, both minute lines and the date, and
//!   tell the caller whether a weather refresh is due.
//! - **Inbox events** from the companion update the temperature.
//!
//! Anything that goes wrong on the message link (dropped messages, failed
//! sends, a reply without a usable reading) is logged and leaves the current
//! display untouched. A stale temperature is better than a blank one.

use super::channel::{ChannelError, DropReason, InboxEvent};
use super::date::{DatePhrase, DATE_LIMIT};
use super::phrase::{hour_text, minute_text, to_twelve_hour, PhraseError};
use super::protocol::{Dictionary, MessageKey};
use super::schedule::FetchSchedule;
use super::temperature::temperature_text;
use super::time_fields::TimeFields;

/// The independent text areas of the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Hour,
    MinuteLineOne,
    MinuteLineTwo,
    Date,
    Temperature,
}

impl Slot {
    pub const ALL: [Slot; 5] = [Slot::Hour, Slot::MinuteLineOne, Slot::MinuteLineTwo, Slot::Date, Slot::Temperature];
}

/// Where rendered text ends up.
pub trait DisplaySink {
    /// Replaces the text of one slot.
    fn set_text(&mut self, slot: Slot, text: &str);

    /// Called once after a batch of `set_text` calls.
    fn flush(&mut self) {}
}

/// What the caller has to do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    pub fetch_weather: bool,
}

/// Snapshot of everything the face currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FaceText {
    pub hour: String,
    pub minute_line_one: String,
    pub minute_line_two: String,
    pub date: String,
    pub temperature: String,
}

impl FaceText {
    pub fn get(&self, slot: Slot) -> &str {
        match slot {
            Slot::Hour => &self.hour,
            Slot::MinuteLineOne => &self.minute_line_one,
            Slot::MinuteLineTwo => &self.minute_line_two,
            Slot::Date => &self.date,
            Slot::Temperature => &self.temperature,
        }
    }

    pub(crate) fn slot_mut(&mut self, slot: Slot) -> &mut String {
        match slot {
            Slot::Hour => &mut self.hour,
            Slot::MinuteLineOne => &mut self.minute_line_one,
            Slot::MinuteLineTwo => &mut self.minute_line_two,
            Slot::Date => &mut self.date,
            Slot::Temperature => &mut self.temperature,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WatchFace {
    text: FaceText,
    city: Option<String>,
    schedule: FetchSchedule,
    date_limit: usize,
}

impl Default for WatchFace {
    fn default() -> Self {
        Self::new(FetchSchedule::default(), DATE_LIMIT)
    }
}

impl WatchFace {
    pub fn new(schedule: FetchSchedule, date_limit: usize) -> Self {
        Self {
            text: FaceText::default(),
            city: None,
            schedule,
            date_limit,
        }
    }

    pub fn text(&self) -> &FaceText {
        &self.text
    }

    pub fn schedule(&self) -> FetchSchedule {
        self.schedule
    }

    /// City of the last reading. Received but not shown.
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Renders a new minute.
    pub fn on_tick<S: DisplaySink + ?Sized>(&mut self, time: &TimeFields, sink: &mut S) -> Result<TickOutcome, PhraseError> {
        let hour = hour_text(to_twelve_hour(time.hour()))?;
        let minute = minute_text(time.minute())?;
        let date = DatePhrase::with_limit(time.weekday(), time.month(), time.day(), self.date_limit)?;

        self.update(Slot::Hour, hour, sink);
        self.update(Slot::MinuteLineOne, minute.line_one, sink);
        self.update(Slot::MinuteLineTwo, minute.line_two, sink);
        self.update(Slot::Date, date.as_str(), sink);
        sink.flush();

        tracing::debug!(hour, line_one = minute.line_one, line_two = minute.line_two, date = %date, "rendered minute");

        Ok(TickOutcome {
            fetch_weather: self.schedule.is_due(time.minute()),
        })
    }

    /// Applies an event read from the companion link.
    pub fn on_inbox<S: DisplaySink + ?Sized>(&mut self, event: InboxEvent, sink: &mut S) {
        match event {
            InboxEvent::Received(dict) => self.on_message(&dict, sink),
            InboxEvent::Dropped(DropReason::MailboxFull) => {
                tracing::warn!("incoming message dropped: mailbox full, keeping current display");
            }
            InboxEvent::Dropped(DropReason::Malformed(e)) => {
                tracing::warn!(error = %e, "incoming message dropped: malformed, keeping current display");
            }
        }
    }

    /// Records a failed send. The display is left as it is.
    pub fn on_send_failed(&self, error: &ChannelError) {
        tracing::warn!(error = %error, "outgoing message failed, keeping current display");
    }

    fn on_message<S: DisplaySink + ?Sized>(&mut self, dict: &Dictionary, sink: &mut S) {
        if let Some(city) = dict.city() {
            self.city = Some(city.to_string());
        }

        match dict.temperature() {
            Some(celsius) => {
                let text = temperature_text(celsius);
                self.update(Slot::Temperature, &text, sink);
                sink.flush();
                tracing::debug!(celsius, city = ?self.city, "temperature updated");
            }
            None if dict.contains(MessageKey::Temperature) => {
                tracing::warn!(value = ?dict.get(MessageKey::Temperature), "temperature is not a number, keeping last reading");
            }
            None => {
                tracing::debug!(tuples = dict.len(), "message without temperature ignored");
            }
        }
    }

    fn update<S: DisplaySink + ?Sized>(&mut self, slot: Slot, text: &str, sink: &mut S) {
        *self.text.slot_mut(slot) = text.to_string();
        sink.set_text(slot, text);
    }
}

/// A sink that only remembers the last text of every slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    pub text: FaceText,
    pub writes: usize,
    pub flushes: usize,
}

impl DisplaySink for MemorySink {
    fn set_text(&mut self, slot: Slot, text: &str) {
        *self.text.slot_mut(slot) = text.to_string();
        self.writes += 1;
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}
