use super::face::{DisplaySink, FaceText, Slot};
use super::phrase::{hour_text, minute_text, to_twelve_hour, PhraseError};
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints every minute of the hour with both of its lines.
    pub fn phrases() -> Result<(), PhraseError> {
        let mut table = Table::new();

        table.add_row(row!["MINUTE", "LINE ONE", "LINE TWO"]);
        for minute in 0..60 {
            let phrase = minute_text(minute)?;
            table.add_row(row![format!(":{:02}", minute), phrase.line_one, phrase.line_two]);
        }
        table.printstd();

        Ok(())
    }

    /// Prints every hour of the day next to its word.
    pub fn hours() -> Result<(), PhraseError> {
        let mut table = Table::new();

        table.add_row(row!["HOUR", "WORD"]);
        for hour in 0..24 {
            let word = hour_text(to_twelve_hour(hour))?;
            table.add_row(row![format!("{:02}", hour), word]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders the face as plain lines, skipping an empty second minute line.
    pub fn face_lines(text: &FaceText) -> Vec<String> {
        let mut lines = vec![text.hour.clone(), text.minute_line_one.clone()];
        if !text.minute_line_two.is_empty() {
            lines.push(text.minute_line_two.clone());
        }
        let footer = if text.temperature.is_empty() {
            text.date.clone()
        } else {
            format!("{}  {}", text.date, text.temperature)
        };
        lines.push(footer);
        lines
    }

    pub fn face(text: &FaceText) {
        let mut table = Table::new();
        for line in Self::face_lines(text) {
            table.add_row(row![line]);
        }
        table.printstd();
    }
}

/// Display sink printing the whole face to stdout after every change.
#[derive(Debug, Default)]
pub struct TerminalDisplay {
    text: FaceText,
    dirty: bool,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySink for TerminalDisplay {
    fn set_text(&mut self, slot: Slot, text: &str) {
        let current = self.text.slot_mut(slot);
        if current.as_str() != text {
            *current = text.to_string();
            self.dirty = true;
        }
    }

    fn flush(&mut self) {
        if self.dirty {
            View::face(&self.text);
            self.dirty = false;
        }
    }
}
