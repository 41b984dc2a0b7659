#[cfg(test)]
mod tests {
    use textwatch::libs::channel::{ChannelError, DropReason, InboxEvent};
    use textwatch::libs::companion::unavailable_reply;
    use textwatch::libs::face::{DisplaySink, MemorySink, Slot, WatchFace};
    use textwatch::libs::protocol::{Dictionary, MessageKey, ProtocolError, TupleValue};
    use textwatch::libs::schedule::FetchSchedule;
    use textwatch::libs::time_fields::TimeFields;

    /// Records every write in order.
    #[derive(Default)]
    struct LogSink {
        writes: Vec<(Slot, String)>,
    }

    impl DisplaySink for LogSink {
        fn set_text(&mut self, slot: Slot, text: &str) {
            self.writes.push((slot, text.to_string()));
        }
    }

    fn at(hour: u32, minute: u32) -> TimeFields {
        TimeFields::new(hour, minute, 4, 6, 31).unwrap()
    }

    #[test]
    fn test_tick_renders_all_time_slots() {
        let mut face = WatchFace::default();
        let mut sink = MemorySink::default();

        face.on_tick(&at(12, 45), &mut sink).unwrap();

        assert_eq!(sink.text.hour, "twelve");
        assert_eq!(sink.text.minute_line_one, "forty");
        assert_eq!(sink.text.minute_line_two, "five");
        assert_eq!(sink.text.date, "Thurs. July 31");
        assert_eq!(sink.text.temperature, "");
        assert_eq!(sink.writes, 4);
        assert_eq!(sink.flushes, 1);
        assert_eq!(face.text(), &sink.text);
        for slot in Slot::ALL {
            assert_eq!(face.text().get(slot), sink.text.get(slot));
        }
    }

    #[test]
    fn test_tick_writes_slots_in_order() {
        let mut face = WatchFace::default();
        let mut sink = LogSink::default();

        face.on_tick(&at(0, 0), &mut sink).unwrap();

        let slots: Vec<Slot> = sink.writes.iter().map(|(slot, _)| *slot).collect();
        assert_eq!(slots, vec![Slot::Hour, Slot::MinuteLineOne, Slot::MinuteLineTwo, Slot::Date]);
        assert_eq!(sink.writes[0].1, "twelve");
        assert_eq!(sink.writes[1].1, "o'clock");
        assert_eq!(sink.writes[2].1, "");
    }

    #[test]
    fn test_second_line_is_cleared() {
        let mut face = WatchFace::default();
        let mut sink = MemorySink::default();

        face.on_tick(&at(9, 19), &mut sink).unwrap();
        assert_eq!(sink.text.minute_line_two, "teen");

        face.on_tick(&at(9, 20), &mut sink).unwrap();
        assert_eq!(sink.text.minute_line_one, "twenty");
        assert_eq!(sink.text.minute_line_two, "");
    }

    #[test]
    fn test_tick_outcome_follows_schedule() {
        let mut face = WatchFace::default();
        let mut sink = MemorySink::default();

        for minute in 0..60 {
            let outcome = face.on_tick(&at(15, minute), &mut sink).unwrap();
            assert_eq!(outcome.fetch_weather, minute % 30 == 0, "minute {}", minute);
        }
    }

    #[test]
    fn test_custom_schedule_and_date_limit() {
        let mut face = WatchFace::new(FetchSchedule::new(10), 6);
        let mut sink = MemorySink::default();

        let outcome = face.on_tick(&at(15, 40), &mut sink).unwrap();
        assert!(outcome.fetch_weather);
        assert_eq!(sink.text.date, "Thurs…");
    }

    #[test]
    fn test_temperature_update() {
        let mut face = WatchFace::default();
        let mut sink = MemorySink::default();

        face.on_inbox(InboxEvent::Received(Dictionary::weather_reply(21, "Paris")), &mut sink);

        assert_eq!(sink.text.temperature, "21°C");
        assert_eq!(face.city(), Some("Paris"));
    }

    #[test]
    fn test_negative_temperature() {
        let mut face = WatchFace::default();
        let mut sink = MemorySink::default();

        face.on_inbox(InboxEvent::Received(Dictionary::weather_reply(-3, "Riga")), &mut sink);

        assert_eq!(sink.text.temperature, "-3°C");
    }

    #[test]
    fn test_unavailable_reading_keeps_last_value() {
        let mut face = WatchFace::default();
        let mut sink = MemorySink::default();

        face.on_inbox(InboxEvent::Received(Dictionary::weather_reply(8, "Kyiv")), &mut sink);
        face.on_inbox(InboxEvent::Received(unavailable_reply()), &mut sink);

        assert_eq!(sink.text.temperature, "8°C");
        assert_eq!(face.text().temperature, "8°C");
        assert_eq!(face.city(), Some("Location Unavailable"));
    }

    #[test]
    fn test_message_without_temperature_changes_nothing() {
        let mut face = WatchFace::default();
        let mut sink = MemorySink::default();

        let city_only = Dictionary::new().with(MessageKey::City, TupleValue::CString("Porto".to_string()));
        face.on_inbox(InboxEvent::Received(city_only), &mut sink);

        assert_eq!(sink.writes, 0);
        assert_eq!(face.city(), Some("Porto"));
    }

    #[test]
    fn test_drops_and_failures_keep_display() {
        let mut face = WatchFace::default();
        let mut sink = MemorySink::default();

        face.on_tick(&at(7, 5), &mut sink).unwrap();
        face.on_inbox(InboxEvent::Received(Dictionary::weather_reply(15, "Nice")), &mut sink);
        let before = face.text().clone();

        face.on_inbox(InboxEvent::Dropped(DropReason::MailboxFull), &mut sink);
        face.on_inbox(InboxEvent::Dropped(DropReason::Malformed(ProtocolError::TrailingBytes(2))), &mut sink);
        face.on_send_failed(&ChannelError::Closed);

        assert_eq!(face.text(), &before);
        assert_eq!(sink.text, before);
    }

    #[test]
    fn test_tick_does_not_touch_temperature() {
        let mut face = WatchFace::default();
        let mut sink = LogSink::default();

        face.on_inbox(InboxEvent::Received(Dictionary::weather_reply(30, "Rome")), &mut sink);
        face.on_tick(&at(18, 30), &mut sink).unwrap();

        let temperature_writes = sink.writes.iter().filter(|(slot, _)| *slot == Slot::Temperature).count();
        assert_eq!(temperature_writes, 1);
        assert_eq!(face.text().temperature, "30°C");
    }
}
