#[cfg(test)]
mod tests {
    use textwatch::libs::phrase::{hour_text, minute_text, to_twelve_hour, MinutePhrase, PhraseError};
    use textwatch::libs::time_fields::TimeFields;

    const HOURS: [&str; 13] = [
        "twelve", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven", "twelve",
    ];

    #[test]
    fn test_hour_words_match_reference() {
        for (hour, expected) in HOURS.iter().enumerate() {
            let word = hour_text(hour as u32).unwrap();
            assert_eq!(word, *expected, "hour {}", hour);
            assert!(!word.is_empty());
            assert!(!word.contains(' '), "hour {} should be one token", hour);
        }
    }

    #[test]
    fn test_hour_zero_is_twelve() {
        assert_eq!(hour_text(0).unwrap(), "twelve");
        assert_eq!(hour_text(to_twelve_hour(0)).unwrap(), "twelve");
        assert_eq!(hour_text(to_twelve_hour(12)).unwrap(), "twelve");
    }

    #[test]
    fn test_afternoon_hours_are_reduced() {
        assert_eq!(to_twelve_hour(13), 1);
        assert_eq!(hour_text(to_twelve_hour(13)).unwrap(), "one");
        assert_eq!(hour_text(to_twelve_hour(23)).unwrap(), "eleven");
        assert_eq!(to_twelve_hour(11), 11);
    }

    #[test]
    fn test_every_24h_hour_has_a_word() {
        for hour in 0..24 {
            assert!(hour_text(to_twelve_hour(hour)).is_ok(), "hour {}", hour);
        }
    }

    #[test]
    fn test_hour_out_of_range_is_rejected() {
        assert_eq!(hour_text(13), Err(PhraseError::HourOutOfRange(13)));
        assert_eq!(hour_text(24), Err(PhraseError::HourOutOfRange(24)));
        assert_eq!(to_twelve_hour(24), 24);
    }

    #[test]
    fn test_minute_reference_table() {
        let cases = [
            (0, "o'clock", ""),
            (1, "oh", "one"),
            (5, "oh", "five"),
            (9, "oh", "nine"),
            (10, "ten", ""),
            (11, "eleven", ""),
            (12, "twelve", ""),
            (13, "thirteen", ""),
            (14, "four", "teen"),
            (15, "fifteen", ""),
            (16, "sixteen", ""),
            (17, "seven", "teen"),
            (18, "eight", "teen"),
            (19, "nine", "teen"),
            (20, "twenty", ""),
            (21, "twenty", "one"),
            (30, "thirty", ""),
            (45, "forty", "five"),
            (50, "fifty", ""),
            (59, "fifty", "nine"),
        ];

        for (minute, line_one, line_two) in cases {
            assert_eq!(minute_text(minute).unwrap(), MinutePhrase { line_one, line_two }, "minute {}", minute);
        }
    }

    #[test]
    fn test_line_one_never_empty() {
        for minute in 0..60 {
            assert!(!minute_text(minute).unwrap().line_one.is_empty(), "minute {}", minute);
        }
    }

    #[test]
    fn test_line_two_empty_exactly_for_single_words() {
        let single: [u32; 11] = [0, 10, 11, 12, 13, 15, 16, 20, 30, 40, 50];
        for minute in 0..60 {
            let phrase = minute_text(minute).unwrap();
            assert_eq!(phrase.is_single_line(), single.contains(&minute), "minute {}", minute);
            assert_eq!(phrase.line_two.is_empty(), phrase.is_single_line());
        }
    }

    #[test]
    fn test_minute_text_is_deterministic() {
        for minute in 0..60 {
            assert_eq!(minute_text(minute).unwrap(), minute_text(minute).unwrap());
        }
    }

    #[test]
    fn test_minute_out_of_range_is_rejected() {
        assert_eq!(minute_text(60), Err(PhraseError::MinuteOutOfRange(60)));
        assert_eq!(minute_text(99), Err(PhraseError::MinuteOutOfRange(99)));
    }

    #[test]
    fn test_time_fields_take_a_24_hour_clock() {
        assert!(TimeFields::new(23, 59, 6, 11, 31).is_ok());
        assert!(TimeFields::new(13, 0, 0, 0, 1).is_ok());

        let err = TimeFields::new(24, 0, 0, 0, 1).unwrap_err();
        assert_eq!(err, PhraseError::ClockHourOutOfRange(24));
        assert_eq!(err.to_string(), "hour of day 24 is outside 0..=23");

        assert_eq!(TimeFields::new(9, 60, 0, 0, 1), Err(PhraseError::MinuteOutOfRange(60)));
        assert_eq!(TimeFields::new(9, 0, 7, 0, 1), Err(PhraseError::WeekdayOutOfRange(7)));
        assert_eq!(TimeFields::new(9, 0, 0, 12, 1), Err(PhraseError::MonthOutOfRange(12)));
        assert_eq!(TimeFields::new(9, 0, 0, 0, 0), Err(PhraseError::DayOutOfRange(0)));
    }
}
