#[cfg(test)]
mod tests {
    use textwatch::libs::date::{truncate, DatePhrase, DATE_LIMIT};
    use textwatch::libs::phrase::PhraseError;

    #[test]
    fn test_reference_date() {
        let date = DatePhrase::new(4, 6, 31).unwrap();
        assert_eq!(date.as_str(), "Thurs. July 31");
        assert_eq!(date.to_string(), "Thurs. July 31");
    }

    #[test]
    fn test_abbreviations() {
        assert_eq!(DatePhrase::new(0, 0, 1).unwrap().as_str(), "Sun. Jan. 1");
        assert_eq!(DatePhrase::new(6, 4, 9).unwrap().as_str(), "Sat. May 9");
        assert_eq!(DatePhrase::new(2, 5, 17).unwrap().as_str(), "Tues. June 17");
        assert_eq!(DatePhrase::new(3, 11, 25).unwrap().as_str(), "Wed. Dec. 25");
    }

    #[test]
    fn test_every_valid_date_fits_default_limit() {
        for weekday in 0..7 {
            for month in 0..12 {
                for day in 1..=31 {
                    let date = DatePhrase::new(weekday, month, day).unwrap();
                    assert!(date.as_str().chars().count() <= DATE_LIMIT);
                    assert!(!date.as_str().ends_with('…'));
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_fields() {
        assert_eq!(DatePhrase::new(7, 0, 1), Err(PhraseError::WeekdayOutOfRange(7)));
        assert_eq!(DatePhrase::new(0, 12, 1), Err(PhraseError::MonthOutOfRange(12)));
        assert_eq!(DatePhrase::new(0, 0, 0), Err(PhraseError::DayOutOfRange(0)));
        assert_eq!(DatePhrase::new(0, 0, 32), Err(PhraseError::DayOutOfRange(32)));
    }

    #[test]
    fn test_truncation_with_ellipsis() {
        let date = DatePhrase::with_limit(4, 6, 31, 10).unwrap();
        assert_eq!(date.as_str(), "Thurs. Ju…");
        assert_eq!(date.as_str().chars().count(), 10);

        let date = DatePhrase::with_limit(4, 6, 31, 14).unwrap();
        assert_eq!(date.as_str(), "Thurs. July 31");

        let date = DatePhrase::with_limit(4, 6, 31, 1).unwrap();
        assert_eq!(date.as_str(), "…");

        let date = DatePhrase::with_limit(4, 6, 31, 0).unwrap();
        assert_eq!(date.as_str(), "");
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("21°C and sunny", 5), "21°C…");
        assert_eq!(truncate("", 3), "");
        assert_eq!(truncate("abc", 3), "abc");
    }
}
