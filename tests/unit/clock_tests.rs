/*!
 * Tests for the time-to-words translator
 */

use talking_clock::{ClockTime, Meridiem, ParseError, translate, translate_hour, translate_minutes};

use crate::common::REFERENCE_TIMES;

/// Test the reference sentences end to end
#[test]
fn test_translate_withReferenceTimes_shouldMatchExpectedSentences() {
    for (input, expected) in REFERENCE_TIMES {
        assert_eq!(translate(input).unwrap(), expected, "input {}", input);
    }
}

#[test]
fn test_translate_withOhMinutes_shouldSayOh() {
    assert_eq!(translate("06:05").unwrap(), "It's six oh five am");
    assert_eq!(translate("9:5").unwrap(), "It's nine oh five am");
}

#[test]
fn test_translate_withWindowsLineEnding_shouldIgnoreCarriageReturn() {
    assert_eq!(translate("12:45\r").unwrap(), "It's twelve forty five pm");
}

/// Every valid time must translate, and the suffix must follow the hour
#[test]
fn test_translate_withEveryValidTime_shouldEndWithMatchingMeridiem() {
    for hour in 0..24u32 {
        for minute in 0..60u32 {
            let sentence = translate(&format!("{:02}:{:02}", hour, minute)).unwrap();
            assert!(sentence.starts_with("It's "), "{}", sentence);
            let suffix = if hour < 12 { " am" } else { " pm" };
            assert!(sentence.ends_with(suffix), "{:02}:{:02} -> {}", hour, minute, sentence);
            assert!(!sentence.contains("  "), "{}", sentence);
        }
    }
}

#[test]
fn test_translate_hour_withAnyHour_shouldBeOneOfTwelveWords() {
    let words: Vec<&str> = (0..12).map(translate_hour).collect();
    for hour in 0..48 {
        assert!(words.contains(&translate_hour(hour)));
        assert_eq!(translate_hour(hour), words[(hour % 12) as usize]);
    }
}

#[test]
fn test_translate_minutes_withEveryMinute_shouldBeEmptyOnlyAtZero() {
    for minute in 0..60 {
        let phrase = translate_minutes(minute);
        assert_eq!(phrase.is_empty(), minute == 0, "minute {}", minute);
        if minute != 0 {
            assert!(phrase.starts_with(' ') && !phrase.starts_with("  "));
        }
    }
}

/// Malformed input must be reported, never turned into a sentence
#[test]
fn test_translate_withMalformedInput_shouldReturnParseError() {
    assert!(matches!(translate("abc"), Err(ParseError::MissingSeparator(_))));
    assert!(matches!(translate("12"), Err(ParseError::MissingSeparator(_))));
    assert!(matches!(translate(""), Err(ParseError::MissingSeparator(_))));
    assert!(matches!(
        translate("12:60:00"),
        Err(ParseError::FieldCount { found: 3, .. })
    ));
    assert!(matches!(
        translate("ab:30"),
        Err(ParseError::InvalidNumber { field: "hour", .. })
    ));
    assert!(matches!(
        translate("10:"),
        Err(ParseError::InvalidNumber { field: "minute", .. })
    ));
    assert!(matches!(
        translate("10 :30"),
        Err(ParseError::InvalidNumber { field: "hour", .. })
    ));
}

#[test]
fn test_translate_withOutOfRangeValues_shouldReturnRangeError() {
    assert_eq!(translate("24:00"), Err(ParseError::HourOutOfRange(24)));
    assert_eq!(translate("12:60"), Err(ParseError::MinuteOutOfRange(60)));
    assert!(translate("99:99").unwrap_err().is_out_of_range());
}

#[test]
fn test_clock_time_meridiem_shouldMatchHour() {
    assert_eq!(ClockTime::new(11, 59).unwrap().meridiem(), Meridiem::Am);
    assert_eq!(ClockTime::new(12, 0).unwrap().meridiem(), Meridiem::Pm);
}

#[test]
fn test_translate_fromManyThreads_shouldAgree() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| translate("23:59").unwrap()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "It's eleven fifty nine pm");
    }
}
