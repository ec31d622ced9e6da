/*!
 * Time-to-words translation.
 *
 * Turns a 24-hour `HH:MM` string into a spoken sentence such as
 * "It's eleven fifty nine pm". Everything here is a pure function over
 * the constant word tables in `lexicon`, so it can be called from any
 * thread without synchronization.
 */

mod lexicon;
pub mod time;

pub use time::{ClockTime, Meridiem};

use crate::errors::ParseError;
use lexicon::{HOUR_WORDS, TEEN_WORDS, TENS_WORDS};

/// Word for an hour on the 12-hour dial: 0 and 12 are "twelve", 13 is "one"
pub fn translate_hour(hour: u32) -> &'static str {
    HOUR_WORDS[(hour % 12) as usize]
}

/// Minute phrase with a leading space, or an empty string for minute zero.
///
/// The leading space lets callers append the phrase straight after the hour
/// word. Minutes past 59 wrap around the dial.
pub fn translate_minutes(minute: u32) -> String {
    let minute = minute % 60;
    if minute == 0 {
        return String::new();
    }

    let tens = (minute / 10) as usize;
    let ones = (minute % 10) as usize;

    if tens == 1 {
        return format!(" {}", TEEN_WORDS[ones]);
    }

    if ones == 0 {
        format!(" {}", TENS_WORDS[tens])
    } else {
        format!(" {} {}", TENS_WORDS[tens], HOUR_WORDS[ones])
    }
}

/// Sentence for an already validated time
pub fn speak(time: &ClockTime) -> String {
    let hour = u32::from(time.hour());
    format!(
        "It's {}{} {}",
        translate_hour(hour),
        translate_minutes(time.minute().into()),
        time.meridiem()
    )
}

/// Translate a `HH:MM` string into its spoken sentence
pub fn translate(input: &str) -> Result<String, ParseError> {
    let time: ClockTime = input.parse()?;
    Ok(speak(&time))
}
