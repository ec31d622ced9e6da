use std::fmt;
use std::str::FromStr;

use crate::errors::ParseError;

/// Half of the day a 24-hour value falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Hours 0-11 are `Am`, everything from 12 upwards is `Pm`
    pub fn from_hour(hour: u32) -> Self {
        if hour / 12 == 0 { Meridiem::Am } else { Meridiem::Pm }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "am",
            Meridiem::Pm => "pm",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated time of day on a 24-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Build a time, rejecting hours above 23 and minutes above 59
    pub fn new(hour: u32, minute: u32) -> Result<Self, ParseError> {
        let hour = u8::try_from(hour)
            .ok()
            .filter(|h| *h <= 23)
            .ok_or(ParseError::HourOutOfRange(hour))?;
        let minute = u8::try_from(minute)
            .ok()
            .filter(|m| *m <= 59)
            .ok_or(ParseError::MinuteOutOfRange(minute))?;

        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn meridiem(&self) -> Meridiem {
        Meridiem::from_hour(self.hour.into())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = ParseError;

    /// Parse `HH:MM`. Surrounding whitespace is ignored, fields need not be
    /// zero padded ("9:5" is 09:05).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !trimmed.contains(':') {
            return Err(ParseError::MissingSeparator(trimmed.to_string()));
        }

        let fields: Vec<&str> = trimmed.split(':').collect();
        if fields.len() != 2 {
            return Err(ParseError::FieldCount {
                input: trimmed.to_string(),
                found: fields.len(),
            });
        }

        let hour = parse_field("hour", fields[0])?;
        let minute = parse_field("minute", fields[1])?;

        Self::new(hour, minute)
    }
}

// Digits only: no sign, no inner whitespace.
fn parse_field(field: &'static str, text: &str) -> Result<u32, ParseError> {
    let invalid = || ParseError::InvalidNumber {
        field,
        value: text.to_string(),
    };

    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    text.parse::<u32>().map_err(|_| invalid())
}
