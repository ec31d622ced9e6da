// Spoken-English word tables for the talking clock.

/// Hour words on a 12-hour dial, indexed by `hour % 12`.
/// Indices 1-9 are also the ones-digit words for minutes.
pub(super) const HOUR_WORDS: [&str; 12] = [
    "twelve", "one", "two",
    "three", "four", "five",
    "six", "seven", "eight",
    "nine", "ten", "eleven",
];

/// Tens-of-minutes words, indexed by `minute / 10`.
/// Slot 1 is never read: the teens are looked up in `TEEN_WORDS`.
pub(super) const TENS_WORDS: [&str; 6] = [
    "oh", "", "twenty", "thirty", "forty", "fifty",
];

/// Minutes 10 through 19, indexed by `minute - 10`.
pub(super) const TEEN_WORDS: [&str; 10] = [
    "ten", "eleven", "twelve", "thirteen", "fourteen",
    "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];
