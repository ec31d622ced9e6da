/*!
 * # talking-clock
 *
 * Turns 24-hour clock times into spoken English.
 *
 * ```
 * assert_eq!(talking_clock::translate("23:59").unwrap(), "It's eleven fifty nine pm");
 * assert_eq!(talking_clock::translate("00:00").unwrap(), "It's twelve am");
 * ```
 *
 * ## Architecture
 *
 * - `clock`: the translator (word tables, `ClockTime` parsing, sentence building)
 * - `app_controller`: read-translate-print loop with a configurable error policy
 * - `app_config`: configuration management
 * - `errors`: custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod clock;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::{Config, ErrorPolicy, LogLevel};
pub use app_controller::{Controller, RunSummary};
pub use clock::{ClockTime, Meridiem, translate, translate_hour, translate_minutes};
pub use errors::{AppError, ParseError};
