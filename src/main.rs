// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug};
use std::io::Write;
use std::path::PathBuf;

use talking_clock::app_config::{self, Config, ErrorPolicy};
use talking_clock::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for ErrorPolicy to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliErrorPolicy {
    Skip,
    Abort,
}

impl From<CliErrorPolicy> for ErrorPolicy {
    fn from(cli_policy: CliErrorPolicy) -> Self {
        match cli_policy {
            CliErrorPolicy::Skip => ErrorPolicy::Skip,
            CliErrorPolicy::Abort => ErrorPolicy::Abort,
        }
    }
}

/// Talking clock - say a 24-hour time out loud
///
/// Reads HH:MM times from standard input, one per line, and prints the
/// spoken-English sentence for each one.
#[derive(Parser, Debug)]
#[command(name = "talking-clock")]
#[command(version)]
#[command(about = "Convert 24-hour times into spoken English")]
#[command(long_about = "Reads HH:MM times from standard input (or from the arguments) and prints one spoken sentence per time.

EXAMPLES:
    echo 23:59 | talking-clock            # It's eleven fifty nine pm
    talking-clock 09:05 13:30             # Translate arguments instead of stdin
    talking-clock --strict < times.txt    # Stop at the first malformed line
    talking-clock -c clock.json           # Read settings from a JSON config file")]
struct CommandLineOptions {
    /// Times to translate; stdin is read when none are given
    #[arg(value_name = "TIME")]
    times: Vec<String>,

    /// Configuration file path (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum, env = "TALKING_CLOCK_LOG_LEVEL")]
    log_level: Option<CliLogLevel>,

    /// What to do with a malformed time
    #[arg(long, value_enum, env = "TALKING_CLOCK_ON_ERROR")]
    on_error: Option<CliErrorPolicy>,

    /// Stop at the first malformed time (same as --on-error abort)
    #[arg(short, long)]
    strict: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Accept everything at the logger; the effective level is set through
    // log::set_max_level once the config is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Warn);

    let cli = CommandLineOptions::parse();
    let config = load_config(&cli)?;

    log::set_max_level(config.log_level.to_level_filter());
    debug!("Effective config: {:?}", config);

    let controller = Controller::with_config(config);
    let stdout = std::io::stdout();

    if cli.times.is_empty() {
        let stdin = std::io::stdin();
        controller.run(stdin.lock(), stdout.lock())?;
    } else {
        controller.run_times(&cli.times, stdout.lock())?;
    }

    Ok(())
}

/// Load the config file if one was given, then apply CLI overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    if let Some(policy) = &cli.on_error {
        config.on_error = policy.clone().into();
    }

    if cli.strict {
        config.on_error = ErrorPolicy::Abort;
    }

    Ok(config)
}
