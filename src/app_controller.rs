use anyhow::Result;
use log::{debug, error, info};
use std::fmt;
use std::io::{BufRead, Write};

use crate::app_config::{Config, ErrorPolicy};
use crate::clock;
use crate::errors::{AppError, ParseError};

// @module: Read-translate-print loop around the clock translator

/// Counts for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines turned into sentences
    pub translated: usize,
    /// Malformed lines reported and dropped
    pub skipped: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} translated, {} skipped", self.translated, self.skipped)
    }
}

/// Main application controller for the talking clock
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Translate every line of `input` until end-of-input, one sentence per
    /// output line. A blank line is malformed like any other bad time.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for (index, line) in input.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|e| {
                AppError::File(format!("Failed to read input line {}: {}", line_number, e))
            })?;

            self.process(line_number, &line, &mut output, &mut summary)?;
        }

        self.finish(output, summary)
    }

    /// Translate times given directly, e.g. as command line arguments
    pub fn run_times<W: Write>(&self, times: &[String], mut output: W) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for (index, time) in times.iter().enumerate() {
            self.process(index + 1, time, &mut output, &mut summary)?;
        }

        self.finish(output, summary)
    }

    fn process<W: Write>(
        &self,
        line_number: usize,
        text: &str,
        output: &mut W,
        summary: &mut RunSummary,
    ) -> Result<()> {
        match clock::translate(text) {
            Ok(sentence) => {
                debug!("Line {}: {:?} -> {:?}", line_number, text, sentence);
                writeln!(output, "{}", sentence)
                    .map_err(|e| AppError::File(format!("Failed to write output: {}", e)))?;
                summary.translated += 1;
                Ok(())
            }
            Err(e) => self.handle_parse_error(line_number, e, summary),
        }
    }

    fn handle_parse_error(
        &self,
        line_number: usize,
        err: ParseError,
        summary: &mut RunSummary,
    ) -> Result<()> {
        match self.config.on_error {
            ErrorPolicy::Skip => {
                let kind = if err.is_out_of_range() { "out of range" } else { "malformed" };
                error!("Skipping line {} ({}): {}", line_number, kind, err);
                summary.skipped += 1;
                Ok(())
            }
            ErrorPolicy::Abort => Err(AppError::Parse {
                line: line_number,
                source: err,
            }
            .into()),
        }
    }

    fn finish<W: Write>(&self, mut output: W, summary: RunSummary) -> Result<RunSummary> {
        output.flush().map_err(AppError::from)?;
        info!("Finished: {}", summary);
        Ok(summary)
    }
}
