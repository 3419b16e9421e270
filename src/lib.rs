//! # trivia-intake
//!
//! Greets a player, loads trivia questions from a text file and records
//! the outcome in an output file.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::io;
//!
//! use trivia_intake::{Config, GameError, TriviaGame};
//!
//! fn main() -> Result<(), GameError> {
//!     let game = TriviaGame::new(Config::default());
//!
//!     let mut input = io::stdin().lock();
//!     let mut out = io::stdout().lock();
//!     let report = game.run(&mut input, &mut out)?;
//!
//!     println!("{} questions loaded", report.questions_loaded);
//!     Ok(())
//! }
//! ```

mod config;
mod data;
mod intake;
mod models;
mod output;
pub mod terminal;

use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::info;

pub use config::{Config, DEFAULT_INTRO, OutputFormat};
pub use data::{
    COMPLETION_MARKER, DEFAULT_MAX_QUESTIONS, DEFAULT_QUESTIONS_PATH, Ingested, LoadError,
    append_completion_marker, ingest, read_questions,
};
pub use intake::{IntakeError, greeting, prompt_for_name};
pub use models::{PlayerName, Question, is_valid_name};
pub use output::{DEFAULT_OUTPUT_PATH, OutputError, StatusReport, finalize, write_report};

/// Exit status for a failed file open or closed input.
pub const EXIT_FAILURE: u8 = 1;
/// Exit status for a write failure on the output stream.
pub const EXIT_STREAM_FAILURE: u8 = 2;

/// Error type for a full run.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Intake(#[from] IntakeError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl GameError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            GameError::Output(OutputError::Stream { .. }) => EXIT_STREAM_FAILURE,
            _ => EXIT_FAILURE,
        }
    }
}

/// One run of the program: name intake, question loading, output.
pub struct TriviaGame {
    config: Config,
}

impl TriviaGame {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run all three stages in order.
    ///
    /// The output file is only opened once the question file has loaded,
    /// so a missing question file leaves it untouched.
    pub fn run<R, W>(&self, input: &mut R, out: &mut W) -> Result<StatusReport, GameError>
    where
        R: BufRead,
        W: Write,
    {
        let name = prompt_for_name(input, out)?;
        writeln!(out, "{}", greeting(&name, &self.config.intro)).map_err(IntakeError::from)?;

        let ingested = ingest(&self.config.questions_path, self.config.max_questions)?;

        if self.config.mark_complete {
            append_completion_marker(&self.config.questions_path)?;
        }

        let report = StatusReport::new(&name, ingested);
        finalize(&self.config.output_path, &report, self.config.format)?;
        info!(
            player = %report.player,
            questions = report.questions_loaded,
            truncated = report.truncated,
            "run complete"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_exit_codes() {
        let open = GameError::from(LoadError::Open {
            path: PathBuf::from("missing.txt"),
            source: io::Error::from(io::ErrorKind::NotFound),
        });
        assert_eq!(open.exit_code(), EXIT_FAILURE);

        let stream = GameError::from(OutputError::Stream {
            path: PathBuf::from("output.txt"),
            source: io::Error::from(io::ErrorKind::WriteZero),
        });
        assert_eq!(stream.exit_code(), EXIT_STREAM_FAILURE);

        assert_eq!(GameError::from(IntakeError::InputClosed).exit_code(), EXIT_FAILURE);
    }
}
