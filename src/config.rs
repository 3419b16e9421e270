//! Run configuration, built once at startup and passed to every stage.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::data::{DEFAULT_MAX_QUESTIONS, DEFAULT_QUESTIONS_PATH};
use crate::output::DEFAULT_OUTPUT_PATH;

/// Greeting shown once a valid name has been entered.
pub const DEFAULT_INTRO: &str = "Welcome to the Trivia Game";

/// Format of the status record written to the output file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// A human-readable status line followed by the loaded prompts.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub intro: String,
    pub questions_path: PathBuf,
    pub output_path: PathBuf,
    pub max_questions: usize,
    /// Append a completion marker to the question file after loading.
    pub mark_complete: bool,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            intro: DEFAULT_INTRO.to_string(),
            questions_path: PathBuf::from(DEFAULT_QUESTIONS_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            max_questions: DEFAULT_MAX_QUESTIONS,
            mark_complete: false,
            format: OutputFormat::Text,
        }
    }
}
