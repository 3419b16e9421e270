//! Output finalization: write the status record and check the stream.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::config::OutputFormat;
use crate::data::Ingested;
use crate::models::{PlayerName, Question};

pub const DEFAULT_OUTPUT_PATH: &str = "output.txt";

#[derive(Debug, Error)]
pub enum OutputError {
    /// The output file could not be opened for writing.
    #[error("could not open output file {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    /// Writing, flushing or syncing the output stream failed.
    #[error("failed to write output file {}: {source}", path.display())]
    Stream { path: PathBuf, source: io::Error },
}

/// What a run produced, as written to the output file.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub player: String,
    pub questions_loaded: usize,
    pub truncated: bool,
    pub questions: Vec<Question>,
}

impl StatusReport {
    pub fn new(player: &PlayerName, ingested: Ingested) -> Self {
        Self {
            player: player.to_string(),
            questions_loaded: ingested.questions.len(),
            truncated: ingested.truncated,
            questions: ingested.questions,
        }
    }
}

/// Write `report` to `path`, replacing any previous content.
///
/// Any failure after the file is open is reported as
/// [`OutputError::Stream`]; nothing is retried and the handle is closed on
/// return either way.
pub fn finalize<P: AsRef<Path>>(
    path: P,
    report: &StatusReport,
    format: OutputFormat,
) -> Result<(), OutputError> {
    let path = path.as_ref();
    let stream_err = |source: io::Error| {
        error!(path = %path.display(), %source, "output stream error");
        OutputError::Stream {
            path: path.to_path_buf(),
            source,
        }
    };

    let file = File::create(path).map_err(|source| OutputError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    write_report(&mut writer, report, format).map_err(stream_err)?;
    let file = writer
        .into_inner()
        .map_err(|e| stream_err(e.into_error()))?;
    // Pipes and character devices reject fsync; the flush above already
    // delivered the bytes.
    if file.metadata().map_err(stream_err)?.is_file() {
        file.sync_all().map_err(stream_err)?;
    }

    debug!(path = %path.display(), ?format, "wrote status report");
    Ok(())
}

/// Serialize `report` into `out` in the requested format.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &StatusReport,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(
                out,
                "player={} questions={} truncated={}",
                report.player, report.questions_loaded, report.truncated
            )?;
            for question in &report.questions {
                writeln!(out, "{}", question.prompt())?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    out.flush()
}
