use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::models::Question;

pub const DEFAULT_QUESTIONS_PATH: &str = "triviaquestions.txt";
pub const DEFAULT_MAX_QUESTIONS: usize = 50;

/// Line appended to a question file once it has been loaded.
pub const COMPLETION_MARKER: &str = "# trivia-intake: loaded";

/// Error type for question file operations.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The question file could not be opened.
    #[error("could not open question file {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    /// Reading failed part way through the file.
    #[error("could not read question file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The completion marker could not be written back.
    #[error("could not append to question file {}: {source}", path.display())]
    Append { path: PathBuf, source: io::Error },
}

/// Questions loaded from a file, in file order.
#[derive(Debug, Default)]
pub struct Ingested {
    pub questions: Vec<Question>,
    /// Set when the cap was hit and at least one more question followed.
    pub truncated: bool,
}

/// Load at most `max` questions from the file at `path`.
pub fn ingest<P: AsRef<Path>>(path: P, max: usize) -> Result<Ingested, LoadError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), max, "opened question file");

    let ingested = read_questions(BufReader::new(file), max).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if ingested.truncated {
        info!(
            path = %path.display(),
            max,
            "question limit reached, remaining lines were dropped"
        );
    }
    info!(path = %path.display(), count = ingested.questions.len(), "loaded questions");

    Ok(ingested)
}

/// Read questions line by line until end of input or until `max` are held.
pub fn read_questions<R: BufRead>(mut reader: R, max: usize) -> io::Result<Ingested> {
    let mut questions = Vec::new();
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(Ingested {
                questions,
                truncated: false,
            });
        }

        let Some(question) = Question::parse_line(&line) else {
            continue;
        };

        if questions.len() >= max {
            return Ok(Ingested {
                questions,
                truncated: true,
            });
        }
        questions.push(question);
    }
}

/// Append [`COMPLETION_MARKER`] to the question file on its own line.
pub fn append_completion_marker<P: AsRef<Path>>(path: P) -> Result<(), LoadError> {
    let path = path.as_ref();
    let append_err = |source: io::Error| LoadError::Append {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .open(path)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let needs_newline = ends_without_newline(&mut file).map_err(append_err)?;
    let marker = if needs_newline {
        format!("\n{}\n", COMPLETION_MARKER)
    } else {
        format!("{}\n", COMPLETION_MARKER)
    };

    file.write_all(marker.as_bytes()).map_err(append_err)?;
    file.flush().map_err(append_err)?;
    debug!(path = %path.display(), "appended completion marker");

    Ok(())
}

fn ends_without_newline(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
