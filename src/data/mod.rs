mod loader;

pub use loader::{
    COMPLETION_MARKER, DEFAULT_MAX_QUESTIONS, DEFAULT_QUESTIONS_PATH, Ingested, LoadError,
    append_completion_marker, ingest, read_questions,
};
