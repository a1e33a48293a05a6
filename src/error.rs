//! Crate error type.
//!
//! Only genuinely fatal conditions surface here: unreadable input and
//! substitution patterns that fail to compile. Everything else (short
//! rows, unparseable copies counts, missing settings columns) degrades
//! gracefully with a log diagnostic so one bad cell never sinks a whole
//! deck render.

use thiserror::Error;

/// Errors that abort a deck render.
#[derive(Debug, Error)]
pub enum Error {
    /// The workbook could not be opened or read.
    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    /// A CSV input could not be read.
    #[error("failed to read csv input: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem-level failure (output writing, mostly).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A substitution pattern from the settings sheet failed to compile.
    ///
    /// A broken pattern is a configuration error for the whole deck, not
    /// something to silently skip.
    #[error("invalid substitution pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}
