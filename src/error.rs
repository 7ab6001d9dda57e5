use std::path::PathBuf;

use thiserror::Error;

use crate::models::StepName;

/// A source document could not be turned into text
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to extract PDF text from {path:?}: {message}")]
    Pdf { path: PathBuf, message: String },
}

/// The text-generation backend failed to produce a response
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("GROQ_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("model returned no text content")]
    EmptyContent,

    /// Raised by non-HTTP generators, e.g. in-process fakes
    #[error("{0}")]
    Backend(String),
}

/// The report file could not be written
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report row: {0}")]
    Csv(#[from] csv::Error),
}

/// Any failure that aborts a screening run
#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("{step} failed: {source}")]
    Step {
        step: StepName,
        #[source]
        source: GenerationError,
    },

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("workflow stopped before {0} ran")]
    Incomplete(StepName),
}

impl ScreeningError {
    pub fn step(step: StepName, source: GenerationError) -> Self {
        ScreeningError::Step { step, source }
    }
}
