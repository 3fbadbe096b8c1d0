use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning a song table into a rendered setlist.
///
/// Every variant is fatal: the pipeline aborts before anything is written.
#[derive(Debug, Error)]
pub enum SetlistError {
    #[error("Input error: {0}")]
    Input(String),

    #[error("Row {row}: invalid duration '{value}': {reason}")]
    Format {
        row: u64,
        value: String,
        reason: String,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Failed to write output '{}': {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure of the duration codec on a single "MM:SS" value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("expected exactly one ':' separator")]
    Separator,

    #[error("'{0}' is not a non-negative integer")]
    NotANumber(String),

    #[error("'{0}' is too long to count in seconds")]
    Overflow(String),
}

impl SetlistError {
    pub fn format(row: u64, value: &str, source: DurationError) -> Self {
        SetlistError::Format {
            row,
            value: value.to_string(),
            reason: source.to_string(),
        }
    }

    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SetlistError::Output {
            path: path.into(),
            source,
        }
    }
}
