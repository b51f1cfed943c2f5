// ============================================================
// Layer 3 — Evaluation Errors
// ============================================================
// Typed errors for everything that can go wrong while reading
// or scoring a single file. All of them are file-scoped: the
// batch driver (Layer 2) turns them into a `Failed` outcome
// and moves on to the next file.
//
// The application and CLI layers work with anyhow::Result;
// EvalError converts into anyhow::Error through `?` because
// it implements std::error::Error (derived by thiserror).

use thiserror::Error;

/// Result type for reader and scorer operations.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Errors produced while reading or scoring one input file.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EvalError {
    /// A row that does not have the expected shape.
    #[error("format error on line {line}: {message}")]
    Format { line: usize, message: String },

    /// The file name does not name any test category.
    #[error("could not determine evaluation type for file '{0}'")]
    UnknownEvaluationType(String),

    /// A label index the label inventory does not contain.
    #[error("label index {0} is not part of the label set")]
    UnknownLabelIndex(usize),

    /// The classifier returned a prediction list that does not line up
    /// with its own offsets.
    #[error("classifier returned {offsets} offsets but {labels} labels")]
    PredictionShape { offsets: usize, labels: usize },

    /// The classifier has no output for this sentence.
    #[error("no prediction recorded for sentence '{0}'")]
    MissingPrediction(String),

    /// Underlying read failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EvalError {
    /// Create a format error for a 1-based line number.
    pub fn format(line: usize, message: impl Into<String>) -> Self {
        EvalError::Format {
            line,
            message: message.into(),
        }
    }
}
