//! Error types for the transcription pipeline.
//!
//! Only malformed input from the classifier boundary is fatal; every other
//! failure mode recovers locally with an inline transcription note cell.

use thiserror::Error;

/// Errors surfaced to the caller before any pass runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranscribeError {
    /// The classifier produced an empty cell stream.
    #[error("classifier produced an empty cell stream")]
    EmptyInput,

    /// A predicted label was not a braille pattern or empty-cell label.
    #[error("unrecognized cell label {0:?} from the classifier boundary")]
    InvalidLabel(char),
}
