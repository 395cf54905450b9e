//! Errors from loading vocabularies and reading analysis documents.
//!
//! Segmentation itself never fails; only the I/O and parsing around it does.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input was not valid JSON of the expected shape.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A vocabulary file held no usable prefix or suffix.
    #[error("vocabulary has no {0} entries")]
    EmptyVocabulary(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_vocabulary_display() {
        let err = Error::EmptyVocabulary("suffix");
        assert_eq!(err.to_string(), "vocabulary has no suffix entries");
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let err: Error = parse.unwrap_err().into();
        assert!(err.to_string().starts_with("invalid JSON"));
    }
}
