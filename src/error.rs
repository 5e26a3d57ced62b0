//! Error types for the Lexis library.
//!
//! All fallible operations in Lexis return [`Result`], whose error type is
//! the [`LexisError`] enum. Constructor helpers are provided for the common
//! variants so call sites stay short.
//!
//! # Examples
//!
//! ```
//! use lexis::error::{LexisError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexisError::analysis("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Lexis operations.
#[derive(Error, Debug)]
pub enum LexisError {
    /// I/O errors (dictionary file loading, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, tagging, lemmatization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid regular-expression pattern supplied by the caller
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// A metric was requested over a document with no words
    #[error("Empty document: {0}")]
    EmptyDocument(String),

    /// Pronouncing-dictionary errors (malformed entries, etc.)
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexisError.
pub type Result<T> = std::result::Result<T, LexisError>;

impl LexisError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LexisError::Analysis(msg.into())
    }

    /// Create a new pattern error.
    pub fn pattern<S: Into<String>>(msg: S) -> Self {
        LexisError::Pattern(msg.into())
    }

    /// Create a new empty-document error.
    pub fn empty_document<S: Into<String>>(msg: S) -> Self {
        LexisError::EmptyDocument(msg.into())
    }

    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        LexisError::Dictionary(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexisError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = LexisError::pattern("Test pattern error");
        assert_eq!(error.to_string(), "Pattern error: Test pattern error");

        let error = LexisError::empty_document("no words to analyze");
        assert_eq!(error.to_string(), "Empty document: no words to analyze");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let lexis_error = LexisError::from(io_error);

        match lexis_error {
            LexisError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
