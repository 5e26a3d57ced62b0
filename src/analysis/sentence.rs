//! Sentence splitter implementations.
//!
//! Sentence segmentation is the first stage of the preprocessing pipeline.
//! The default implementation uses Unicode sentence boundary rules (UAX #29);
//! callers with stronger requirements can plug in their own
//! [`SentenceSplitter`].

use unicode_segmentation::UnicodeSegmentation;

/// Trait for sentence splitters that segment a document into sentences.
pub trait SentenceSplitter: Send + Sync {
    /// Split the given text into an ordered sequence of sentence strings.
    ///
    /// Implementations must preserve document order and should not return
    /// empty or whitespace-only sentences.
    fn split(&self, text: &str) -> Vec<String>;

    /// Get the name of this splitter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A sentence splitter based on Unicode sentence boundaries (UAX #29).
///
/// Each sentence is trimmed of surrounding whitespace; segments that are
/// empty after trimming are skipped.
///
/// # Examples
///
/// ```
/// use lexis::analysis::sentence::{SentenceSplitter, UnicodeSentenceSplitter};
///
/// let splitter = UnicodeSentenceSplitter::new();
/// let sentences = splitter.split("Cats run. Dogs jump.");
///
/// assert_eq!(sentences, vec!["Cats run.", "Dogs jump."]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct UnicodeSentenceSplitter;

impl UnicodeSentenceSplitter {
    /// Create a new Unicode sentence splitter.
    pub fn new() -> Self {
        UnicodeSentenceSplitter
    }
}

impl SentenceSplitter for UnicodeSentenceSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        text.split_sentence_bounds()
            .map(|sentence| sentence.trim())
            .filter(|sentence| !sentence.is_empty())
            .map(|sentence| sentence.to_string())
            .collect()
    }

    fn name(&self) -> &'static str {
        "unicode_sentence"
    }
}
