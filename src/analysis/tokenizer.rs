//! Word tokenizer implementations.
//!
//! Tokenizers split a single sentence into word and punctuation tokens.
//! Unlike a search-oriented tokenizer, punctuation runs are kept as tokens
//! here: readability and frequency metrics need to see them, and callers
//! that do not can filter on [`Token::is_alphabetic`](crate::analysis::token::Token::is_alphabetic).

use regex::Regex;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::{LexisError, Result};

/// Trait for tokenizers that split a sentence into token strings.
pub trait WordTokenizer: Send + Sync {
    /// Tokenize the given sentence into an ordered sequence of token
    /// strings. Whitespace-only segments must not be returned.
    fn tokenize(&self, sentence: &str) -> Result<Vec<String>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A tokenizer that splits text on Unicode word boundaries (UAX #29).
///
/// Words and punctuation runs are both emitted as tokens; whitespace
/// segments are dropped. Contractions like "don't" stay in one piece.
///
/// # Examples
///
/// ```
/// use lexis::analysis::tokenizer::{UnicodeWordTokenizer, WordTokenizer};
///
/// let tokenizer = UnicodeWordTokenizer::new();
/// let tokens = tokenizer.tokenize("Hello, world!").unwrap();
///
/// assert_eq!(tokens, vec!["Hello", ",", "world", "!"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl WordTokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, sentence: &str) -> Result<Vec<String>> {
        let tokens = sentence
            .split_word_bounds()
            .filter(|segment| !segment.chars().all(char::is_whitespace))
            .map(|segment| segment.to_string())
            .collect();

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}

/// Default pattern for [`RegexTokenizer`]: word-character runs or runs of
/// non-word, non-space characters (punctuation).
pub const DEFAULT_TOKEN_PATTERN: &str = r"\w+|[^\w\s]+";

/// A regex-based tokenizer that extracts tokens using a caller-supplied
/// pattern.
///
/// The default pattern emits word-character runs and punctuation runs, so
/// its output matches [`UnicodeWordTokenizer`] on plain ASCII prose.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_TOKEN_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| LexisError::pattern(format!("invalid pattern '{pattern}': {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new().expect("Default token pattern should be valid")
    }
}

impl WordTokenizer for RegexTokenizer {
    fn tokenize(&self, sentence: &str) -> Result<Vec<String>> {
        Ok(self
            .pattern
            .find_iter(sentence)
            .map(|mat| mat.as_str().to_string())
            .collect())
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_word_tokenizer_keeps_punctuation() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens = tokenizer.tokenize("The cats are running.").unwrap();

        assert_eq!(tokens, vec!["The", "cats", "are", "running", "."]);
    }

    #[test]
    fn test_unicode_word_tokenizer_drops_whitespace() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens = tokenizer.tokenize("  spaced \t out  ").unwrap();

        assert_eq!(tokens, vec!["spaced", "out"]);
    }

    #[test]
    fn test_unicode_word_tokenizer_contraction() {
        let tokenizer = UnicodeWordTokenizer::new();
        let tokens = tokenizer.tokenize("don't stop").unwrap();

        assert_eq!(tokens, vec!["don't", "stop"]);
    }

    #[test]
    fn test_regex_tokenizer_default_pattern() {
        let tokenizer = RegexTokenizer::new().unwrap();
        let tokens = tokenizer.tokenize("Well, hello there!").unwrap();

        assert_eq!(tokens, vec!["Well", ",", "hello", "there", "!"]);
    }

    #[test]
    fn test_regex_tokenizer_custom_pattern() {
        let tokenizer = RegexTokenizer::with_pattern(r"[a-z]+").unwrap();
        let tokens = tokenizer.tokenize("abc DEF ghi").unwrap();

        assert_eq!(tokens, vec!["abc", "ghi"]);
    }

    #[test]
    fn test_regex_tokenizer_invalid_pattern() {
        let result = RegexTokenizer::with_pattern("[unclosed");
        assert!(result.is_err());
        let message = result.err().unwrap().to_string();
        assert!(message.contains("[unclosed"));
    }

    #[test]
    fn test_tokenizer_names() {
        assert_eq!(UnicodeWordTokenizer::new().name(), "unicode_word");
        assert_eq!(RegexTokenizer::new().unwrap().name(), "regex");
    }
}
