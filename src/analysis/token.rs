//! Token types for text analysis.
//!
//! This module defines the data structures that flow through the
//! preprocessing pipeline.
//!
//! # Core Types
//!
//! - [`Token`] - A single token with its text, within-sentence position, and
//!   an optional part-of-speech tag
//! - [`Sentence`] - An ordered sequence of tokens
//! - [`TokenStream`] - Boxed iterator of tokens (flattened across sentences)
//! - [`SentenceStream`] - Boxed iterator of sentences
//!
//! # Examples
//!
//! Creating a simple token:
//!
//! ```
//! use lexis::analysis::token::Token;
//!
//! let token = Token::new("hello", 0);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.position, 0);
//! assert!(token.tag.is_none());
//! ```
//!
//! Attaching a part-of-speech tag:
//!
//! ```
//! use lexis::analysis::token::Token;
//!
//! let token = Token::new("cats", 1).with_tag("NNS");
//! assert_eq!(token.tag.as_deref(), Some("NNS"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token produced by the preprocessing pipeline.
///
/// A token is a word or punctuation run together with its position inside
/// its sentence. Tagged views of a document attach a part-of-speech tag;
/// untagged views leave `tag` as `None`. Lemmatized views replace `text`
/// with the lemma while keeping the tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The surface form (or lemma, for lemmatized views)
    pub text: String,

    /// The position of the token within its sentence (0-based, assigned
    /// after whitespace-only tokens are dropped)
    pub position: usize,

    /// Part-of-speech tag, present only in tagged views
    pub tag: Option<String>,
}

impl Token {
    /// Create a new untagged token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            tag: None,
        }
    }

    /// Attach a part-of-speech tag to this token.
    pub fn with_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Clone this token with updated text, preserving position and tag.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check whether the token text consists entirely of alphabetic
    /// characters. Punctuation tokens and mixed tokens like "don't" or
    /// "42nd" return false.
    pub fn is_alphabetic(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(|c| c.is_alphabetic())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// An ordered sequence of tokens belonging to one sentence.
pub type Sentence = Vec<Token>;

/// A stream of tokens flattened across sentences, in document order.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// A stream of sentences in document order.
pub type SentenceStream = Box<dyn Iterator<Item = Sentence>>;
