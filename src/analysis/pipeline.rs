//! The preprocessing pipeline: split → tokenize → tag → lemmatize.
//!
//! [`Preprocessor`] composes the four linguistic collaborators behind trait
//! objects and produces the document views everything else is built on.
//! The two axes of [`PreprocessOptions`] (tagging, lemmatization) combined
//! with the choice of [`sentences`](Preprocessor::sentences) versus
//! [`words`](Preprocessor::words) give the eight parameterizations of the
//! same per-sentence pass.
//!
//! Every call recomputes its view from the input text; no intermediate
//! state is kept, so repeated calls with equal arguments yield equal
//! sequences.
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::pipeline::{PreprocessOptions, Preprocessor};
//!
//! let preprocessor = Preprocessor::new();
//! let words: Vec<_> = preprocessor
//!     .words("The cats are running.", PreprocessOptions::default())
//!     .unwrap()
//!     .map(|token| token.text)
//!     .collect();
//!
//! assert_eq!(words, vec!["The", "cats", "are", "running", "."]);
//! ```

use std::sync::Arc;

use crate::analysis::lemmatizer::{DictLemmatizer, Lemmatizer, lemmatize_with_fallback};
use crate::analysis::sentence::{SentenceSplitter, UnicodeSentenceSplitter};
use crate::analysis::tagger::{LexiconTagger, PosTagger};
use crate::analysis::token::{Sentence, SentenceStream, Token, TokenStream};
use crate::analysis::tokenizer::{UnicodeWordTokenizer, WordTokenizer};
use crate::error::Result;

/// Switches for the two processing axes applied to every sentence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreprocessOptions {
    /// Attach a part-of-speech tag to each token. The sentence is tagged
    /// as a unit, never token by token.
    pub tagged: bool,
    /// Replace each token's surface form with its lemma (tags, when
    /// present, are preserved).
    pub lemmatized: bool,
}

impl PreprocessOptions {
    /// Options with both axes disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable tagging.
    pub fn tagged(mut self, tagged: bool) -> Self {
        self.tagged = tagged;
        self
    }

    /// Enable or disable lemmatization.
    pub fn lemmatized(mut self, lemmatized: bool) -> Self {
        self.lemmatized = lemmatized;
        self
    }
}

/// The preprocessing pipeline over one document.
///
/// Holds the sentence splitter, word tokenizer, tagger, and lemmatizer
/// behind `Arc<dyn ..>` seams so callers can substitute any collaborator.
#[derive(Clone)]
pub struct Preprocessor {
    splitter: Arc<dyn SentenceSplitter>,
    tokenizer: Arc<dyn WordTokenizer>,
    tagger: Arc<dyn PosTagger>,
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl Preprocessor {
    /// Create a preprocessor with the default collaborators.
    pub fn new() -> Self {
        Preprocessor {
            splitter: Arc::new(UnicodeSentenceSplitter::new()),
            tokenizer: Arc::new(UnicodeWordTokenizer::new()),
            tagger: Arc::new(LexiconTagger::new()),
            lemmatizer: Arc::new(DictLemmatizer::new()),
        }
    }

    /// Replace the sentence splitter.
    pub fn with_splitter(mut self, splitter: Arc<dyn SentenceSplitter>) -> Self {
        self.splitter = splitter;
        self
    }

    /// Replace the word tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn WordTokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Replace the part-of-speech tagger.
    pub fn with_tagger(mut self, tagger: Arc<dyn PosTagger>) -> Self {
        self.tagger = tagger;
        self
    }

    /// Replace the lemmatizer.
    pub fn with_lemmatizer(mut self, lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        self.lemmatizer = lemmatizer;
        self
    }

    /// Produce the document's sentences, each processed according to
    /// `options`, in document order. An empty document yields an empty
    /// stream.
    pub fn sentences(&self, text: &str, options: PreprocessOptions) -> Result<SentenceStream> {
        let mut sentences = Vec::new();
        for sentence in self.splitter.split(text) {
            sentences.push(self.process_sentence(&sentence, options)?);
        }
        Ok(Box::new(sentences.into_iter()))
    }

    /// Produce the document's tokens flattened across sentences, preserving
    /// sentence order and within-sentence order.
    pub fn words(&self, text: &str, options: PreprocessOptions) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        for sentence in self.splitter.split(text) {
            tokens.extend(self.process_sentence(&sentence, options)?);
        }
        Ok(Box::new(tokens.into_iter()))
    }

    /// Run one sentence through tokenization and the configured axes.
    fn process_sentence(&self, sentence: &str, options: PreprocessOptions) -> Result<Sentence> {
        let mut tokens: Vec<Token> = self
            .tokenizer
            .tokenize(sentence)?
            .iter()
            .map(|word| word.trim())
            .filter(|word| !word.is_empty())
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        if options.tagged {
            let tags = {
                let words: Vec<&str> = tokens.iter().map(|token| token.text.as_str()).collect();
                self.tagger.tag(&words)
            };
            debug_assert_eq!(tags.len(), tokens.len());
            for (token, tag) in tokens.iter_mut().zip(tags) {
                token.tag = Some(tag);
            }
        }

        if options.lemmatized {
            for token in &mut tokens {
                token.text = lemmatize_with_fallback(self.lemmatizer.as_ref(), &token.text);
            }
        }

        Ok(tokens)
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Preprocessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preprocessor")
            .field("splitter", &self.splitter.name())
            .field("tokenizer", &self.tokenizer.name())
            .field("tagger", &self.tagger.name())
            .field("lemmatizer", &self.lemmatizer.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_plain() {
        let preprocessor = Preprocessor::new();
        let words: Vec<String> = preprocessor
            .words("The cats are running.", PreprocessOptions::default())
            .unwrap()
            .map(|token| token.text)
            .collect();

        assert_eq!(words, vec!["The", "cats", "are", "running", "."]);
    }

    #[test]
    fn test_words_lemmatized() {
        let preprocessor = Preprocessor::new();
        let words: Vec<String> = preprocessor
            .words(
                "The cats are running.",
                PreprocessOptions::new().lemmatized(true),
            )
            .unwrap()
            .map(|token| token.text)
            .collect();

        // "The" echoes (capitalized), "cats" resolves through the noun
        // fallback, "are" and "running" through the verb pass.
        assert_eq!(words, vec!["The", "cat", "be", "run", "."]);
    }

    #[test]
    fn test_tagged_sentences_preserve_tags_under_lemmatization() {
        let preprocessor = Preprocessor::new();
        let options = PreprocessOptions::new().tagged(true).lemmatized(true);
        let sentences: Vec<_> = preprocessor
            .sentences("The cats are running.", options)
            .unwrap()
            .collect();

        assert_eq!(sentences.len(), 1);
        let sentence = &sentences[0];
        assert_eq!(sentence[1].text, "cat");
        assert_eq!(sentence[1].tag.as_deref(), Some("NNS"));
        assert_eq!(sentence[3].text, "run");
        assert_eq!(sentence[3].tag.as_deref(), Some("VBG"));
    }

    #[test]
    fn test_untagged_views_have_no_tags() {
        let preprocessor = Preprocessor::new();
        let all_untagged = preprocessor
            .words("Cats run. Dogs jump.", PreprocessOptions::default())
            .unwrap()
            .all(|token| token.tag.is_none());

        assert!(all_untagged);
    }

    #[test]
    fn test_sentence_order_and_positions() {
        let preprocessor = Preprocessor::new();
        let sentences: Vec<_> = preprocessor
            .sentences("Cats run. Dogs jump.", PreprocessOptions::default())
            .unwrap()
            .collect();

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0][0].text, "Cats");
        assert_eq!(sentences[1][0].text, "Dogs");
        for sentence in &sentences {
            for (index, token) in sentence.iter().enumerate() {
                assert_eq!(token.position, index);
            }
        }
    }

    #[test]
    fn test_words_equal_flattened_sentences() {
        let preprocessor = Preprocessor::new();
        let options = PreprocessOptions::default();
        let text = "Cats run. Dogs jump over the lazy fox!";

        let word_count = preprocessor.words(text, options).unwrap().count();
        let sentence_total: usize = preprocessor
            .sentences(text, options)
            .unwrap()
            .map(|sentence| sentence.len())
            .sum();

        assert_eq!(word_count, sentence_total);
    }

    #[test]
    fn test_empty_document_yields_empty_streams() {
        let preprocessor = Preprocessor::new();
        assert_eq!(
            preprocessor
                .words("", PreprocessOptions::default())
                .unwrap()
                .count(),
            0
        );
        assert_eq!(
            preprocessor
                .sentences("", PreprocessOptions::default())
                .unwrap()
                .count(),
            0
        );
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let preprocessor = Preprocessor::new();
        let options = PreprocessOptions::new().tagged(true);
        let text = "The quick brown fox jumps.";

        let first: Vec<_> = preprocessor.words(text, options).unwrap().collect();
        let second: Vec<_> = preprocessor.words(text, options).unwrap().collect();

        assert_eq!(first, second);
    }
}
