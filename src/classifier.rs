//! Lexical and readability statistics over a single document.
//!
//! [`TextClassifier`] wraps one immutable text string and exposes four
//! views of it (sentences and words, each optionally POS-tagged and/or
//! lemmatized) plus the metrics layered on those views: Flesch reading
//! ease, lexical density, word frequency, type-token ratio, syllable
//! counting, and a case-insensitive expression matcher.
//!
//! Every view and metric is recomputed from the document on each call;
//! nothing is cached, so repeated calls with the same arguments return
//! identical results.
//!
//! # Examples
//!
//! ```
//! use lexis::classifier::TextClassifier;
//!
//! let classifier = TextClassifier::new("The cats are running.");
//! let words: Vec<String> = classifier
//!     .words(false)
//!     .unwrap()
//!     .map(|token| token.text)
//!     .collect();
//!
//! assert_eq!(words, vec!["The", "cats", "are", "running", "."]);
//! assert_eq!(classifier.count_syllables("banana"), 3);
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use ahash::AHashSet;
use regex::RegexBuilder;

use crate::analysis::lemmatizer::Lemmatizer;
use crate::analysis::pipeline::{PreprocessOptions, Preprocessor};
use crate::analysis::sentence::SentenceSplitter;
use crate::analysis::tagger::PosTagger;
use crate::analysis::token::{SentenceStream, TokenStream};
use crate::analysis::tokenizer::WordTokenizer;
use crate::error::{LexisError, Result};
use crate::phonetics::dictionary::PronouncingDictionary;
use crate::phonetics::syllable;

/// Round to three decimal places, as the density and frequency metrics
/// report their percentages.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Descriptive text analytics over one in-memory document.
pub struct TextClassifier {
    text: String,
    preprocessor: Preprocessor,
    dictionary: Arc<PronouncingDictionary>,
}

impl TextClassifier {
    /// Create a classifier over `text` with the default collaborators and
    /// the shared pronouncing dictionary.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self::builder(text).build()
    }

    /// Start building a classifier with custom collaborators.
    pub fn builder<S: Into<String>>(text: S) -> TextClassifierBuilder {
        TextClassifierBuilder {
            text: text.into(),
            preprocessor: Preprocessor::new(),
            dictionary: PronouncingDictionary::shared(),
        }
    }

    /// The raw document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The document's sentences, optionally lemmatized.
    pub fn sents(&self, lemmatized: bool) -> Result<SentenceStream> {
        self.preprocessor.sentences(
            &self.text,
            PreprocessOptions::new().lemmatized(lemmatized),
        )
    }

    /// The document's sentences with a POS tag on every token, optionally
    /// lemmatized.
    pub fn tagged_sents(&self, lemmatized: bool) -> Result<SentenceStream> {
        self.preprocessor.sentences(
            &self.text,
            PreprocessOptions::new().tagged(true).lemmatized(lemmatized),
        )
    }

    /// The document's words flattened across sentences, optionally
    /// lemmatized.
    pub fn words(&self, lemmatized: bool) -> Result<TokenStream> {
        self.preprocessor.words(
            &self.text,
            PreprocessOptions::new().lemmatized(lemmatized),
        )
    }

    /// The document's words with a POS tag on every token, optionally
    /// lemmatized.
    pub fn tagged_words(&self, lemmatized: bool) -> Result<TokenStream> {
        self.preprocessor.words(
            &self.text,
            PreprocessOptions::new().tagged(true).lemmatized(lemmatized),
        )
    }

    /// Estimate the syllable count of a single word using the injected
    /// pronouncing dictionary, falling back to vowel-letter counting for
    /// unknown words. Never errors.
    pub fn count_syllables(&self, word: &str) -> usize {
        syllable::count_syllables(&self.dictionary, word)
    }

    /// Sum of per-sentence Flesch reading-ease terms.
    ///
    /// For each sentence, only fully alphabetic tokens count as words;
    /// sentences with none contribute nothing. The per-sentence term is
    /// `206.835 - 1.015 * words - 84.6 * (syllables / words)`, and the
    /// result is the SUM of those terms over all sentences, not the
    /// standard whole-document Flesch score, so the value grows with
    /// sentence count. An empty document yields 0.0.
    pub fn calculate_sentence_reading_ease(&self) -> Result<f64> {
        let mut reading_ease = 0.0;
        for sentence in self.sents(false)? {
            let words: Vec<_> = sentence
                .iter()
                .filter(|token| token.is_alphabetic())
                .collect();
            if words.is_empty() {
                continue;
            }
            let word_count = words.len() as f64;
            let syllables: usize = words
                .iter()
                .map(|token| self.count_syllables(&token.text))
                .sum();
            reading_ease +=
                206.835 - 1.015 * word_count - 84.6 * (syllables as f64 / word_count);
        }
        Ok(reading_ease)
    }

    /// Percentage of tagged words whose tag is in `tags_to_search`,
    /// rounded to three decimals.
    ///
    /// With the default tagger, passing the open-class tags (see
    /// [`OPEN_CLASS_TAGS`](crate::analysis::tagger::OPEN_CLASS_TAGS))
    /// measures classical lexical density.
    ///
    /// # Errors
    ///
    /// Returns [`LexisError::EmptyDocument`] if the document has no words.
    pub fn calculate_lexical_density_by_tags(
        &self,
        tags_to_search: &HashSet<String>,
    ) -> Result<f64> {
        let mut matching = 0usize;
        let mut total = 0usize;
        for token in self.tagged_words(false)? {
            if token
                .tag
                .as_deref()
                .is_some_and(|tag| tags_to_search.contains(tag))
            {
                matching += 1;
            }
            total += 1;
        }
        if total == 0 {
            return Err(LexisError::empty_document(
                "no words to measure lexical density",
            ));
        }
        Ok(round3(matching as f64 / total as f64 * 100.0))
    }

    /// Per-mille frequency of the words in `words_to_search` among all
    /// document words, rounded to three decimals: `matching / total × 1000`.
    ///
    /// Matching is exact on surface forms, punctuation tokens included in
    /// the total.
    ///
    /// # Errors
    ///
    /// Returns [`LexisError::EmptyDocument`] if the document has no words.
    pub fn calculate_words_frequency(&self, words_to_search: &HashSet<String>) -> Result<f64> {
        let mut matching = 0usize;
        let mut total = 0usize;
        for token in self.words(false)? {
            if words_to_search.contains(&token.text) {
                matching += 1;
            }
            total += 1;
        }
        if total == 0 {
            return Err(LexisError::empty_document(
                "no words to measure frequency",
            ));
        }
        Ok(round3(matching as f64 / total as f64 * 1000.0))
    }

    /// Type-token ratio: distinct lower-cased lemmatized words divided by
    /// total lemmatized words.
    ///
    /// # Errors
    ///
    /// Returns [`LexisError::EmptyDocument`] if the document has no words.
    pub fn calculate_type_token_ratio(&self) -> Result<f64> {
        let mut seen: AHashSet<String> = AHashSet::new();
        let mut total = 0usize;
        for token in self.words(true)? {
            seen.insert(token.text.to_lowercase());
            total += 1;
        }
        if total == 0 {
            return Err(LexisError::empty_document(
                "no words to measure type-token ratio",
            ));
        }
        Ok(seen.len() as f64 / total as f64)
    }

    /// Case-insensitive regular-expression search of `pattern` against the
    /// raw document.
    ///
    /// # Errors
    ///
    /// Returns [`LexisError::Pattern`] naming the pattern if it is not a
    /// valid regular expression.
    pub fn has_peculiar_expression(&self, pattern: &str) -> Result<bool> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| LexisError::pattern(format!("invalid expression '{pattern}': {e}")))?;
        Ok(regex.is_match(&self.text))
    }
}

impl std::fmt::Debug for TextClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextClassifier")
            .field("text_len", &self.text.len())
            .field("preprocessor", &self.preprocessor)
            .field("dictionary_words", &self.dictionary.len())
            .finish()
    }
}

/// Builder for [`TextClassifier`] with injectable collaborators.
pub struct TextClassifierBuilder {
    text: String,
    preprocessor: Preprocessor,
    dictionary: Arc<PronouncingDictionary>,
}

impl TextClassifierBuilder {
    /// Replace the sentence splitter.
    pub fn with_splitter(mut self, splitter: Arc<dyn SentenceSplitter>) -> Self {
        self.preprocessor = self.preprocessor.with_splitter(splitter);
        self
    }

    /// Replace the word tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn WordTokenizer>) -> Self {
        self.preprocessor = self.preprocessor.with_tokenizer(tokenizer);
        self
    }

    /// Replace the part-of-speech tagger.
    pub fn with_tagger(mut self, tagger: Arc<dyn PosTagger>) -> Self {
        self.preprocessor = self.preprocessor.with_tagger(tagger);
        self
    }

    /// Replace the lemmatizer.
    pub fn with_lemmatizer(mut self, lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        self.preprocessor = self.preprocessor.with_lemmatizer(lemmatizer);
        self
    }

    /// Replace the pronouncing dictionary.
    pub fn with_dictionary(mut self, dictionary: Arc<PronouncingDictionary>) -> Self {
        self.dictionary = dictionary;
        self
    }

    /// Build the classifier.
    pub fn build(self) -> TextClassifier {
        TextClassifier {
            text: self.text,
            preprocessor: self.preprocessor,
            dictionary: self.dictionary,
        }
    }
}
