//! Part-of-speech tagger implementations.
//!
//! Tags are plain strings drawn from a Penn-Treebank-style tagset. The
//! default [`LexiconTagger`] combines a closed-class lexicon with suffix and
//! sentence-context rules; it tags a whole sentence at once so context rules
//! can consult earlier decisions (tagging is never per-token in isolation).
//!
//! The tagset used by [`LexiconTagger`]:
//!
//! - Open classes: `NN` `NNS` `NNP` (nouns), `VB` `VBD` `VBG` `VBN` `VBP`
//!   `VBZ` (verbs), `JJ` (adjectives), `RB` (adverbs)
//! - Closed classes: `DT` `PRP` `PRP$` `IN` `CC` `MD` `TO` `EX` `WDT` `WP`
//!   `WRB` `CD`
//! - Punctuation: `.` `,` `:` `(` `)` `''` ` `` ` `SYM`

use std::sync::LazyLock;

use ahash::AHashMap;

/// Trait for taggers that assign a part-of-speech tag to every token of a
/// sentence.
pub trait PosTagger: Send + Sync {
    /// Tag the given sentence, one tag per word, order-preserving. The
    /// returned vector has exactly the same length as `words`.
    fn tag(&self, words: &[&str]) -> Vec<String>;

    /// Get the name of this tagger (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Open-class (content-word) tags produced by [`LexiconTagger`], handy as a
/// default argument for lexical-density calculations.
pub const OPEN_CLASS_TAGS: &[&str] = &[
    "NN", "NNS", "NNP", "VB", "VBD", "VBG", "VBN", "VBP", "VBZ", "JJ", "RB",
];

/// Closed-class word list: (word, tag) pairs looked up before any suffix
/// heuristic fires.
const CLOSED_CLASS_ENTRIES: &[(&str, &str)] = &[
    // Determiners
    ("the", "DT"),
    ("a", "DT"),
    ("an", "DT"),
    ("this", "DT"),
    ("that", "DT"),
    ("these", "DT"),
    ("those", "DT"),
    ("each", "DT"),
    ("every", "DT"),
    ("some", "DT"),
    ("any", "DT"),
    ("no", "DT"),
    ("all", "DT"),
    ("both", "DT"),
    ("another", "DT"),
    // Personal pronouns
    ("i", "PRP"),
    ("you", "PRP"),
    ("he", "PRP"),
    ("she", "PRP"),
    ("it", "PRP"),
    ("we", "PRP"),
    ("they", "PRP"),
    ("me", "PRP"),
    ("him", "PRP"),
    ("us", "PRP"),
    ("them", "PRP"),
    ("myself", "PRP"),
    ("himself", "PRP"),
    ("herself", "PRP"),
    ("itself", "PRP"),
    ("themselves", "PRP"),
    // Possessive pronouns
    ("my", "PRP$"),
    ("your", "PRP$"),
    ("his", "PRP$"),
    ("her", "PRP$"),
    ("its", "PRP$"),
    ("our", "PRP$"),
    ("their", "PRP$"),
    // Prepositions
    ("in", "IN"),
    ("on", "IN"),
    ("at", "IN"),
    ("of", "IN"),
    ("for", "IN"),
    ("with", "IN"),
    ("from", "IN"),
    ("by", "IN"),
    ("about", "IN"),
    ("into", "IN"),
    ("over", "IN"),
    ("under", "IN"),
    ("between", "IN"),
    ("through", "IN"),
    ("during", "IN"),
    ("against", "IN"),
    ("among", "IN"),
    ("after", "IN"),
    ("before", "IN"),
    ("above", "IN"),
    ("below", "IN"),
    ("near", "IN"),
    ("without", "IN"),
    ("since", "IN"),
    ("if", "IN"),
    ("because", "IN"),
    ("while", "IN"),
    ("as", "IN"),
    // Conjunctions
    ("and", "CC"),
    ("or", "CC"),
    ("but", "CC"),
    ("nor", "CC"),
    ("yet", "CC"),
    // Modals
    ("can", "MD"),
    ("could", "MD"),
    ("will", "MD"),
    ("would", "MD"),
    ("shall", "MD"),
    ("should", "MD"),
    ("may", "MD"),
    ("might", "MD"),
    ("must", "MD"),
    // Forms of be / have / do
    ("am", "VBP"),
    ("is", "VBZ"),
    ("are", "VBP"),
    ("was", "VBD"),
    ("were", "VBD"),
    ("be", "VB"),
    ("been", "VBN"),
    ("being", "VBG"),
    ("have", "VBP"),
    ("has", "VBZ"),
    ("had", "VBD"),
    ("having", "VBG"),
    ("do", "VBP"),
    ("does", "VBZ"),
    ("did", "VBD"),
    // Particles and function words
    ("to", "TO"),
    ("there", "EX"),
    ("not", "RB"),
    ("never", "RB"),
    ("always", "RB"),
    ("often", "RB"),
    ("very", "RB"),
    ("too", "RB"),
    ("also", "RB"),
    ("just", "RB"),
    ("still", "RB"),
    ("only", "RB"),
    ("here", "RB"),
    ("now", "RB"),
    ("then", "RB"),
    ("so", "RB"),
    // Wh-words
    ("which", "WDT"),
    ("what", "WDT"),
    ("who", "WP"),
    ("whom", "WP"),
    ("when", "WRB"),
    ("where", "WRB"),
    ("why", "WRB"),
    ("how", "WRB"),
];

static CLOSED_CLASS: LazyLock<AHashMap<&'static str, &'static str>> =
    LazyLock::new(|| CLOSED_CLASS_ENTRIES.iter().copied().collect());

/// A rule-based tagger built from a closed-class lexicon plus suffix and
/// context heuristics.
///
/// The whole token sequence of a sentence is tagged in one pass; each
/// decision may look at the previous tag and at whether the token is
/// sentence-initial (capitalized sentence-initial words are folded to
/// lower case before lexicon lookup, so "The" still tags as `DT`).
///
/// # Examples
///
/// ```
/// use lexis::analysis::tagger::{LexiconTagger, PosTagger};
///
/// let tagger = LexiconTagger::new();
/// let tags = tagger.tag(&["The", "cats", "are", "running", "."]);
///
/// assert_eq!(tags, vec!["DT", "NNS", "VBP", "VBG", "."]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LexiconTagger;

impl LexiconTagger {
    /// Create a new lexicon tagger.
    pub fn new() -> Self {
        LexiconTagger
    }

    fn punctuation_tag(word: &str) -> Option<&'static str> {
        if word.is_empty() || word.chars().any(|c| c.is_alphanumeric()) {
            return None;
        }
        let tag = match word {
            "." | "!" | "?" | "..." | "…" => ".",
            "," => ",",
            ":" | ";" | "-" | "--" | "—" | "–" => ":",
            "(" | "[" | "{" => "(",
            ")" | "]" | "}" => ")",
            "\"" | "''" | "'" | "’" | "”" => "''",
            "``" | "“" | "‘" => "``",
            "#" => "#",
            "$" => "$",
            _ => "SYM",
        };
        Some(tag)
    }

    fn is_numeric(word: &str) -> bool {
        word.chars().any(|c| c.is_ascii_digit())
            && word
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '/'))
    }

    fn tag_word(word: &str, sentence_initial: bool, prev_tag: Option<&str>) -> String {
        if let Some(tag) = Self::punctuation_tag(word) {
            return tag.to_string();
        }
        if Self::is_numeric(word) {
            return "CD".to_string();
        }

        let lower = word.to_lowercase();
        let capitalized = word.chars().next().is_some_and(char::is_uppercase);

        // Closed-class lookup: exact lower-case form, also applied to
        // sentence-initial capitalized words.
        if (!capitalized || sentence_initial)
            && let Some(tag) = CLOSED_CLASS.get(lower.as_str())
        {
            return (*tag).to_string();
        }

        // Capitalized inside the sentence reads as a proper noun.
        if capitalized && !sentence_initial {
            return "NNP".to_string();
        }

        // Bare infinitive after a modal or "to".
        if matches!(prev_tag, Some("MD") | Some("TO")) {
            return "VB".to_string();
        }

        if lower.ends_with("ly") && lower.len() > 3 {
            return "RB".to_string();
        }
        if lower.ends_with("ing") && lower.len() > 4 {
            return "VBG".to_string();
        }
        if lower.ends_with("ed") && lower.len() > 3 {
            // Past participle after an auxiliary, simple past otherwise.
            return match prev_tag {
                Some("VBZ") | Some("VBP") | Some("VBD") | Some("VB") => "VBN".to_string(),
                _ => "VBD".to_string(),
            };
        }
        if lower.ends_with('s')
            && !lower.ends_with("ss")
            && !lower.ends_with("us")
            && !lower.ends_with("is")
            && lower.len() > 3
        {
            // Third-person verb after a subject pronoun or proper noun,
            // plural noun otherwise.
            return match prev_tag {
                Some("PRP") | Some("NNP") => "VBZ".to_string(),
                _ => "NNS".to_string(),
            };
        }
        if ["tion", "sion", "ment", "ness", "ity", "ance", "ence"]
            .iter()
            .any(|suffix| lower.ends_with(suffix))
        {
            return "NN".to_string();
        }
        if ["ous", "ful", "ive", "able", "ible", "ic", "al"]
            .iter()
            .any(|suffix| lower.ends_with(suffix))
        {
            return "JJ".to_string();
        }

        "NN".to_string()
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, words: &[&str]) -> Vec<String> {
        let mut tags: Vec<String> = Vec::with_capacity(words.len());
        for (index, word) in words.iter().enumerate() {
            let prev_tag = tags.last().map(|tag: &String| tag.as_str());
            tags.push(Self::tag_word(word, index == 0, prev_tag));
        }
        tags
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}
