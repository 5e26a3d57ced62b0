//! Lemmatizer implementations.
//!
//! A lemmatizer maps an inflected word to its dictionary base form under a
//! part-of-speech hint. The default [`DictLemmatizer`] works the way a
//! WordNet-style morphological analyzer does: irregular forms resolve
//! through exception tables, regular inflections resolve through ordered
//! suffix-detachment rules whose candidates are validated against a
//! base-form vocabulary, and anything else echoes back unchanged.
//!
//! The echo-on-miss contract matters: [`lemmatize_with_fallback`] relies on
//! it to detect that the verb pass found nothing and retry as a noun.

use ahash::{AHashMap, AHashSet};

/// Part-of-speech hint supplied to a lemmatizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PosHint {
    /// Lemmatize as a verb ("running" → "run").
    Verb,
    /// Lemmatize as a noun ("cats" → "cat").
    Noun,
}

/// Trait for lemmatizers that reduce a word to its base form.
pub trait Lemmatizer: Send + Sync {
    /// Lemmatize `word` under the given part-of-speech hint. If no lemma is
    /// known, the input must be returned unchanged.
    fn lemmatize(&self, word: &str, hint: PosHint) -> String;

    /// Get the name of this lemmatizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Lemmatize `word` as a verb first; if the lemmatizer echoed the input
/// (no verb lemma found), retry as a noun and use that result.
///
/// Kept as a free function, isolated from the preprocessing iteration, so
/// the two-pass behavior can be tested on its own.
pub fn lemmatize_with_fallback(lemmatizer: &dyn Lemmatizer, word: &str) -> String {
    let lemma = lemmatizer.lemmatize(word, PosHint::Verb);
    if lemma == word {
        lemmatizer.lemmatize(word, PosHint::Noun)
    } else {
        lemma
    }
}

/// Irregular verb forms and their lemmas.
const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("goes", "go"),
    ("went", "go"),
    ("gone", "go"),
    ("ran", "run"),
    ("said", "say"),
    ("made", "make"),
    ("took", "take"),
    ("taken", "take"),
    ("came", "come"),
    ("saw", "see"),
    ("seen", "see"),
    ("knew", "know"),
    ("known", "know"),
    ("got", "get"),
    ("gotten", "get"),
    ("gave", "give"),
    ("given", "give"),
    ("found", "find"),
    ("thought", "think"),
    ("told", "tell"),
    ("became", "become"),
    ("left", "leave"),
    ("felt", "feel"),
    ("kept", "keep"),
    ("began", "begin"),
    ("begun", "begin"),
    ("brought", "bring"),
    ("wrote", "write"),
    ("written", "write"),
    ("sat", "sit"),
    ("stood", "stand"),
    ("lost", "lose"),
    ("paid", "pay"),
    ("met", "meet"),
    ("led", "lead"),
    ("understood", "understand"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("spent", "spend"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("won", "win"),
    ("taught", "teach"),
    ("bought", "buy"),
    ("sold", "sell"),
    ("built", "build"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("caught", "catch"),
    ("drew", "draw"),
    ("drawn", "draw"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("drank", "drink"),
    ("drunk", "drink"),
    ("sang", "sing"),
    ("sung", "sing"),
    ("swam", "swim"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("broke", "break"),
    ("broken", "break"),
    ("heard", "hear"),
    ("held", "hold"),
    ("hit", "hit"),
    ("put", "put"),
    ("read", "read"),
    ("sent", "send"),
];

/// Irregular noun plurals and their lemmas.
const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("shelves", "shelf"),
];

/// Base-form verb vocabulary used to validate rule candidates.
const VERB_BASE_FORMS: &[&str] = &[
    "be", "have", "do", "go", "run", "jump", "walk", "talk", "look", "make", "take", "give",
    "get", "come", "see", "say", "tell", "ask", "work", "play", "call", "try", "use", "find",
    "want", "need", "feel", "seem", "leave", "put", "keep", "let", "begin", "help", "show",
    "hear", "turn", "start", "move", "live", "believe", "bring", "happen", "write", "sit",
    "stand", "lose", "pay", "meet", "include", "continue", "learn", "change", "lead", "watch",
    "follow", "stop", "create", "speak", "read", "spend", "grow", "open", "win", "teach",
    "offer", "remember", "consider", "appear", "buy", "serve", "die", "send", "build", "stay",
    "fall", "cut", "reach", "kill", "raise", "pass", "sell", "decide", "return", "explain",
    "hope", "develop", "carry", "break", "receive", "agree", "support", "hit", "produce",
    "eat", "cover", "catch", "draw", "choose", "wait", "think", "know", "bark", "sing",
    "swim", "fly", "drink", "hold", "understand", "count", "score", "split", "test",
];

/// Base-form noun vocabulary used to validate rule candidates.
const NOUN_BASE_FORMS: &[&str] = &[
    "cat", "dog", "man", "woman", "child", "person", "time", "year", "day", "week", "month",
    "hour", "minute", "moment", "people", "way", "thing", "life", "world", "hand", "part",
    "eye", "place", "work", "case", "point", "number", "group", "problem", "fact", "word",
    "sentence", "text", "document", "book", "story", "page", "line", "letter", "language",
    "water", "room", "house", "home", "door", "area", "money", "lot", "right", "study",
    "job", "business", "issue", "side", "kind", "head", "foot", "tooth", "goose", "mouse",
    "service", "friend", "mother", "father", "parent", "power", "game", "end", "member",
    "law", "car", "city", "community", "name", "team", "idea", "body", "face", "level",
    "office", "health", "art", "war", "history", "party", "result", "change", "morning",
    "reason", "research", "girl", "boy", "guy", "air", "teacher", "force", "education",
    "score", "test", "metric", "value", "set", "list", "run", "leaf", "half", "shelf",
    "wife", "knife", "syllable", "vowel", "reader",
];

/// Ordered suffix-detachment rules: (suffix, replacement candidates).
///
/// For "ing" and "ed" an additional undoubled-consonant candidate is
/// generated ("running" → "runn" → "run").
const VERB_SUFFIX_RULES: &[(&str, &[&str])] = &[
    ("ies", &["y"]),
    ("ied", &["y"]),
    ("ches", &["ch"]),
    ("shes", &["sh"]),
    ("sses", &["ss"]),
    ("xes", &["x"]),
    ("zes", &["z"]),
    ("ing", &["", "e"]),
    ("ed", &["", "e"]),
    ("es", &["e", ""]),
    ("s", &[""]),
];

const NOUN_SUFFIX_RULES: &[(&str, &[&str])] = &[
    ("ies", &["y"]),
    ("ches", &["ch"]),
    ("shes", &["sh"]),
    ("sses", &["ss"]),
    ("xes", &["x"]),
    ("zes", &["z"]),
    ("ses", &["s"]),
    ("ves", &["f"]),
    ("es", &["e", ""]),
    ("s", &[""]),
];

/// A dictionary-based lemmatizer: exception tables for irregular forms,
/// suffix-detachment rules validated against a base-form vocabulary for
/// regular inflections, echo for everything else.
///
/// Words containing characters other than lower-case letters (capitalized
/// words, contractions, punctuation, digits) echo back unchanged, matching
/// the behavior of a case-sensitive dictionary lookup.
///
/// # Examples
///
/// ```
/// use lexis::analysis::lemmatizer::{DictLemmatizer, Lemmatizer, PosHint};
///
/// let lemmatizer = DictLemmatizer::new();
/// assert_eq!(lemmatizer.lemmatize("running", PosHint::Verb), "run");
/// assert_eq!(lemmatizer.lemmatize("cats", PosHint::Noun), "cat");
/// assert_eq!(lemmatizer.lemmatize("cats", PosHint::Verb), "cats");
/// ```
#[derive(Clone, Debug)]
pub struct DictLemmatizer {
    verb_exceptions: AHashMap<String, String>,
    noun_exceptions: AHashMap<String, String>,
    verb_vocabulary: AHashSet<String>,
    noun_vocabulary: AHashSet<String>,
}

impl DictLemmatizer {
    /// Create a lemmatizer with the built-in exception tables and
    /// vocabularies.
    pub fn new() -> Self {
        DictLemmatizer {
            verb_exceptions: VERB_EXCEPTIONS
                .iter()
                .map(|(form, lemma)| (form.to_string(), lemma.to_string()))
                .collect(),
            noun_exceptions: NOUN_EXCEPTIONS
                .iter()
                .map(|(form, lemma)| (form.to_string(), lemma.to_string()))
                .collect(),
            verb_vocabulary: VERB_BASE_FORMS.iter().map(|word| word.to_string()).collect(),
            noun_vocabulary: NOUN_BASE_FORMS.iter().map(|word| word.to_string()).collect(),
        }
    }

    /// Extend the verb base-form vocabulary.
    pub fn with_verb_vocabulary<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.verb_vocabulary.extend(words.into_iter().map(Into::into));
        self
    }

    /// Extend the noun base-form vocabulary.
    pub fn with_noun_vocabulary<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.noun_vocabulary.extend(words.into_iter().map(Into::into));
        self
    }

    /// Register an irregular form for the given part of speech.
    pub fn with_exception<F, L>(mut self, hint: PosHint, form: F, lemma: L) -> Self
    where
        F: Into<String>,
        L: Into<String>,
    {
        let table = match hint {
            PosHint::Verb => &mut self.verb_exceptions,
            PosHint::Noun => &mut self.noun_exceptions,
        };
        table.insert(form.into(), lemma.into());
        self
    }

    fn candidates(word: &str, suffix: &str, replacements: &[&str]) -> Vec<String> {
        let stem = &word[..word.len() - suffix.len()];
        let mut candidates: Vec<String> = replacements
            .iter()
            .map(|replacement| format!("{stem}{replacement}"))
            .collect();

        // Undo final-consonant doubling: "stopped" -> "stopp" -> "stop".
        if matches!(suffix, "ing" | "ed") && stem.len() >= 3 {
            let bytes = stem.as_bytes();
            let last = bytes[bytes.len() - 1];
            let prev = bytes[bytes.len() - 2];
            if last == prev && !matches!(last, b'a' | b'e' | b'i' | b'o' | b'u') {
                candidates.push(stem[..stem.len() - 1].to_string());
            }
        }

        candidates
    }

    fn apply(
        word: &str,
        exceptions: &AHashMap<String, String>,
        vocabulary: &AHashSet<String>,
        rules: &[(&str, &[&str])],
    ) -> Option<String> {
        if let Some(lemma) = exceptions.get(word) {
            return Some(lemma.clone());
        }
        if vocabulary.contains(word) {
            return Some(word.to_string());
        }
        for &(suffix, replacements) in rules {
            if !word.ends_with(suffix) || word.len() <= suffix.len() + 1 {
                continue;
            }
            for candidate in Self::candidates(word, suffix, replacements) {
                if vocabulary.contains(&candidate) {
                    return Some(candidate);
                }
            }
        }
        None
    }
}

impl Default for DictLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer for DictLemmatizer {
    fn lemmatize(&self, word: &str, hint: PosHint) -> String {
        if word.is_empty() || !word.chars().all(|c| c.is_lowercase() && c.is_alphabetic()) {
            return word.to_string();
        }
        let resolved = match hint {
            PosHint::Verb => Self::apply(
                word,
                &self.verb_exceptions,
                &self.verb_vocabulary,
                VERB_SUFFIX_RULES,
            ),
            PosHint::Noun => Self::apply(
                word,
                &self.noun_exceptions,
                &self.noun_vocabulary,
                NOUN_SUFFIX_RULES,
            ),
        };
        resolved.unwrap_or_else(|| word.to_string())
    }

    fn name(&self) -> &'static str {
        "dict"
    }
}
