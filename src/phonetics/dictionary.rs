//! Pronouncing dictionary management.
//!
//! Maps lower-cased words to ordered lists of pronunciation variants, each
//! an ordered list of ARPABET phoneme codes ("K AE1 T"). Vowel phonemes
//! carry a trailing stress digit, which is what syllable counting keys on.
//!
//! A built-in entry set covering common English words ships with the crate;
//! larger dictionaries load from CMUdict-format files (`;;;` comment lines,
//! `WORD(1)` keys for pronunciation variants). The process-wide instance
//! behind [`PronouncingDictionary::shared`] is loaded once and never
//! mutated; classifiers take an injected `Arc` so tests can substitute
//! fixture dictionaries.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::{Arc, LazyLock};

use ahash::AHashMap;

use crate::error::Result;

/// Built-in ARPABET entries for common English words.
const BUILTIN_ENTRIES: &[&str] = &[
    "the  DH AH0",
    "a  AH0",
    "an  AE1 N",
    "and  AE1 N D",
    "or  AO1 R",
    "but  B AH1 T",
    "if  IH1 F",
    "in  IH1 N",
    "on  AA1 N",
    "at  AE1 T",
    "of  AH1 V",
    "to  T UW1",
    "with  W IH1 DH",
    "from  F R AH1 M",
    "by  B AY1",
    "is  IH1 Z",
    "are  AA1 R",
    "was  W AA1 Z",
    "were  W ER1",
    "be  B IY1",
    "been  B IH1 N",
    "being  B IY1 IH0 NG",
    "have  HH AE1 V",
    "has  HH AE1 Z",
    "had  HH AE1 D",
    "having  HH AE1 V IH0 NG",
    "do  D UW1",
    "does  D AH1 Z",
    "did  D IH1 D",
    "i  AY1",
    "you  Y UW1",
    "he  HH IY1",
    "she  SH IY1",
    "it  IH1 T",
    "we  W IY1",
    "they  DH EY1",
    "me  M IY1",
    "him  HH IH1 M",
    "her  HH ER1",
    "us  AH1 S",
    "them  DH EH1 M",
    "my  M AY1",
    "your  Y AO1 R",
    "his  HH IH1 Z",
    "its  IH1 T S",
    "our  AW1 ER0",
    "their  DH EH1 R",
    "this  DH IH1 S",
    "that  DH AE1 T",
    "these  DH IY1 Z",
    "those  DH OW1 Z",
    "what  W AH1 T",
    "when  W EH1 N",
    "where  W EH1 R",
    "who  HH UW1",
    "why  W AY1",
    "how  HH AW1",
    "yes  Y EH1 S",
    "no  N OW1",
    "not  N AA1 T",
    "well  W EH1 L",
    "here  HH IY1 R",
    "there  DH EH1 R",
    "cat  K AE1 T",
    "cats  K AE1 T S",
    "dog  D AO1 G",
    "dogs  D AO1 G Z",
    "fox  F AA1 K S",
    "mouse  M AW1 S",
    "run  R AH1 N",
    "runs  R AH1 N Z",
    "running  R AH1 N IH0 NG",
    "jump  JH AH1 M P",
    "jumps  JH AH1 M P S",
    "jumping  JH AH1 M P IH0 NG",
    "walk  W AO1 K",
    "walks  W AO1 K S",
    "talk  T AO1 K",
    "quick  K W IH1 K",
    "brown  B R AW1 N",
    "lazy  L EY1 Z IY0",
    "happy  HH AE1 P IY0",
    "good  G UH1 D",
    "bad  B AE1 D",
    "new  N UW1",
    "old  OW1 L D",
    "long  L AO1 NG",
    "short  SH AO1 R T",
    "little  L IH1 T AH0 L",
    "simple  S IH1 M P AH0 L",
    "beautiful  B Y UW1 T AH0 F AH0 L",
    "banana  B AH0 N AE1 N AH0",
    "hello  HH AH0 L OW1",
    "world  W ER1 L D",
    "time  T AY1 M",
    "day  D EY1",
    "year  Y IH1 R",
    "way  W EY1",
    "man  M AE1 N",
    "men  M EH1 N",
    "woman  W UH1 M AH0 N",
    "women  W IH1 M AH0 N",
    "child  CH AY1 L D",
    "children  CH IH1 L D R AH0 N",
    "people  P IY1 P AH0 L",
    "word  W ER1 D",
    "words  W ER1 D Z",
    "text  T EH1 K S T",
    "sentence  S EH1 N T AH0 N S",
    "language  L AE1 NG G W AH0 JH",
    "book  B UH1 K",
    "story  S T AO1 R IY0",
    "document  D AA1 K Y AH0 M AH0 N T",
    "paragraph  P EH1 R AH0 G R AE2 F",
    "house  HH AW1 S",
    "home  HH OW1 M",
    "door  D AO1 R",
    "water  W AO1 T ER0",
    "see  S IY1",
    "saw  S AO1",
    "make  M EY1 K",
    "made  M EY1 D",
    "know  N OW1",
    "knew  N UW1",
    "take  T EY1 K",
    "took  T UH1 K",
    "come  K AH1 M",
    "came  K EY1 M",
    "give  G IH1 V",
    "gave  G EY1 V",
    "go  G OW1",
    "went  W EH1 N T",
    "get  G EH1 T",
    "got  G AA1 T",
    "find  F AY1 N D",
    "found  F AW1 N D",
    "think  TH IH1 NG K",
    "thought  TH AO1 T",
    "say  S EY1",
    "said  S EH1 D",
    "tell  T EH1 L",
    "told  T OW1 L D",
    "work  W ER1 K",
    "play  P L EY1",
    "read  R IY1 D",
    "read(1)  R EH1 D",
    "reading  R IY1 D IH0 NG",
    "write  R AY1 T",
    "wrote  R OW1 T",
    "over  OW1 V ER0",
    "under  AH1 N D ER0",
    "very  V EH1 R IY0",
    "never  N EH1 V ER0",
    "always  AO1 L W EY2 Z",
    "many  M EH1 N IY0",
    "some  S AH1 M",
    "all  AO1 L",
    "one  W AH1 N",
    "two  T UW1",
    "three  TH R IY1",
    "first  F ER1 S T",
    "last  L AE1 S T",
    "again  AH0 G EH1 N",
    "today  T AH0 D EY1",
    "tomorrow  T AH0 M AA1 R OW2",
];

static SHARED: LazyLock<Arc<PronouncingDictionary>> =
    LazyLock::new(|| Arc::new(PronouncingDictionary::builtin()));

/// A pronouncing dictionary: lower-cased word → pronunciation variants.
#[derive(Debug, Clone, Default)]
pub struct PronouncingDictionary {
    /// Pronunciation variants per word, in insertion order
    entries: AHashMap<String, Vec<Vec<String>>>,
}

impl PronouncingDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        PronouncingDictionary {
            entries: AHashMap::new(),
        }
    }

    /// Create a dictionary holding the built-in common-word entries.
    pub fn builtin() -> Self {
        let mut dictionary = PronouncingDictionary::new();
        for &line in BUILTIN_ENTRIES {
            if let Some((word, phones)) = parse_entry(line) {
                dictionary.insert(word, phones);
            }
        }
        dictionary
    }

    /// Get the process-wide shared dictionary, loaded on first use and
    /// never mutated afterwards.
    pub fn shared() -> Arc<PronouncingDictionary> {
        Arc::clone(&SHARED)
    }

    /// Add a pronunciation variant for a word. The word is lower-cased;
    /// variants accumulate in insertion order.
    pub fn insert<W: Into<String>>(&mut self, word: W, phones: Vec<String>) {
        let key = word.into().to_lowercase();
        self.entries.entry(key).or_default().push(phones);
    }

    /// Get the pronunciation variants for a word, if any.
    pub fn pronunciations(&self, word: &str) -> Option<&[Vec<String>]> {
        self.entries.get(&word.to_lowercase()).map(Vec::as_slice)
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&word.to_lowercase())
    }

    /// Get the number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a dictionary from a CMUdict-format file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a dictionary from a CMUdict-format reader: one entry per line
    /// (`WORD  PH PH PH`), `WORD(1)` keys for additional variants, `;;;`
    /// comment lines skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut dictionary = PronouncingDictionary::new();
        for line in reader.lines() {
            let line = line?;
            if let Some((word, phones)) = parse_entry(&line) {
                dictionary.insert(word, phones);
            }
        }
        Ok(dictionary)
    }
}

/// Parse one dictionary line into (word, phonemes). Returns `None` for
/// blank lines, comments, and entries without phonemes.
fn parse_entry(line: &str) -> Option<(String, Vec<String>)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(";;;") {
        return None;
    }
    let mut parts = line.split_whitespace();
    let word = parts.next()?;
    // "WORD(1)" marks an additional pronunciation variant of WORD.
    let word = word.split('(').next()?;
    let phones: Vec<String> = parts.map(str::to_string).collect();
    if word.is_empty() || phones.is_empty() {
        return None;
    }
    Some((word.to_lowercase(), phones))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let dictionary = PronouncingDictionary::builtin();
        let variants = dictionary.pronunciations("cat").unwrap();

        assert_eq!(variants[0], vec!["K", "AE1", "T"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dictionary = PronouncingDictionary::builtin();
        assert!(dictionary.contains("Cat"));
        assert!(dictionary.contains("CAT"));
        assert!(!dictionary.contains("zzxqv"));
    }

    #[test]
    fn test_variants_keep_order() {
        let dictionary = PronouncingDictionary::builtin();
        let variants = dictionary.pronunciations("read").unwrap();

        // The present-tense pronunciation is listed first.
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0], vec!["R", "IY1", "D"]);
        assert_eq!(variants[1], vec!["R", "EH1", "D"]);
    }

    #[test]
    fn test_insert_lowercases_key() {
        let mut dictionary = PronouncingDictionary::new();
        dictionary.insert("Zebra", vec!["Z".into(), "IY1".into(), "B".into(), "R".into(), "AH0".into()]);

        assert!(dictionary.contains("zebra"));
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn test_parse_entry() {
        assert_eq!(
            parse_entry("CAT  K AE1 T"),
            Some(("cat".to_string(), vec!["K".into(), "AE1".into(), "T".into()]))
        );
        assert_eq!(
            parse_entry("CAT(1)  K AE1 T S"),
            Some(("cat".to_string(), vec!["K".into(), "AE1".into(), "T".into(), "S".into()]))
        );
        assert_eq!(parse_entry(";;; a comment"), None);
        assert_eq!(parse_entry(""), None);
        assert_eq!(parse_entry("LONELY"), None);
    }

    #[test]
    fn test_from_reader() {
        let data = ";;; fixture\nCAT  K AE1 T\nDOG  D AO1 G\n\nDOG(1)  D AO1 G Z\n";
        let dictionary = PronouncingDictionary::from_reader(data.as_bytes()).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.pronunciations("dog").unwrap().len(), 2);
    }

    #[test]
    fn test_shared_is_builtin() {
        let shared = PronouncingDictionary::shared();
        assert!(shared.contains("banana"));
        assert!(!shared.is_empty());
    }
}
