//! Syllable counting.
//!
//! Dictionary-backed when the word is known: syllables are the phonemes of
//! the first pronunciation variant that carry a trailing stress digit
//! (ARPABET marks vowel nuclei that way). Unknown words fall back to
//! counting vowel letters, with "y" treated as a vowel. Never errors.

use crate::phonetics::dictionary::PronouncingDictionary;

/// Vowel letters used by the out-of-dictionary fallback.
const FALLBACK_VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Estimate the syllable count of a single word.
///
/// # Examples
///
/// ```
/// use lexis::phonetics::dictionary::PronouncingDictionary;
/// use lexis::phonetics::syllable::count_syllables;
///
/// let dictionary = PronouncingDictionary::builtin();
/// assert_eq!(count_syllables(&dictionary, "cat"), 1);
/// assert_eq!(count_syllables(&dictionary, "banana"), 3);
/// assert_eq!(count_syllables(&dictionary, "zzxqv"), 0);
/// ```
pub fn count_syllables(dictionary: &PronouncingDictionary, word: &str) -> usize {
    let word = word.to_lowercase();
    match dictionary.pronunciations(&word).and_then(|variants| variants.first()) {
        Some(phones) => phones
            .iter()
            .filter(|phone| phone.ends_with(|c: char| c.is_ascii_digit()))
            .count(),
        None => word.chars().filter(|c| FALLBACK_VOWELS.contains(c)).count(),
    }
}
