//! Integration tests for the TextClassifier over multi-sentence documents.

use std::collections::HashSet;
use std::io::Write;
use std::sync::Arc;

use lexis::analysis::tagger::OPEN_CLASS_TAGS;
use lexis::prelude::*;
use tempfile::TempDir;

fn word_set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_views_over_a_paragraph() -> Result<()> {
    let classifier = TextClassifier::new(
        "The quick brown fox jumps over the lazy dog. Dogs bark. Cats run away!",
    );

    // Three sentences, in document order.
    let sentences: Vec<Sentence> = classifier.sents(false)?.collect();
    assert_eq!(sentences.len(), 3);
    assert_eq!(sentences[0][0].text, "The");
    assert_eq!(sentences[1][0].text, "Dogs");
    assert_eq!(sentences[2][0].text, "Cats");

    // Words flatten the same sentences, preserving order.
    let words: Vec<Token> = classifier.words(false)?.collect();
    let flattened: Vec<Token> = sentences.into_iter().flatten().collect();
    assert_eq!(words, flattened);

    // Tagged views assign exactly one tag per token.
    for sentence in classifier.tagged_sents(false)? {
        assert!(sentence.iter().all(|token| token.tag.is_some()));
    }

    Ok(())
}

#[test]
fn test_lemmatized_tagged_words_keep_surface_tags() -> Result<()> {
    let classifier = TextClassifier::new("The cats are running.");

    let tagged: Vec<Token> = classifier.tagged_words(true)?.collect();
    let texts: Vec<&str> = tagged.iter().map(|token| token.text.as_str()).collect();
    let tags: Vec<&str> = tagged
        .iter()
        .map(|token| token.tag.as_deref().unwrap())
        .collect();

    assert_eq!(texts, vec!["The", "cat", "be", "run", "."]);
    assert_eq!(tags, vec!["DT", "NNS", "VBP", "VBG", "."]);

    Ok(())
}

#[test]
fn test_metrics_over_a_paragraph() -> Result<()> {
    let classifier = TextClassifier::new("Cats run. Dogs jump. People read books.");

    // Reading ease accumulates one term per sentence.
    let reading_ease = classifier.calculate_sentence_reading_ease()?;
    assert!(reading_ease > 300.0);

    // Open-class density: only "." tokens fall outside the open classes.
    let density =
        classifier.calculate_lexical_density_by_tags(&word_set(OPEN_CLASS_TAGS))?;
    assert!(density > 50.0);
    assert!(density < 100.0);

    // Frequency is per-mille over all tokens (10 tokens here).
    let frequency = classifier.calculate_words_frequency(&word_set(&["Cats", "Dogs"]))?;
    assert_eq!(frequency, 200.0);

    Ok(())
}

#[test]
fn test_empty_document_behavior() {
    let classifier = TextClassifier::new("");

    // Views are empty, not errors.
    assert_eq!(classifier.sents(false).unwrap().count(), 0);
    assert_eq!(classifier.words(true).unwrap().count(), 0);
    assert_eq!(classifier.calculate_sentence_reading_ease().unwrap(), 0.0);

    // Metrics that divide by the word count surface an explicit error.
    assert!(matches!(
        classifier.calculate_lexical_density_by_tags(&word_set(&["NN"])),
        Err(LexisError::EmptyDocument(_))
    ));
    assert!(matches!(
        classifier.calculate_words_frequency(&word_set(&["cats"])),
        Err(LexisError::EmptyDocument(_))
    ));
    assert!(matches!(
        classifier.calculate_type_token_ratio(),
        Err(LexisError::EmptyDocument(_))
    ));
}

#[test]
fn test_peculiar_expressions() -> Result<()> {
    let classifier = TextClassifier::new("Well, hello there!");

    assert!(classifier.has_peculiar_expression("hello")?);
    assert!(classifier.has_peculiar_expression("HELLO")?);
    assert!(classifier.has_peculiar_expression(r"hello\s+there")?);
    assert!(!classifier.has_peculiar_expression("goodbye")?);

    let classifier = TextClassifier::new("Goodbye");
    assert!(!classifier.has_peculiar_expression("hello")?);

    Ok(())
}

#[test]
fn test_fixture_dictionary_via_builder() -> Result<()> {
    let mut dictionary = PronouncingDictionary::new();
    dictionary.insert(
        "okapi",
        vec!["OW0".into(), "K".into(), "AA1".into(), "P".into(), "IY0".into()],
    );

    let classifier = TextClassifier::builder("The okapi hides.")
        .with_dictionary(Arc::new(dictionary))
        .build();

    assert_eq!(classifier.count_syllables("okapi"), 3);
    // "hides" is not in the fixture: vowel fallback counts "i", "e".
    assert_eq!(classifier.count_syllables("hides"), 2);

    Ok(())
}

#[test]
fn test_dictionary_file_loading() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("fixture.dict");

    let mut file = std::fs::File::create(&path)?;
    writeln!(file, ";;; fixture dictionary")?;
    writeln!(file, "CAT  K AE1 T")?;
    writeln!(file, "LEAD  L IY1 D")?;
    writeln!(file, "LEAD(1)  L EH1 D")?;
    drop(file);

    let dictionary = PronouncingDictionary::load_from_file(&path)?;
    assert_eq!(dictionary.len(), 2);
    assert_eq!(dictionary.pronunciations("lead").unwrap().len(), 2);

    let classifier = TextClassifier::builder("Cats follow the lead.")
        .with_dictionary(Arc::new(dictionary))
        .build();
    assert_eq!(classifier.count_syllables("CAT"), 1);

    Ok(())
}

#[test]
fn test_type_token_ratio_collapses_lemmas() -> Result<()> {
    // "runs" and "running" lemmatize to "run"; case differences collapse.
    let classifier = TextClassifier::new("She runs and he was running");

    let lemmas: Vec<String> = classifier.words(true)?.map(|token| token.text).collect();
    assert_eq!(lemmas, vec!["She", "run", "and", "he", "be", "run"]);

    let ratio = classifier.calculate_type_token_ratio()?;
    assert!((ratio - 5.0 / 6.0).abs() < 1e-9);

    Ok(())
}

#[test]
fn test_custom_tokenizer_injection() -> Result<()> {
    use lexis::analysis::tokenizer::RegexTokenizer;

    // A words-only tokenizer changes what the frequency metric sees.
    let classifier = TextClassifier::builder("Stop, or I say stop!")
        .with_tokenizer(Arc::new(RegexTokenizer::with_pattern(r"[A-Za-z]+")?))
        .build();

    let words: Vec<String> = classifier.words(false)?.map(|token| token.text).collect();
    assert_eq!(words, vec!["Stop", "or", "I", "say", "stop"]);

    let frequency = classifier.calculate_words_frequency(&word_set(&["stop"]))?;
    assert_eq!(frequency, 200.0);

    Ok(())
}
