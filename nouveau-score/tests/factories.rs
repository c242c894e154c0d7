//! Integration tests for the score factories.

use nouveau_score::{LexiconSentiment, RhymeScorer, SentimentScorer, SyllableScorer, WeightedSum};
use nouveau_types::test_utils::FixedSentiment;
use nouveau_types::{Author, ConfigError, Poem, ScoreFactory, ServiceError};
use std::sync::Arc;

fn make_poem(lines: &[&str]) -> Poem {
    let mut poem = Poem::new(10, "fake", "rhyme");
    for text in lines {
        poem.add_line(*text, Author::Human).unwrap();
    }
    poem
}

// --- SyllableScorer ---

#[test]
fn syllable_exact_match_costs_zero() {
    let score = SyllableScorer::new(3).make_scorer(&make_poem(&[]));
    assert_eq!(score.score("the rain falls").unwrap(), 0.0);
}

#[test]
fn syllable_cost_is_distance() {
    let score = SyllableScorer::new(5).make_scorer(&make_poem(&[]));
    assert_eq!(score.score("rain").unwrap(), 4.0);
}

// --- RhymeScorer ---

#[test]
fn rhyme_matches_previous_line_ending() {
    let poem = make_poem(&["the cat sat"]);
    let score = RhymeScorer::new(2).unwrap().make_scorer(&poem);
    assert_eq!(score.score("a big fat mat").unwrap(), 0.0);
    assert_eq!(score.score("a happy dog").unwrap(), 1.0);
}

#[test]
fn rhyme_default_window_is_three_chars() {
    let poem = make_poem(&["falling rain"]);
    let score = RhymeScorer::default().make_scorer(&poem);
    assert_eq!(score.score("the night train").unwrap(), 0.0);
    assert_eq!(score.score("open door").unwrap(), 1.0);
}

#[test]
fn rhyme_ignores_case_and_punctuation() {
    let poem = make_poem(&["under the STARS,"]);
    let score = RhymeScorer::new(3).unwrap().make_scorer(&poem);
    assert_eq!(score.score("among the old cars!").unwrap(), 0.0);
}

#[test]
fn rhyme_uses_only_the_most_recent_line() {
    let poem = make_poem(&["the cat sat", "a dog ran"]);
    let score = RhymeScorer::new(2).unwrap().make_scorer(&poem);
    assert_eq!(score.score("a big fat mat").unwrap(), 1.0);
    assert_eq!(score.score("then he began").unwrap(), 0.0);
}

#[test]
fn rhyme_without_previous_line_is_vacuous() {
    let score = RhymeScorer::default().make_scorer(&make_poem(&[]));
    assert_eq!(score.score("anything").unwrap(), 0.0);
    assert_eq!(score.score("").unwrap(), 0.0);
}

#[test]
fn rhyme_state_is_fixed_at_batch_start() {
    let mut poem = make_poem(&["the cat sat"]);
    let score = RhymeScorer::new(2).unwrap().make_scorer(&poem);
    poem.add_line("a dog ran", Author::Ai).unwrap();
    // Still rhymes against "sat": the scorer captured the poem at creation.
    assert_eq!(score.score("a big fat mat").unwrap(), 0.0);
}

// --- SentimentScorer ---

#[test]
fn sentiment_cost_is_distance_from_target() {
    let analyzer = FixedSentiment::new().with("glad", 0.8).with("grim", -0.6);
    let score = SentimentScorer::new(0.5, Arc::new(analyzer)).make_scorer(&make_poem(&[]));
    assert!((score.score("glad").unwrap() - 0.3).abs() < 1e-9);
    assert!((score.score("grim").unwrap() - 1.1).abs() < 1e-9);
    assert!((score.score("unknown").unwrap() - 0.5).abs() < 1e-9);
}

#[test]
fn sentiment_prefers_positive_for_positive_target() {
    let score = SentimentScorer::new(1.0, Arc::new(LexiconSentiment::new()))
        .make_scorer(&make_poem(&[]));
    let positive = score.score("I love this wonderful day").unwrap();
    let negative = score.score("I hate this terrible day").unwrap();
    assert!(positive < negative);
}

#[test]
fn sentiment_prefers_negative_for_negative_target() {
    let score = SentimentScorer::new(-1.0, Arc::new(LexiconSentiment::new()))
        .make_scorer(&make_poem(&[]));
    let negative = score.score("I hate this terrible day").unwrap();
    let neutral = score.score("the stone sits on the ground").unwrap();
    assert!(negative < neutral);
}

#[test]
fn sentiment_failure_propagates() {
    let score = SentimentScorer::new(0.0, Arc::new(FixedSentiment::failing()))
        .make_scorer(&make_poem(&[]));
    let err = score.score("anything").unwrap_err();
    assert!(matches!(err, ServiceError::RequestFailed(_)));
}

// --- WeightedSum ---

#[test]
fn weighted_sum_adds_costs() {
    let combined = WeightedSum::new()
        .with(1.0, SyllableScorer::new(3))
        .unwrap()
        .with(1.0, SyllableScorer::new(1))
        .unwrap();
    let score = combined.make_scorer(&make_poem(&[]));
    // "rain": |1-3| + |1-1|
    assert_eq!(score.score("rain").unwrap(), 2.0);
    // "the rain falls": |3-3| + |3-1|
    assert_eq!(score.score("the rain falls").unwrap(), 2.0);
}

#[test]
fn weighted_sum_respects_weights() {
    let combined = WeightedSum::new()
        .with(2.0, SyllableScorer::new(5))
        .unwrap()
        .with(1.0, SyllableScorer::new(1))
        .unwrap();
    let score = combined.make_scorer(&make_poem(&[]));
    assert_eq!(score.score("rain").unwrap(), 8.0);
}

#[test]
fn weighted_sum_mixes_objectives() {
    let combined = WeightedSum::new()
        .with(1.0, SyllableScorer::new(3))
        .unwrap()
        .with(1.0, RhymeScorer::default())
        .unwrap();
    let score = combined.make_scorer(&make_poem(&["falling rain"]));
    assert_eq!(score.score("the night train").unwrap(), 0.0);
    assert_eq!(score.score("plain").unwrap(), 2.0);
    assert_eq!(score.score("beautiful afternoon sky").unwrap(), 5.0);
}

#[test]
fn empty_weighted_sum_costs_zero() {
    let score = WeightedSum::new().make_scorer(&make_poem(&[]));
    assert_eq!(score.score("anything").unwrap(), 0.0);
}

#[test]
fn weighted_sum_rejects_bad_weights() {
    assert_eq!(
        WeightedSum::new().with(-1.0, SyllableScorer::new(1)).err(),
        Some(ConfigError::InvalidWeight(-1.0))
    );
    assert!(WeightedSum::new().with(f64::NAN, SyllableScorer::new(1)).is_err());
    assert!(WeightedSum::new().with(f64::INFINITY, SyllableScorer::new(1)).is_err());
}
