//! Integration tests for the word-granular selectors.

use nouveau_context::{FirstWords, LastWords};
use nouveau_types::{Author, ContextSelector, Poem};

fn make_poem(lines: &[&str]) -> Poem {
    let mut poem = Poem::new(10, "fake", "words");
    for text in lines {
        poem.add_line(*text, Author::Human).unwrap();
    }
    poem
}

#[test]
fn last_words_spans_lines() {
    let poem = make_poem(&["the rain falls", "soft on the ground"]);
    assert_eq!(LastWords::new(4).select(&poem).unwrap(), "soft on the ground");
    assert_eq!(LastWords::new(5).select(&poem).unwrap(), "falls soft on the ground");
}

#[test]
fn first_words_spans_lines() {
    let poem = make_poem(&["the rain", "falls on the ground"]);
    assert_eq!(FirstWords::new(3).select(&poem).unwrap(), "the rain falls");
}

#[test]
fn fewer_words_than_window_selects_all() {
    let poem = make_poem(&["just three words"]);
    assert_eq!(LastWords::new(10).select(&poem).unwrap(), "just three words");
    assert_eq!(FirstWords::new(10).select(&poem).unwrap(), "just three words");
}

#[test]
fn irregular_whitespace_collapses_to_single_spaces() {
    let poem = make_poem(&["  wind\tthrough ", "", "the   pines  "]);
    assert_eq!(LastWords::new(4).select(&poem).unwrap(), "wind through the pines");
}

#[test]
fn empty_poem_selects_empty_string() {
    let poem = make_poem(&[]);
    assert_eq!(LastWords::new(3).select(&poem).unwrap(), "");
    assert_eq!(FirstWords::new(3).select(&poem).unwrap(), "");
}
