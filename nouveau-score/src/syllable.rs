//! Syllable-count objective.

use nouveau_types::{Poem, ScoreFactory, Scorer, ServiceError};

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Approximate syllable count of `text`.
///
/// Each whitespace-separated word contributes one syllable per maximal run
/// of vowels among its letters (`y` counts as a vowel), and at least one
/// if it has any letter at all. Punctuation-only tokens contribute
/// nothing. This is a heuristic: silent endings and diphthong splits are
/// not modelled.
///
/// ```
/// use nouveau_score::count_syllables;
///
/// assert_eq!(count_syllables("the rain falls"), 3);
/// assert_eq!(count_syllables("beautiful"), 3);
/// ```
pub fn count_syllables(text: &str) -> usize {
    text.split_whitespace().map(word_syllables).sum()
}

fn word_syllables(word: &str) -> usize {
    let mut letters = 0;
    let mut runs = 0;
    let mut in_vowel_run = false;
    for c in word.chars().filter(|c| c.is_alphabetic()) {
        letters += 1;
        let is_vowel = VOWELS.contains(&c.to_ascii_lowercase());
        if is_vowel && !in_vowel_run {
            runs += 1;
        }
        in_vowel_run = is_vowel;
    }
    if letters == 0 { 0 } else { runs.max(1) }
}

/// Cost = `|syllables(candidate) - target|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyllableScorer {
    target: usize,
}

impl SyllableScorer {
    /// Prefer candidates with `target` syllables.
    #[must_use]
    pub fn new(target: usize) -> Self {
        Self { target }
    }

    /// The target syllable count.
    pub fn target(&self) -> usize {
        self.target
    }
}

impl ScoreFactory for SyllableScorer {
    fn make_scorer(&self, _poem: &Poem) -> Box<dyn Scorer> {
        Box::new(*self)
    }
}

impl Scorer for SyllableScorer {
    fn score(&self, candidate: &str) -> Result<f64, ServiceError> {
        Ok(count_syllables(candidate).abs_diff(self.target) as f64)
    }
}
