//! End-rhyme objective.

use nouveau_types::{ConfigError, Poem, ScoreFactory, Scorer, ServiceError};

/// The last whitespace token of `text` that contains an alphanumeric
/// character, or `""` when there is none.
pub fn final_word(text: &str) -> &str {
    text.split_whitespace()
        .rev()
        .find(|w| w.chars().any(char::is_alphanumeric))
        .unwrap_or("")
}

/// The lowercased last `n` alphanumeric characters of `word`.
///
/// Punctuation is dropped first, so `"streets,"` and `"streets"` share an
/// ending. Words shorter than `n` are returned whole.
///
/// ```
/// use nouveau_score::end_sound;
///
/// assert_eq!(end_sound("Stone!", 3), "one");
/// assert_eq!(end_sound("hi", 3), "hi");
/// ```
pub fn end_sound(word: &str, n: usize) -> String {
    let chars: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    let start = chars.len().saturating_sub(n);
    chars[start..].iter().collect()
}

/// Cost = 0 when the candidate's final word ends like the previous line's
/// final word, 1 otherwise.
///
/// Endings compare the last `n_chars` characters, case-insensitively. With
/// no previous line there is nothing to rhyme with and every candidate
/// costs 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RhymeScorer {
    n_chars: usize,
}

impl RhymeScorer {
    /// Window used when none is specified.
    pub const DEFAULT_CHARS: usize = 3;

    /// Compare the last `n_chars` characters. Zero is rejected.
    pub fn new(n_chars: usize) -> Result<Self, ConfigError> {
        if n_chars == 0 {
            return Err(ConfigError::ZeroRhymeWindow);
        }
        Ok(Self { n_chars })
    }

    /// Number of trailing characters compared.
    pub fn n_chars(&self) -> usize {
        self.n_chars
    }
}

impl Default for RhymeScorer {
    fn default() -> Self {
        Self {
            n_chars: Self::DEFAULT_CHARS,
        }
    }
}

impl ScoreFactory for RhymeScorer {
    fn make_scorer(&self, poem: &Poem) -> Box<dyn Scorer> {
        let target = poem
            .lines()
            .last()
            .map(|line| end_sound(final_word(&line.text), self.n_chars));
        if target.is_none() {
            tracing::debug!("rhyme scorer has no previous line; every candidate costs 0");
        }
        Box::new(RhymeCost {
            target,
            n_chars: self.n_chars,
        })
    }
}

struct RhymeCost {
    target: Option<String>,
    n_chars: usize,
}

impl Scorer for RhymeCost {
    fn score(&self, candidate: &str) -> Result<f64, ServiceError> {
        let Some(target) = &self.target else {
            return Ok(0.0);
        };
        let ending = end_sound(final_word(candidate), self.n_chars);
        Ok(if ending == *target { 0.0 } else { 1.0 })
    }
}
