//! Word-granular selectors.
//!
//! Words are whitespace-separated tokens flattened across every line, so a
//! word window may start mid-line and span line boundaries.

use nouveau_types::{ContextError, ContextSelector, Poem};

fn words(poem: &Poem) -> Vec<&str> {
    poem.lines()
        .iter()
        .flat_map(|line| line.text.split_whitespace())
        .collect()
}

/// The last `n` words of the poem, single-space joined.
///
/// # Example
///
/// ```
/// use nouveau_context::LastWords;
/// use nouveau_types::{Author, ContextSelector, Poem};
///
/// let mut poem = Poem::new(4, "fake", "last_words");
/// poem.add_line("the rain falls", Author::Human).unwrap();
/// poem.add_line("soft on the ground", Author::Ai).unwrap();
///
/// assert_eq!(LastWords::new(5).select(&poem).unwrap(), "falls soft on the ground");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastWords {
    n: usize,
}

impl LastWords {
    /// Select the last `n` words.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl ContextSelector for LastWords {
    fn select(&self, poem: &Poem) -> Result<String, ContextError> {
        let all = words(poem);
        let start = all.len().saturating_sub(self.n);
        let excerpt = all[start..].join(" ");
        tracing::trace!(selector = "last_words", n = self.n, chars = excerpt.len());
        Ok(excerpt)
    }
}

/// The first `n` words of the poem, single-space joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstWords {
    n: usize,
}

impl FirstWords {
    /// Select the first `n` words.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl ContextSelector for FirstWords {
    fn select(&self, poem: &Poem) -> Result<String, ContextError> {
        let all = words(poem);
        let excerpt = all[..self.n.min(all.len())].join(" ");
        tracing::trace!(selector = "first_words", n = self.n, chars = excerpt.len());
        Ok(excerpt)
    }
}
