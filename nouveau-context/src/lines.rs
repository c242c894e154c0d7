//! Line-granular selectors.

use nouveau_types::{ConfigError, ContextError, ContextSelector, Line, LineSelector, Poem};

fn join<'a>(lines: impl IntoIterator<Item = &'a Line>) -> String {
    lines
        .into_iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

// ---- LastLines ---------------------------------------------------------------

/// The last `n` lines, newline-joined.
///
/// Fewer than `n` lines selects all of them.
///
/// # Example
///
/// ```
/// use nouveau_context::LastLines;
/// use nouveau_types::{Author, ContextSelector, Poem};
///
/// let mut poem = Poem::new(4, "fake", "window");
/// poem.add_line("the river bends", Author::Human).unwrap();
/// poem.add_line("light on the water", Author::Ai).unwrap();
///
/// assert_eq!(LastLines::new(1).select(&poem).unwrap(), "light on the water");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastLines {
    n: usize,
}

impl LastLines {
    /// Select the last `n` lines.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl ContextSelector for LastLines {
    fn select(&self, poem: &Poem) -> Result<String, ContextError> {
        let lines = poem.lines();
        let start = lines.len().saturating_sub(self.n);
        let excerpt = join(&lines[start..]);
        tracing::trace!(selector = "last_lines", n = self.n, chars = excerpt.len());
        Ok(excerpt)
    }
}

// ---- FirstLines --------------------------------------------------------------

/// The first `n` lines, newline-joined.
///
/// Fewer than `n` lines selects all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstLines {
    n: usize,
}

impl FirstLines {
    /// Select the first `n` lines.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl ContextSelector for FirstLines {
    fn select(&self, poem: &Poem) -> Result<String, ContextError> {
        let excerpt = join(poem.lines().iter().take(self.n));
        tracing::trace!(selector = "first_lines", n = self.n, chars = excerpt.len());
        Ok(excerpt)
    }
}

// ---- LineWindow --------------------------------------------------------------

/// Lines chosen by a [`LineSelector`], newline-joined in selection order.
///
/// - `Last(n)` behaves exactly like [`LastLines`].
/// - `Indices` picks exactly those lines in the given order; duplicates
///   repeat. An index that does not address a line is an error.
/// - `Range` follows slice rules: half-open, clamped, reversed for a
///   negative step.
///
/// # Example
///
/// ```
/// use nouveau_context::LineWindow;
/// use nouveau_types::{Author, ContextSelector, LineSelector, Poem};
///
/// let mut poem = Poem::new(4, "fake", "bookend");
/// for text in ["A", "B", "C"] {
///     poem.add_line(text, Author::Human).unwrap();
/// }
///
/// let bookend = LineWindow::new(LineSelector::indices(vec![0, -1]).unwrap()).unwrap();
/// assert_eq!(bookend.select(&poem).unwrap(), "A\nC");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineWindow {
    selector: LineSelector,
}

impl LineWindow {
    /// Creates a new `LineWindow`.
    ///
    /// Fails for an empty index list or a zero range step.
    pub fn new(selector: LineSelector) -> Result<Self, ConfigError> {
        selector.validate()?;
        Ok(Self { selector })
    }

    /// The selector this window applies.
    pub fn selector(&self) -> &LineSelector {
        &self.selector
    }
}

impl ContextSelector for LineWindow {
    fn select(&self, poem: &Poem) -> Result<String, ContextError> {
        let lines = poem.lines();
        if lines.is_empty() {
            return Ok(String::new());
        }

        let excerpt = match &self.selector {
            LineSelector::Last(n) => return LastLines::new(*n).select(poem),
            LineSelector::Indices(indices) => indices
                .iter()
                .map(|&index| {
                    poem.text(index).ok_or(ContextError::IndexOutOfRange {
                        index,
                        len: lines.len(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?
                .join("\n"),
            LineSelector::Range(spec) => {
                join(spec.indices(lines.len()).into_iter().map(|i| &lines[i]))
            }
        };
        tracing::trace!(selector = "line_window", chars = excerpt.len());
        Ok(excerpt)
    }
}
