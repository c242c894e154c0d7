//! Conditional dispatch between two generators.

use nouveau_types::{Condition, GenerateError, Generator, Poem, TextService};

/// Delegates to `if_true` when the condition holds, otherwise `if_false`.
///
/// The condition is evaluated once per call and must be pure. The chosen
/// branch does all the work; its result and errors pass through as-is.
#[derive(Debug, Clone)]
pub struct Conditional<C, T, F> {
    condition: C,
    if_true: T,
    if_false: F,
}

impl<C, T, F> Conditional<C, T, F>
where
    C: Condition,
    T: Generator,
    F: Generator,
{
    /// Create a conditional generator.
    pub fn new(condition: C, if_true: T, if_false: F) -> Self {
        Self {
            condition,
            if_true,
            if_false,
        }
    }
}

impl<C, T, F> Generator for Conditional<C, T, F>
where
    C: Condition,
    T: Generator,
    F: Generator,
{
    fn generate(&self, poem: &Poem, service: &mut dyn TextService) -> Result<String, GenerateError> {
        if self.condition.test(poem) {
            tracing::debug!(branch = "if_true", lines = poem.len(), "nouveau.conditional.branch");
            self.if_true.generate(poem, service)
        } else {
            tracing::debug!(branch = "if_false", lines = poem.len(), "nouveau.conditional.branch");
            self.if_false.generate(poem, service)
        }
    }
}

/// Holds when the next line will be the poem's last.
///
/// Used to close a poem on its opening image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FinalTurn;

impl Condition for FinalTurn {
    fn test(&self, poem: &Poem) -> bool {
        poem.len() + 1 == poem.max_lines()
    }
}
