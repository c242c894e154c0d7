//! The generator protocol and the condition used by conditional dispatch.

use crate::error::GenerateError;
use crate::poem::Poem;
use crate::service::TextService;
use std::sync::Arc;

/// Produces the text of one new line.
///
/// Object-safe: registries store generators as `Arc<dyn Generator>`.
/// A generator only reads the poem; appending the returned line is the
/// caller's job.
pub trait Generator: Send + Sync {
    /// Generate one line for `poem` using `service`.
    ///
    /// Service failures propagate unchanged. Generators do not retry.
    fn generate(&self, poem: &Poem, service: &mut dyn TextService) -> Result<String, GenerateError>;
}

impl<G: Generator + ?Sized> Generator for &G {
    fn generate(&self, poem: &Poem, service: &mut dyn TextService) -> Result<String, GenerateError> {
        (**self).generate(poem, service)
    }
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn generate(&self, poem: &Poem, service: &mut dyn TextService) -> Result<String, GenerateError> {
        (**self).generate(poem, service)
    }
}

impl<G: Generator + ?Sized> Generator for Arc<G> {
    fn generate(&self, poem: &Poem, service: &mut dyn TextService) -> Result<String, GenerateError> {
        (**self).generate(poem, service)
    }
}

/// A pure predicate over the poem, used to pick a branch.
pub trait Condition: Send + Sync {
    /// Evaluate the predicate. Must not have side effects.
    fn test(&self, poem: &Poem) -> bool;
}

impl<F> Condition for F
where
    F: Fn(&Poem) -> bool + Send + Sync,
{
    fn test(&self, poem: &Poem) -> bool {
        self(poem)
    }
}
