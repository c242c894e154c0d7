//! The context-selection protocol.

use crate::error::ContextError;
use crate::poem::Poem;
use std::sync::Arc;

/// Extracts the prompt excerpt a generator sends to the text service.
///
/// Implementations are pure functions of the poem: no side effects, no
/// hidden state, no access to the text service. Selecting twice from an
/// unchanged poem yields the same string.
pub trait ContextSelector: Send + Sync {
    /// Select an excerpt of `poem`.
    ///
    /// An empty poem yields an empty string. Too few lines or words is not
    /// an error; an explicit index that does not exist is.
    fn select(&self, poem: &Poem) -> Result<String, ContextError>;
}

impl<S: ContextSelector + ?Sized> ContextSelector for &S {
    fn select(&self, poem: &Poem) -> Result<String, ContextError> {
        (**self).select(poem)
    }
}

impl<S: ContextSelector + ?Sized> ContextSelector for Box<S> {
    fn select(&self, poem: &Poem) -> Result<String, ContextError> {
        (**self).select(poem)
    }
}

impl<S: ContextSelector + ?Sized> ContextSelector for Arc<S> {
    fn select(&self, poem: &Poem) -> Result<String, ContextError> {
        (**self).select(poem)
    }
}
