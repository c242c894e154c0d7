//! The scoring protocol used by constrained generation.
//!
//! Costs are distances: lower is better. The same two-step shape (a
//! factory fixed at batch start, a scorer applied to every candidate)
//! serves as a reward interface for group sampling with the direction
//! of optimization reversed.

use crate::error::ServiceError;
use crate::poem::Poem;
use std::sync::Arc;

/// A cost function over candidate strings, closed over poem state.
pub trait Scorer: Send + Sync {
    /// Cost of `candidate`. Pure: the same candidate always costs the same.
    fn score(&self, candidate: &str) -> Result<f64, ServiceError>;
}

/// Builds a [`Scorer`] from the poem's state at batch start.
///
/// Called once per constrained-generation call, so whatever the scorer
/// captures (a previous line's ending, say) is fixed for every candidate
/// in the batch.
pub trait ScoreFactory: Send + Sync {
    /// Build a scorer for the current poem.
    fn make_scorer(&self, poem: &Poem) -> Box<dyn Scorer>;
}

impl<F: ScoreFactory + ?Sized> ScoreFactory for &F {
    fn make_scorer(&self, poem: &Poem) -> Box<dyn Scorer> {
        (**self).make_scorer(poem)
    }
}

impl<F: ScoreFactory + ?Sized> ScoreFactory for Box<F> {
    fn make_scorer(&self, poem: &Poem) -> Box<dyn Scorer> {
        (**self).make_scorer(poem)
    }
}

impl<F: ScoreFactory + ?Sized> ScoreFactory for Arc<F> {
    fn make_scorer(&self, poem: &Poem) -> Box<dyn Scorer> {
        (**self).make_scorer(poem)
    }
}
