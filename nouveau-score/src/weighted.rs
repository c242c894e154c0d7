//! Weighted combination of objectives.

use nouveau_types::{ConfigError, Poem, ScoreFactory, Scorer, ServiceError};

/// Cost = `Σ weightᵢ · costᵢ` over the member factories.
///
/// The composition point for multi-objective sampling, e.g. "three
/// syllables *and* rhymes with the last line". An empty sum costs 0.
///
/// # Example
///
/// ```
/// use nouveau_score::{RhymeScorer, SyllableScorer, WeightedSum};
///
/// let objective = WeightedSum::new()
///     .with(1.0, SyllableScorer::new(3))
///     .unwrap()
///     .with(2.0, RhymeScorer::default())
///     .unwrap();
/// assert_eq!(objective.len(), 2);
/// ```
#[derive(Default)]
pub struct WeightedSum {
    parts: Vec<(f64, Box<dyn ScoreFactory>)>,
}

impl WeightedSum {
    /// An empty sum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `factory` with `weight`. Weights must be finite and
    /// non-negative; a negative weight would turn a cost into a reward.
    pub fn with(
        mut self,
        weight: f64,
        factory: impl ScoreFactory + 'static,
    ) -> Result<Self, ConfigError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(ConfigError::InvalidWeight(weight));
        }
        self.parts.push((weight, Box::new(factory)));
        Ok(self)
    }

    /// Number of member objectives.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the sum has no members.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl std::fmt::Debug for WeightedSum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let weights: Vec<f64> = self.parts.iter().map(|(weight, _)| *weight).collect();
        f.debug_struct("WeightedSum")
            .field("weights", &weights)
            .finish_non_exhaustive()
    }
}

impl ScoreFactory for WeightedSum {
    fn make_scorer(&self, poem: &Poem) -> Box<dyn Scorer> {
        Box::new(WeightedCost {
            parts: self
                .parts
                .iter()
                .map(|(weight, factory)| (*weight, factory.make_scorer(poem)))
                .collect(),
        })
    }
}

struct WeightedCost {
    parts: Vec<(f64, Box<dyn Scorer>)>,
}

impl Scorer for WeightedCost {
    fn score(&self, candidate: &str) -> Result<f64, ServiceError> {
        self.parts.iter().try_fold(0.0, |total, (weight, scorer)| {
            Ok(total + weight * scorer.score(candidate)?)
        })
    }
}
