//! Sentiment-target objective.

use nouveau_types::{Poem, ScoreFactory, Scorer, SentimentAnalyzer, ServiceError};
use std::sync::Arc;

/// Cost = `|compound(candidate) - target|`.
///
/// Measuring sentiment is delegated to a [`SentimentAnalyzer`]; this
/// factory only defines the distance. Analyzer failures propagate.
#[derive(Clone)]
pub struct SentimentScorer {
    target: f64,
    analyzer: Arc<dyn SentimentAnalyzer>,
}

impl SentimentScorer {
    /// Prefer candidates whose compound sentiment is close to `target`.
    pub fn new(target: f64, analyzer: Arc<dyn SentimentAnalyzer>) -> Self {
        Self { target, analyzer }
    }

    /// The target compound sentiment.
    pub fn target(&self) -> f64 {
        self.target
    }
}

impl std::fmt::Debug for SentimentScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentScorer")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

impl ScoreFactory for SentimentScorer {
    fn make_scorer(&self, _poem: &Poem) -> Box<dyn Scorer> {
        Box::new(self.clone())
    }
}

impl Scorer for SentimentScorer {
    fn score(&self, candidate: &str) -> Result<f64, ServiceError> {
        let compound = self.analyzer.compound(candidate)?;
        Ok((compound - self.target).abs())
    }
}
