//! Constrained generation by rejection sampling.
//!
//! A single stochastic service call becomes a goal-directed one: draw a
//! batch of candidates for the same prompt, score each with a cost
//! function fixed at batch start, keep the cheapest.
//!
//! The scored batch ([`Constrained::candidates`]) is the same shape a
//! group-reward trainer samples: several completions, one shared
//! objective. A trainer reuses the [`ScoreFactory`] contract and flips the
//! direction of optimization.

use crate::config::ConstrainedConfig;
use nouveau_types::{
    ConfigError, ContextSelector, GenerateError, Generator, Poem, ScoreFactory, Scorer,
    TextService,
};

/// One scored draw. Lives only for the duration of a call.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Position in draw order, starting at 0.
    pub index: usize,
    /// The generated text, unmodified.
    pub text: String,
    /// Its cost. Lower is better.
    pub cost: f64,
}

/// The lowest-cost candidate; the earliest draw wins ties.
///
/// A NaN cost ranks as worse than every finite cost. Returns `None` only
/// for an empty batch.
pub fn select_best(candidates: &[Candidate]) -> Option<&Candidate> {
    candidates.iter().fold(None, |best, candidate| match best {
        Some(b) if !beats(candidate, b) => Some(b),
        _ => Some(candidate),
    })
}

/// Whether `challenger` strictly improves on `incumbent`.
fn beats(challenger: &Candidate, incumbent: &Candidate) -> bool {
    let rank = |c: &Candidate| if c.cost.is_nan() { f64::INFINITY } else { c.cost };
    rank(challenger) < rank(incumbent)
}

/// Draws `n_candidates` continuations and returns the cheapest.
///
/// Per call:
/// 1. the prompt is selected once;
/// 2. the scorer is built once, from the poem as it stands;
/// 3. candidates are drawn one after another, in order;
/// 4. each is scored, and the minimum-cost text is returned unmodified.
///
/// A failing draw or a failing score fails the whole call. There is no
/// retry and no partial result.
///
/// # Example
///
/// ```
/// use nouveau_context::LastLines;
/// use nouveau_generate::{Constrained, ConstrainedConfig};
/// use nouveau_score::SyllableScorer;
/// use nouveau_types::test_utils::ScriptedService;
/// use nouveau_types::{Author, Generator, Poem};
///
/// let mut poem = Poem::new(4, "fake", "syllable");
/// poem.add_line("start", Author::Human).unwrap();
///
/// let config = ConstrainedConfig { n_candidates: 3, ..Default::default() };
/// let generator = Constrained::new(LastLines::new(1), SyllableScorer::new(1), config).unwrap();
///
/// let mut service = ScriptedService::new(["beautiful afternoon sky", "hi", "open door"]);
/// assert_eq!(generator.generate(&poem, &mut service).unwrap(), "hi");
/// ```
#[derive(Debug, Clone)]
pub struct Constrained<S, F> {
    selector: S,
    factory: F,
    config: ConstrainedConfig,
}

impl<S, F> Constrained<S, F>
where
    S: ContextSelector,
    F: ScoreFactory,
{
    /// Create a constrained generator.
    ///
    /// Fails with [`ConfigError::NoCandidates`] when `n_candidates` is 0,
    /// before any service call can happen.
    pub fn new(selector: S, factory: F, config: ConstrainedConfig) -> Result<Self, ConfigError> {
        if config.n_candidates < 1 {
            return Err(ConfigError::NoCandidates);
        }
        Ok(Self {
            selector,
            factory,
            config,
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &ConstrainedConfig {
        &self.config
    }

    /// Draw and score the full batch, in draw order.
    pub fn candidates(
        &self,
        poem: &Poem,
        service: &mut dyn TextService,
    ) -> Result<Vec<Candidate>, GenerateError> {
        let prompt = self.selector.select(poem)?;
        let scorer = self.factory.make_scorer(poem);

        let mut batch = Vec::with_capacity(self.config.n_candidates);
        for index in 0..self.config.n_candidates {
            batch.push(self.draw(index, &prompt, scorer.as_ref(), service)?);
        }
        Ok(batch)
    }

    fn draw(
        &self,
        index: usize,
        prompt: &str,
        scorer: &dyn Scorer,
        service: &mut dyn TextService,
    ) -> Result<Candidate, GenerateError> {
        let text = service.generate(prompt, self.config.max_new_tokens)?;
        let cost = scorer.score(&text)?;
        tracing::debug!(index, cost, "nouveau.constrained.candidate");
        Ok(Candidate { index, text, cost })
    }
}

impl<S, F> Generator for Constrained<S, F>
where
    S: ContextSelector,
    F: ScoreFactory,
{
    fn generate(&self, poem: &Poem, service: &mut dyn TextService) -> Result<String, GenerateError> {
        let prompt = self.selector.select(poem)?;
        let scorer = self.factory.make_scorer(poem);

        // `new` guarantees n_candidates >= 1, so draw 0 always exists.
        let mut best = self.draw(0, &prompt, scorer.as_ref(), service)?;
        for index in 1..self.config.n_candidates {
            let candidate = self.draw(index, &prompt, scorer.as_ref(), service)?;
            if beats(&candidate, &best) {
                best = candidate;
            }
        }
        tracing::debug!(
            index = best.index,
            cost = best.cost,
            drawn = self.config.n_candidates,
            "nouveau.constrained.selected"
        );
        Ok(best.text)
    }
}
